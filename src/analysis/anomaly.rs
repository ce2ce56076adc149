//! Anomaly detection over joined GDP/expense records.
//!
//! Two rule families run against each country's year-ascending expense
//! sequence:
//!
//! - ratio bands on the expense-to-GDP percentage
//! - year-over-year change bands on the raw expense value
//!
//! The high-ratio and spike bands are cascading overrides: thresholds are
//! evaluated least to most severe and the last match wins, so a 60% ratio is
//! `VeryHighSpending` only, never also the lower-severity type. The low-ratio
//! and drop rules are separate, non-exclusive evaluations of the same point.
//!
//! Countries are classified independently (in parallel), then merged and
//! sorted severity-descending / year-descending, which also makes the output
//! deterministic and the detector idempotent.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::analysis::ratio::expense_to_gdp_ratios;
use crate::domain::{Anomaly, AnomalyKind, CountryYear, IndicatorRecord, Severity};

/// Ratio bands (percent of GDP).
const HIGH_RATIO_PCT: f64 = 40.0;
const HIGHER_RATIO_PCT: f64 = 45.0;
const VERY_HIGH_RATIO_PCT: f64 = 50.0;
const LOW_RATIO_PCT: f64 = 15.0;

/// Year-over-year change bands (percent).
const SPIKE_PCT: f64 = 50.0;
const MAJOR_SPIKE_PCT: f64 = 100.0;
const DROP_PCT: f64 = -40.0;

/// Detect anomalies across the full GDP and expense record sets.
///
/// Ratio anomalies only exist where the join in [`expense_to_gdp_ratios`]
/// produced a valid ratio; change anomalies only where the country has a
/// prior year in its sorted sequence. A single `(country, year)` point can
/// emit one anomaly from each family.
pub fn detect_anomalies(gdp: &[IndicatorRecord], expense: &[IndicatorRecord]) -> Vec<Anomaly> {
    let ratios = expense_to_gdp_ratios(gdp, expense);

    let mut by_country: HashMap<&str, Vec<&IndicatorRecord>> = HashMap::new();
    for r in expense {
        by_country.entry(r.country_name.as_str()).or_default().push(r);
    }

    let mut countries: Vec<(&str, Vec<&IndicatorRecord>)> = by_country.into_iter().collect();
    for (_, records) in countries.iter_mut() {
        records.sort_by_key(|r| r.year);
    }

    let mut anomalies: Vec<Anomaly> = countries
        .par_iter()
        .flat_map(|(country, records)| classify_country(country, records, &ratios))
        .collect();

    // Severity descending, then year descending; remaining fields only break
    // ties so repeated runs produce byte-identical output.
    anomalies.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then(b.year.cmp(&a.year))
            .then(a.country.cmp(&b.country))
            .then(a.kind.display_name().cmp(b.kind.display_name()))
    });

    anomalies
}

fn classify_country(
    country: &str,
    records: &[&IndicatorRecord],
    ratios: &HashMap<CountryYear, f64>,
) -> Vec<Anomaly> {
    let mut out = Vec::new();
    let mut prev_value: Option<f64> = None;

    for r in records {
        let ratio = ratios.get(&CountryYear::new(country, r.year)).copied();

        if let Some(ratio) = ratio {
            if let Some((kind, severity)) = classify_high_ratio(ratio) {
                out.push(Anomaly {
                    country: country.to_string(),
                    year: r.year,
                    kind,
                    value: r.value,
                    ratio: Some(ratio),
                    change: None,
                    severity,
                });
            }
            // The low band is an independent rule, not the else-branch of the
            // high bands.
            if ratio < LOW_RATIO_PCT {
                out.push(Anomaly {
                    country: country.to_string(),
                    year: r.year,
                    kind: AnomalyKind::LowSpendingRatio,
                    value: r.value,
                    ratio: Some(ratio),
                    change: None,
                    severity: Severity::Low,
                });
            }
        }

        if let Some(prev) = prev_value {
            if prev > 0.0 {
                let change = (r.value - prev) / prev * 100.0;
                if let Some((kind, severity)) = classify_spike(change) {
                    out.push(Anomaly {
                        country: country.to_string(),
                        year: r.year,
                        kind,
                        value: r.value,
                        ratio: None,
                        change: Some(change),
                        severity,
                    });
                }
                if change < DROP_PCT {
                    out.push(Anomaly {
                        country: country.to_string(),
                        year: r.year,
                        kind: AnomalyKind::SpendingDrop,
                        value: r.value,
                        ratio: None,
                        change: Some(change),
                        severity: Severity::Medium,
                    });
                }
            }
        }
        prev_value = Some(r.value);
    }

    out
}

/// Cascading override: evaluate least to most severe, last match wins.
fn classify_high_ratio(ratio: f64) -> Option<(AnomalyKind, Severity)> {
    let mut hit = None;
    if ratio > HIGH_RATIO_PCT {
        hit = Some((AnomalyKind::HighSpendingRatio, Severity::Low));
    }
    if ratio > HIGHER_RATIO_PCT {
        hit = Some((AnomalyKind::HighSpending, Severity::Medium));
    }
    if ratio > VERY_HIGH_RATIO_PCT {
        hit = Some((AnomalyKind::VeryHighSpending, Severity::High));
    }
    hit
}

/// Same override cascade for upward year-over-year changes.
fn classify_spike(change: f64) -> Option<(AnomalyKind, Severity)> {
    let mut hit = None;
    if change > SPIKE_PCT {
        hit = Some((AnomalyKind::SpendingSpike, Severity::Medium));
    }
    if change > MAJOR_SPIKE_PCT {
        hit = Some((AnomalyKind::MajorSpendingSpike, Severity::High));
    }
    hit
}
