//! Top-spender rankings.

use std::collections::{BTreeSet, HashMap};

use crate::analysis::ratio::expense_to_gdp_ratios;
use crate::data::regions;
use crate::domain::{CountryTotal, CountryYear, IndicatorRecord};

/// Aggregate total expense per country and return the top `limit` spenders,
/// sorted descending by total.
///
/// When GDP records are supplied, `avg_ratio` is the arithmetic mean of the
/// valid per-year expense/GDP ratios (same join policy as the ratio
/// calculator); without GDP data it is `0.0`, not an error.
pub fn top_spenders(
    expense: &[IndicatorRecord],
    gdp: Option<&[IndicatorRecord]>,
    limit: usize,
) -> Vec<CountryTotal> {
    let ratios = gdp
        .map(|g| expense_to_gdp_ratios(g, expense))
        .unwrap_or_default();

    struct Acc {
        total: f64,
        years: BTreeSet<i32>,
    }

    let mut by_country: HashMap<&str, Acc> = HashMap::new();
    for r in expense {
        let acc = by_country.entry(r.country_name.as_str()).or_insert(Acc {
            total: 0.0,
            years: BTreeSet::new(),
        });
        acc.total += r.value;
        acc.years.insert(r.year);
    }

    let mut totals: Vec<CountryTotal> = by_country
        .into_iter()
        .map(|(country, acc)| {
            let country_ratios: Vec<f64> = acc
                .years
                .iter()
                .filter_map(|&year| ratios.get(&CountryYear::new(country, year)).copied())
                .collect();
            let avg_ratio = if country_ratios.is_empty() {
                0.0
            } else {
                country_ratios.iter().sum::<f64>() / country_ratios.len() as f64
            };

            CountryTotal {
                country: country.to_string(),
                region: regions::region_of(country).map(str::to_string),
                total_value: acc.total,
                avg_ratio,
                years: acc.years.into_iter().collect(),
            }
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total_value
            .partial_cmp(&a.total_value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.country.cmp(&b.country))
    });
    totals.truncate(limit);
    totals
}
