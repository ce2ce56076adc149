//! Global trend classification.

use std::collections::BTreeMap;

use crate::domain::{TrendDirection, TrendResult, YearValue};

/// Trend bands on the average year-over-year change (percent).
const STRONG_UP_PCT: f64 = 5.0;
const MODERATE_UP_PCT: f64 = 2.0;
const STABLE_FLOOR_PCT: f64 = -2.0;
const MODERATE_DOWN_FLOOR_PCT: f64 = -5.0;

/// Classify the overall direction of a global series.
///
/// Values are grouped by year (arithmetic mean per year, ascending), then the
/// consecutive year-over-year percentage changes are averaged and mapped to a
/// direction band. Fewer than two distinct years yields
/// `InsufficientData` rather than a numeric trend.
pub fn analyze_global_trends(series: &[YearValue]) -> TrendResult {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for p in series.iter().filter(|p| p.value.is_finite()) {
        let (sum, n) = by_year.entry(p.year).or_insert((0.0, 0));
        *sum += p.value;
        *n += 1;
    }

    if by_year.len() < 2 {
        return TrendResult {
            direction: TrendDirection::InsufficientData,
            avg_change_pct: 0.0,
        };
    }

    let yearly_means: Vec<f64> = by_year.values().map(|(sum, n)| sum / *n as f64).collect();

    let mut changes = Vec::with_capacity(yearly_means.len() - 1);
    for pair in yearly_means.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        // A zero base year cannot produce a finite percentage change.
        if prev != 0.0 {
            let change = (curr - prev) / prev * 100.0;
            if change.is_finite() {
                changes.push(change);
            }
        }
    }

    let avg_change_pct = if changes.is_empty() {
        0.0
    } else {
        changes.iter().sum::<f64>() / changes.len() as f64
    };

    TrendResult {
        direction: classify(avg_change_pct),
        avg_change_pct,
    }
}

fn classify(avg_change_pct: f64) -> TrendDirection {
    if avg_change_pct > STRONG_UP_PCT {
        TrendDirection::StrongUp
    } else if avg_change_pct > MODERATE_UP_PCT {
        TrendDirection::ModerateUp
    } else if avg_change_pct > STABLE_FLOOR_PCT {
        TrendDirection::Stable
    } else if avg_change_pct > MODERATE_DOWN_FLOOR_PCT {
        TrendDirection::ModerateDown
    } else {
        TrendDirection::StrongDown
    }
}
