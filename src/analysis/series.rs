//! Per-country and world-average series extraction.

use crate::domain::{IndicatorRecord, YearValue};

/// Reserved selector meaning "per-year arithmetic mean across all countries"
/// instead of a single-country filter.
pub const WORLD: &str = "WORLD";

/// Extract a `{year, value}` series for a country, or the world average when
/// `selector` is [`WORLD`].
///
/// Results follow the order of `years`; years with no data are omitted, never
/// zero-filled.
pub fn get_country_data(records: &[IndicatorRecord], selector: &str, years: &[i32]) -> Vec<YearValue> {
    let mut out = Vec::with_capacity(years.len());

    for &year in years {
        let value = if selector == WORLD {
            world_average(records, year)
        } else {
            records
                .iter()
                .find(|r| r.year == year && r.country_name == selector)
                .map(|r| r.value)
        };
        if let Some(value) = value {
            out.push(YearValue { year, value });
        }
    }

    out
}

/// Arithmetic mean of an indicator across all countries with data for `year`.
fn world_average(records: &[IndicatorRecord], year: i32) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for r in records.iter().filter(|r| r.year == year) {
        sum += r.value;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Bounded backward scan for the nearest available value at or before `year`.
///
/// Searches `year`, `year - 1`, ... down to `floor_year` (inclusive) and
/// returns the first hit. Deliberately never scans forward: a chart asking
/// for 2020 must not borrow a 2021 value.
pub fn value_at_or_before(
    records: &[IndicatorRecord],
    country: &str,
    year: i32,
    floor_year: i32,
) -> Option<f64> {
    let mut y = year;
    while y >= floor_year {
        if let Some(r) = records.iter().find(|r| r.year == y && r.country_name == country) {
            return Some(r.value);
        }
        y -= 1;
    }
    None
}
