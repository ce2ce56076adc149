//! Row normalization.
//!
//! Turns heterogeneous source rows into clean `IndicatorRecord`s that are safe
//! to analyze.
//!
//! Design goals:
//! - **Skip, never fail**: source tables routinely contain footer rows,
//!   aggregate rows, and sparse columns. A malformed row is dropped.
//! - **No imputation**: gaps in a country's year sequence stay absent;
//!   consumers that need "the value around year Y" use the backward scan in
//!   `analysis::series`.
//! - **Aggregates out**: regional blocs, income groups, and "World" rows are
//!   excluded unconditionally (see `data::regions`).

use crate::data::regions;
use crate::domain::{IndicatorRecord, ValueKind};
use crate::io::rows::RawRow;

/// Normalize long-form rows: one row per `(country, year)` observation, with
/// the indicator value in a named column (e.g. `GDP Growth`).
pub fn normalize_long_form(rows: &[RawRow], value_field: &str, kind: ValueKind) -> Vec<IndicatorRecord> {
    let mut out = Vec::new();

    for row in rows {
        let Some(name) = row.get("Country Name").or_else(|| row.get("Country")) else {
            continue;
        };
        let code = row.get("Country Code").unwrap_or("");
        if regions::is_aggregate(code, name) {
            continue;
        }

        let Some(year) = row.get("Year").and_then(parse_year) else {
            continue;
        };
        let Some(value) = row.get(value_field).and_then(|s| parse_value(s, kind)) else {
            continue;
        };

        out.push(IndicatorRecord::new(name, code, year, value));
    }

    out
}

/// Normalize wide-form rows: one row per country, one column per year.
///
/// Header columns that parse as 4-digit integers are year columns; every
/// other column is metadata. Each parseable cell becomes one record.
pub fn normalize_wide_form(rows: &[RawRow], kind: ValueKind) -> Vec<IndicatorRecord> {
    let mut out = Vec::new();

    for row in rows {
        let Some(name) = row.get("Country Name").or_else(|| row.get("Country")) else {
            continue;
        };
        let code = row.get("Country Code").unwrap_or("").to_string();
        if regions::is_aggregate(&code, name) {
            continue;
        }

        for (field, cell) in row.fields() {
            let Some(year) = parse_year_header(field) else {
                continue;
            };
            let Some(value) = parse_value(cell, kind) else {
                continue;
            };
            out.push(IndicatorRecord::new(name, code.clone(), year, value));
        }
    }

    out
}

fn parse_year(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}

/// A wide-form column is a year column iff its header is a 4-digit integer.
fn parse_year_header(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<i32>().ok()
}

fn parse_value(s: &str, kind: ValueKind) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if !v.is_finite() {
        return None;
    }
    match kind {
        // Negative levels (expense, GDP value) are data errors.
        ValueKind::Absolute if v < 0.0 => None,
        _ => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_row(name: &str, code: &str, year: &str, growth: &str) -> RawRow {
        let mut row = RawRow::new();
        row.push("Country Name", name);
        row.push("Country Code", code);
        row.push("Year", year);
        row.push("GDP Growth", growth);
        row
    }

    #[test]
    fn long_form_accepts_negative_growth() {
        let rows = vec![long_row("Greece", "GRC", "2011", "-9.1")];
        let recs = normalize_long_form(&rows, "GDP Growth", ValueKind::GrowthRate);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].year, 2011);
        assert!((recs[0].value - (-9.1)).abs() < 1e-12);
    }

    #[test]
    fn long_form_skips_malformed_rows() {
        let rows = vec![
            long_row("", "DEU", "2020", "1.0"),       // empty country
            long_row("Germany", "DEU", "20xx", "1.0"), // bad year
            long_row("Germany", "DEU", "2020", "n/a"), // bad value
            long_row("Germany", "DEU", "2020", "1.1"),
        ];
        let recs = normalize_long_form(&rows, "GDP Growth", ValueKind::GrowthRate);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].country_name, "Germany");
    }

    #[test]
    fn long_form_excludes_aggregates() {
        let rows = vec![
            long_row("World", "WLD", "2020", "3.0"),
            long_row("High income", "HIC", "2020", "2.0"),
            long_row("France", "FRA", "2020", "1.5"),
        ];
        let recs = normalize_long_form(&rows, "GDP Growth", ValueKind::GrowthRate);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].country_name, "France");
    }

    #[test]
    fn wide_form_emits_one_record_per_year_cell() {
        let mut row = RawRow::new();
        row.push("Country", "Japan");
        row.push("Country Code", "JPN");
        row.push("Notes", "metadata, not a year");
        row.push("2019", "100.5");
        row.push("2020", "");
        row.push("2021", "110.25");

        let recs = normalize_wide_form(&[row], ValueKind::Absolute);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].year, 2019);
        assert_eq!(recs[1].year, 2021);
        assert!((recs[1].value - 110.25).abs() < 1e-12);
    }

    #[test]
    fn wide_form_rejects_negative_absolute_values() {
        let mut row = RawRow::new();
        row.push("Country", "Japan");
        row.push("2019", "-5.0");
        row.push("2020", "7.0");

        let recs = normalize_wide_form(&[row], ValueKind::Absolute);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].year, 2020);
    }

    #[test]
    fn non_year_headers_are_metadata() {
        assert_eq!(parse_year_header("2020"), Some(2020));
        assert_eq!(parse_year_header(" 1995 "), Some(1995));
        assert_eq!(parse_year_header("202"), None);
        assert_eq!(parse_year_header("20201"), None);
        assert_eq!(parse_year_header("country code"), None);
    }
}
