//! Formatted text summaries for the view layer.
//!
//! We keep formatting code in one place so:
//! - the analysis code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! Every numeric formatter guards against non-finite values; a dashboard
//! label must never read "NaN%".

use crate::data::regions;
use crate::domain::{Anomaly, CountryTotal, StatSummary, TrendResult};

/// Format the anomaly table (already ordered by the detector).
pub fn format_anomalies(anomalies: &[Anomaly]) -> String {
    let mut out = String::new();

    out.push_str("Anomalies (severity desc, most recent first):\n");
    if anomalies.is_empty() {
        out.push_str("  none detected\n");
        return out;
    }

    out.push_str(&format!(
        "{:<24} {:<14} {:>6} {:<22} {:<8} {:>12} {:>8} {:>8}\n",
        "country", "region", "year", "type", "sev", "value", "ratio%", "chg%"
    ));
    out.push_str(&format!(
        "{:-<24} {:-<14} {:-<6} {:-<22} {:-<8} {:-<12} {:-<8} {:-<8}\n",
        "", "", "", "", "", "", "", ""
    ));

    for a in anomalies {
        let region = regions::region_of(&a.country).unwrap_or("");
        out.push_str(&format!(
            "{:<24} {:<14} {:>6} {:<22} {:<8} {:>12} {:>8} {:>8}\n",
            truncate(&a.country, 24),
            region,
            a.year,
            a.kind.display_name(),
            a.severity.display_name(),
            fmt_num(a.value),
            fmt_opt(a.ratio),
            fmt_opt(a.change),
        ));
    }

    out
}

/// Format the top-spender table.
pub fn format_top_spenders(totals: &[CountryTotal]) -> String {
    let mut out = String::new();

    out.push_str("Top spenders (total expense desc):\n");
    out.push_str(&format!(
        "{:<4} {:<24} {:<14} {:>14} {:>10} {:>12}\n",
        "#", "country", "region", "total", "avg ratio", "years"
    ));

    for (i, t) in totals.iter().enumerate() {
        let span = match (t.years.first(), t.years.last()) {
            (Some(first), Some(last)) if first != last => format!("{first}-{last}"),
            (Some(first), _) => first.to_string(),
            _ => String::new(),
        };
        out.push_str(&format!(
            "{:<4} {:<24} {:<14} {:>14} {:>9}% {:>12}\n",
            i + 1,
            truncate(&t.country, 24),
            t.region.as_deref().unwrap_or(""),
            fmt_num(t.total_value),
            fmt_num(t.avg_ratio),
            span,
        ));
    }

    out
}

/// One-line statistics summary for a labeled series.
pub fn format_statistics(label: &str, stats: &StatSummary) -> String {
    format!(
        "{label}: mean={} median={} stddev={} min={} max={}\n",
        fmt_num(stats.mean),
        fmt_num(stats.median),
        fmt_num(stats.std_dev),
        fmt_num(stats.min),
        fmt_num(stats.max),
    )
}

/// One-line trend summary.
pub fn format_trend(trend: &TrendResult) -> String {
    format!("Global trend: {}\n", trend.label())
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        "0.00".to_string()
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => fmt_num(v),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnomalyKind, Severity, TrendDirection};

    #[test]
    fn empty_anomaly_list_has_explicit_placeholder() {
        let out = format_anomalies(&[]);
        assert!(out.contains("none detected"));
    }

    #[test]
    fn anomaly_rows_carry_region_and_severity() {
        let anomalies = vec![Anomaly {
            country: "Sweden".to_string(),
            year: 2020,
            kind: AnomalyKind::VeryHighSpending,
            value: 123.456,
            ratio: Some(52.1),
            change: None,
            severity: Severity::High,
        }];

        let out = format_anomalies(&anomalies);
        assert!(out.contains("Sweden"));
        assert!(out.contains("Europe"));
        assert!(out.contains("very high spending"));
        assert!(out.contains("high"));
        assert!(out.contains("52.10"));
    }

    #[test]
    fn labels_never_contain_nan() {
        let stats = StatSummary {
            mean: f64::NAN,
            median: 1.0,
            std_dev: f64::INFINITY,
            min: 0.0,
            max: 2.0,
        };
        let out = format_statistics("expense", &stats);
        assert!(!out.contains("NaN"));
        assert!(!out.contains("inf"));
    }

    #[test]
    fn top_spender_table_shows_year_span() {
        let totals = vec![CountryTotal {
            country: "Japan".to_string(),
            region: Some("Asia".to_string()),
            total_value: 900.0,
            avg_ratio: 38.5,
            years: vec![2018, 2019, 2020],
        }];

        let out = format_top_spenders(&totals);
        assert!(out.contains("2018-2020"));
        assert!(out.contains("38.50"));
    }

    #[test]
    fn top_spender_header_and_rows_share_column_edges() {
        let totals = vec![CountryTotal {
            country: "Japan".to_string(),
            region: Some("Asia".to_string()),
            total_value: 900.0,
            avg_ratio: 38.5,
            years: vec![2018, 2019, 2020],
        }];

        let out = format_top_spenders(&totals);
        let lines: Vec<&str> = out.lines().collect();
        let header = lines[1];
        let row = lines[2];

        // Right-aligned columns end at the same offsets: the row's `38.50%`
        // (9 wide + percent sign) fills the same 10 columns as the
        // `avg ratio` header, and both lines end flush on the last column.
        assert_eq!(header.len(), row.len());
        let header_ratio_end = header.find("avg ratio").unwrap() + "avg ratio".len();
        let row_ratio_end = row.find("38.50%").unwrap() + "38.50%".len();
        assert_eq!(header_ratio_end, row_ratio_end);
        assert!(header.ends_with("years"));
        assert!(row.ends_with("2018-2020"));
    }

    #[test]
    fn trend_line_uses_classification_label() {
        let out = format_trend(&TrendResult {
            direction: TrendDirection::ModerateUp,
            avg_change_pct: 3.2,
        });
        assert!(out.contains("moderate upward trend"));
    }
}
