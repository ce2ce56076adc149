//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during an analysis session
//! - exported to JSON for dashboard consumers
//! - compared directly in tests

use serde::{Deserialize, Serialize};

/// One observation of one indicator (GDP or government expense) for one
/// country-year.
///
/// Immutable once created by the normalizer; every downstream component
/// consumes slices of these and returns fresh collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country_name: String,
    pub country_code: String,
    pub year: i32,
    pub value: f64,
}

impl IndicatorRecord {
    pub fn new(country_name: impl Into<String>, country_code: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            country_name: country_name.into(),
            country_code: country_code.into(),
            year,
            value,
        }
    }
}

/// Composite join key for per-country-year lookups.
///
/// The original dashboard concatenated `"{country}-{year}"` strings for map
/// keys; a typed key avoids the parsing/collision bugs that come with that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryYear {
    pub country: String,
    pub year: i32,
}

impl CountryYear {
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
        }
    }
}

/// Which parsing policy applies to an indicator's values.
///
/// Absolute series (expense levels, GDP levels) must be non-negative; a
/// negative level is a data error and the row is dropped. Growth-rate series
/// are legitimately negative in recession years, so they only require a
/// finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Absolute,
    GrowthRate,
}

/// Anomaly category for a flagged country-year point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    HighSpendingRatio,
    HighSpending,
    VeryHighSpending,
    LowSpendingRatio,
    SpendingSpike,
    MajorSpendingSpike,
    SpendingDrop,
}

impl AnomalyKind {
    /// Human-readable label for terminal/dashboard output.
    pub fn display_name(self) -> &'static str {
        match self {
            AnomalyKind::HighSpendingRatio => "high spending ratio",
            AnomalyKind::HighSpending => "high spending",
            AnomalyKind::VeryHighSpending => "very high spending",
            AnomalyKind::LowSpendingRatio => "low spending ratio",
            AnomalyKind::SpendingSpike => "spending spike",
            AnomalyKind::MajorSpendingSpike => "major spending spike",
            AnomalyKind::SpendingDrop => "spending drop",
        }
    }
}

/// Ordinal anomaly severity. Derived `Ord` gives `Low < Medium < High`,
/// which the detector relies on when sorting severity-descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn display_name(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A flagged country-year point.
///
/// `ratio` is set for ratio-band anomalies, `change` for year-over-year
/// anomalies; a single point can emit one of each (they are never merged).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub country: String,
    pub year: i32,
    pub kind: AnomalyKind,
    /// Expense value at this point (same units as the input records).
    pub value: f64,
    pub ratio: Option<f64>,
    pub change: Option<f64>,
    pub severity: Severity,
}

/// Descriptive statistics over a filtered numeric series.
///
/// Every field is `0.0` when the filtered input is empty; absence of data for
/// a filter combination is an expected case and must not error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl StatSummary {
    pub fn zero() -> Self {
        Self {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }
}

/// Aggregated per-country spending used for rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    /// Region from the shared lookup table, when the country is known to it.
    pub region: Option<String>,
    pub total_value: f64,
    /// Mean of valid per-year expense/GDP ratios; `0.0` when no GDP data was
    /// supplied or no pair joined.
    pub avg_ratio: f64,
    /// Distinct years contributing to the total, ascending.
    pub years: Vec<i32>,
}

/// Overall direction of the global year-over-year trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongUp,
    ModerateUp,
    Stable,
    ModerateDown,
    StrongDown,
    /// Fewer than two distinct years of data.
    InsufficientData,
}

/// Trend classification plus the underlying average year-over-year change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Average of consecutive year-over-year percentage changes. `0.0` when
    /// the direction is `InsufficientData`.
    pub avg_change_pct: f64,
}

impl TrendResult {
    /// Classification label shown to users.
    pub fn label(&self) -> String {
        match self.direction {
            TrendDirection::StrongUp => {
                format!("strong upward trend (+{:.1}% avg yearly change)", self.avg_change_pct)
            }
            TrendDirection::ModerateUp => {
                format!("moderate upward trend (+{:.1}% avg yearly change)", self.avg_change_pct)
            }
            TrendDirection::Stable => {
                format!("stable ({:+.1}% avg yearly change)", self.avg_change_pct)
            }
            TrendDirection::ModerateDown => {
                format!("moderate downward trend ({:.1}% avg yearly change)", self.avg_change_pct)
            }
            TrendDirection::StrongDown => {
                format!("strong downward trend ({:.1}% avg yearly change)", self.avg_change_pct)
            }
            TrendDirection::InsufficientData => "insufficient data for trend analysis".to_string(),
        }
    }
}

/// Pearson correlation plus the ordinary-least-squares line through the same
/// filtered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// In `[-1, 1]`; defined as `0.0` for degenerate inputs (constant series,
    /// fewer than two valid pairs).
    pub coefficient: f64,
    pub slope: f64,
    pub intercept: f64,
}

/// One point of a per-year series (single country or world average).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}
