//! Shared analysis pipeline used by dashboard front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> ratios -> anomalies -> rankings -> stats -> trend
//!
//! Callers that only need one artifact use the component functions directly;
//! a dashboard refresh typically wants all of them at once.

use std::collections::HashMap;

use crate::analysis::{analyze_global_trends, detect_anomalies, expense_to_gdp_ratios, top_spenders};
use crate::domain::{
    Anomaly, CountryTotal, CountryYear, IndicatorRecord, StatSummary, TrendResult, YearValue,
};
use crate::stats::summarize_records;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// How many countries the ranking keeps.
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// All computed artifacts of one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub ratios: HashMap<CountryYear, f64>,
    pub anomalies: Vec<Anomaly>,
    pub top_spenders: Vec<CountryTotal>,
    pub gdp_stats: StatSummary,
    pub expense_stats: StatSummary,
    /// Trend of global (all-country) expense, averaged per year.
    pub expense_trend: TrendResult,
}

/// Run every analysis component over normalized record sets.
///
/// Pure and infallible: sparse or empty inputs yield empty/zero artifacts
/// rather than errors, so a dashboard can always render something.
pub fn run_analysis(
    gdp: &[IndicatorRecord],
    expense: &[IndicatorRecord],
    options: &AnalysisOptions,
) -> AnalysisOutput {
    let ratios = expense_to_gdp_ratios(gdp, expense);
    let anomalies = detect_anomalies(gdp, expense);
    let top = top_spenders(expense, Some(gdp), options.top_n);

    let expense_series: Vec<YearValue> = expense
        .iter()
        .map(|r| YearValue {
            year: r.year,
            value: r.value,
        })
        .collect();

    AnalysisOutput {
        ratios,
        anomalies,
        top_spenders: top,
        gdp_stats: summarize_records(gdp),
        expense_stats: summarize_records(expense),
        expense_trend: analyze_global_trends(&expense_series),
    }
}
