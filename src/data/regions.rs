//! Country/region reference tables.
//!
//! Source tables (World Bank / IMF exports) mix real countries with regional
//! and income-group aggregates under the same columns. The aggregate codes
//! here are excluded unconditionally during normalization so per-country
//! outputs never contain "World" or "High income" rows.
//!
//! The country-to-region map is the single shared copy used by ranking and
//! reporting; it must not be re-declared per consumer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Pseudo-country codes for regional blocs, income groups, and other
/// aggregates that must never appear in per-country outputs.
const AGGREGATE_CODES: &[&str] = &[
    "WLD", "EUU", "EMU", "OED", "ARB", "CEB", "CSS", "EAP", "EAR", "EAS", "ECA", "ECS", "FCS",
    "HIC", "HPC", "IBD", "IBT", "IDA", "IDB", "IDX", "INX", "LAC", "LCN", "LDC", "LIC", "LMC",
    "LMY", "LTE", "MEA", "MIC", "MNA", "NAC", "OSS", "PRE", "PSS", "PST", "SAS", "SSA", "SSF",
    "SST", "TEA", "TEC", "TLA", "TMN", "TSA", "TSS", "UMC", "AFE", "AFW",
];

/// Aggregate row labels that sometimes appear with an empty or non-standard
/// code column.
const AGGREGATE_NAMES: &[&str] = &[
    "World",
    "European Union",
    "Euro area",
    "High income",
    "Low income",
    "Middle income",
    "Low & middle income",
    "OECD members",
    "Advanced Economies",
    "Emerging and Developing Economies",
];

static AGGREGATE_CODE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| AGGREGATE_CODES.iter().copied().collect());

static AGGREGATE_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| AGGREGATE_NAMES.iter().copied().collect());

/// Country name to region, extracted from the IMF expense-table country list.
const COUNTRY_REGIONS: &[(&str, &str)] = &[
    ("Australia", "Oceania"),
    ("Austria", "Europe"),
    ("Bangladesh", "Asia"),
    ("Belgium", "Europe"),
    ("Brazil", "South America"),
    ("Bulgaria", "Europe"),
    ("Canada", "North America"),
    ("Chile", "South America"),
    ("China", "Asia"),
    ("Colombia", "South America"),
    ("Croatia", "Europe"),
    ("Czechia", "Europe"),
    ("Denmark", "Europe"),
    ("Egypt", "Africa"),
    ("Estonia", "Europe"),
    ("Ethiopia", "Africa"),
    ("Finland", "Europe"),
    ("France", "Europe"),
    ("Germany", "Europe"),
    ("Ghana", "Africa"),
    ("Greece", "Europe"),
    ("Hungary", "Europe"),
    ("Iceland", "Europe"),
    ("India", "Asia"),
    ("Indonesia", "Asia"),
    ("Ireland", "Europe"),
    ("Israel", "Asia"),
    ("Italy", "Europe"),
    ("Japan", "Asia"),
    ("Kazakhstan", "Asia"),
    ("Kenya", "Africa"),
    ("Latvia", "Europe"),
    ("Lithuania", "Europe"),
    ("Luxembourg", "Europe"),
    ("Malaysia", "Asia"),
    ("Mexico", "North America"),
    ("Morocco", "Africa"),
    ("Netherlands", "Europe"),
    ("New Zealand", "Oceania"),
    ("Nigeria", "Africa"),
    ("Norway", "Europe"),
    ("Pakistan", "Asia"),
    ("Peru", "South America"),
    ("Philippines", "Asia"),
    ("Poland", "Europe"),
    ("Portugal", "Europe"),
    ("Romania", "Europe"),
    ("Russian Federation", "Europe"),
    ("Saudi Arabia", "Asia"),
    ("Singapore", "Asia"),
    ("Slovak Republic", "Europe"),
    ("Slovenia", "Europe"),
    ("South Africa", "Africa"),
    ("Spain", "Europe"),
    ("Sweden", "Europe"),
    ("Switzerland", "Europe"),
    ("Thailand", "Asia"),
    ("Turkiye", "Asia"),
    ("Ukraine", "Europe"),
    ("United Arab Emirates", "Asia"),
    ("United Kingdom", "Europe"),
    ("United States", "North America"),
    ("Uruguay", "South America"),
    ("Vietnam", "Asia"),
];

static REGION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_REGIONS.iter().copied().collect());

/// Whether a country code (or, as a fallback, a row label) denotes an
/// aggregate rather than an individual country.
pub fn is_aggregate(country_code: &str, country_name: &str) -> bool {
    AGGREGATE_CODE_SET.contains(country_code.trim())
        || AGGREGATE_NAME_SET.contains(country_name.trim())
}

/// Region for a country name, if it is in the shared table.
pub fn region_of(country_name: &str) -> Option<&'static str> {
    REGION_MAP.get(country_name.trim()).copied()
}

/// Country names known to the region table, in table order.
///
/// Used by the synthetic sample generator so generated datasets carry
/// realistic names that resolve to regions.
pub fn known_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_REGIONS.iter().map(|(name, _)| *name)
}
