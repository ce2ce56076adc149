//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - the canonical indicator observation (`IndicatorRecord`)
//! - the composite join key (`CountryYear`)
//! - analysis outputs (`Anomaly`, `StatSummary`, `CountryTotal`, `TrendResult`,
//!   `CorrelationResult`)

pub mod types;

pub use types::*;
