//! Input boundary.
//!
//! - raw string-keyed rows + CSV reading helper (`rows`)
//! - normalization of raw rows into `IndicatorRecord`s (`normalize`)
//!
//! The engine's contract begins once rows are in memory; `rows::read_raw_table`
//! is a convenience adapter for callers whose source happens to be a CSV file.

pub mod normalize;
pub mod rows;

pub use normalize::*;
pub use rows::*;
