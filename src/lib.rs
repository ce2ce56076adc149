//! `econ-insights` library crate.
//!
//! An in-memory analytics engine for multi-country, multi-year economic
//! indicator tables (GDP growth/value, government expense). View layers call
//! into this crate and render its outputs; there is no persistence, no CLI,
//! and no network protocol here.
//!
//! Core flow: `io::normalize` produces the canonical `IndicatorRecord` set,
//! everything in `analysis`, `stats`, and `math` is a pure function over it.

pub mod analysis;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod report;
pub mod stats;
