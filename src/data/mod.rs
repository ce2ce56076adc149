//! Static reference data and synthetic datasets.
//!
//! - country/region lookup + aggregate-code exclusion (`regions`)
//! - seeded synthetic GDP/expense generation for demos and tests (`sample`)

pub mod regions;
pub mod sample;

pub use regions::*;
pub use sample::*;
