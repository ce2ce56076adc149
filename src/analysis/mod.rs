//! Analysis components.
//!
//! Each submodule is a pure function layer over `IndicatorRecord` slices:
//!
//! - per-country / world-average series extraction (`series`)
//! - expense-to-GDP ratios (`ratio`)
//! - anomaly detection (`anomaly`)
//! - top-spender rankings (`ranking`)
//! - global trend classification (`trend`)

pub mod anomaly;
pub mod ranking;
pub mod ratio;
pub mod series;
pub mod trend;

pub use anomaly::*;
pub use ranking::*;
pub use ratio::*;
pub use series::*;
pub use trend::*;
