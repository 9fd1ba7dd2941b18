//! Application services built on the ports.

pub mod monitor;

pub use monitor::{MonitorOutcome, MonitorSettings, PriceMonitor};
