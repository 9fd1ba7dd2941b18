//! Outbound adapters: provider implementations.

pub mod dryrun;
pub mod file;
