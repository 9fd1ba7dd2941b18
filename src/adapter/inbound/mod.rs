//! Inbound adapters: ways to drive the application.

pub mod cli;
