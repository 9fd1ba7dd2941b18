//! Tradedesk - trading-terminal companion CLI.
//!
//! This crate bundles the small report and monitoring utilities that grew up
//! around a broker terminal: closed-position reports built from deal history,
//! a price-level monitor, market-news sentiment summaries, and rate summaries.
//!
//! # Architecture
//!
//! The crate separates pure transformations from I/O using ports and adapters:
//!
//! - **`domain`** - value types and pure logic: deals, closed positions,
//!   sentiment reports, time windows. The closed-position aggregator
//!   ([`domain::position::aggregate`]) is the core of the crate.
//! - **`port`** - trait definitions for the external collaborators (deal
//!   history, tick stream, rate history, news feed, order gateway).
//! - **`adapter`** - the clap CLI on the inbound side and JSON-export file
//!   readers plus a dry-run order gateway on the outbound side.
//! - **`app`** - the price-monitor engine, the only loop in the system.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Deals, positions, ticks, candles, news articles
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for external providers
//! - [`adapter`] - CLI and file-backed provider implementations
//! - [`app`] - Price-monitor engine

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
