//! CLI module graph.

pub mod command;
pub mod config;
pub mod monitor;
pub mod news;
pub mod output;
pub mod positions;
pub mod rates;
pub mod table;
