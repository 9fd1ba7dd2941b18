//! Adapters: concrete implementations on both sides of the ports.

pub mod inbound;
pub mod outbound;
