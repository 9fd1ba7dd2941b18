//! Ports: trait boundaries between the application and external services.

pub mod outbound;
