//! Exchange-agnostic value types and pure transformations.
//!
//! Everything in this module is free of I/O. Records arrive from a provider
//! port, get reshaped here, and are handed to a renderer.

pub mod candle;
pub mod deal;
pub mod news;
pub mod position;
pub mod tick;
pub mod window;

pub use deal::{Deal, DealEntry, DealType};
pub use position::{aggregate, ClosedPosition, Side};
pub use window::TimeWindow;
