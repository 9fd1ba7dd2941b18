//! Outbound ports for external providers.

pub mod news;
pub mod terminal;

pub use news::{NewsFeed, NewsQuery, SortOrder};
pub use terminal::{DealHistory, OrderGateway, OrderReceipt, RateHistory, TickSource};
