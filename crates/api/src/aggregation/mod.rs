//! Account aggregation relay client.

pub mod client;
pub mod error;

pub use client::{AccountAggregator, HttpAggregator, NullAggregator};
pub use error::AggregationError;
