//! Ingestion boundary for linked bank accounts.
//!
//! The aggregation relay reports balances and transactions in its own wire
//! shapes; this module converts them into record types. Fetching itself
//! lives outside the core.

pub mod ingest;
pub mod types;

pub use ingest::AggregationIngest;
pub use types::{RemoteAccountBalance, RemoteTransaction};
