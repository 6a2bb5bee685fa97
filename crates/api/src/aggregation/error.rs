//! Aggregation client error types.

use thiserror::Error;

/// Errors raised by the aggregation relay client.
///
/// These never reach the core: callers fall back to last-known balances and
/// an empty transaction list.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// The relay request failed.
    #[error("Aggregation relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("Aggregation relay returned status {0}")]
    Status(u16),
}
