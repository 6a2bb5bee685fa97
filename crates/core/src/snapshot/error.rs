//! Snapshot error types.

use thiserror::Error;

/// Errors raised by the snapshot store.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage failure.
    #[error("Snapshot storage error: {0}")]
    Storage(#[from] opendal::Error),

    /// The document could not be parsed.
    #[error("Malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document carries a version this build does not understand.
    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u64),

    /// The store could not be configured.
    #[error("Snapshot store configuration error: {0}")]
    Configuration(String),
}
