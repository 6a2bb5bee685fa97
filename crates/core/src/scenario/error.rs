//! Scenario error types.

use thiserror::Error;

/// Errors raised when validating a decision scenario.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// Start month must be 1-based.
    #[error("Scenario start month must be at least 1")]
    InvalidStartMonth,
}
