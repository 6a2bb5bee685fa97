//! Record validation error types.

use thiserror::Error;

/// Errors raised when validating records at the store boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A debt balance was negative.
    #[error("Debt '{name}' has a negative balance")]
    NegativeBalance {
        /// Debt name.
        name: String,
    },

    /// A debt payment was negative.
    #[error("Debt '{name}' has a negative payment")]
    NegativePayment {
        /// Debt name.
        name: String,
    },

    /// A debt interest rate was negative.
    #[error("Debt '{name}' has a negative interest rate")]
    NegativeInterestRate {
        /// Debt name.
        name: String,
    },

    /// An index-addressed operation pointed past the end of a collection.
    #[error("Index {index} is out of bounds for {collection}")]
    IndexOutOfBounds {
        /// Collection name.
        collection: &'static str,
        /// Offending index.
        index: usize,
    },

    /// A connected account id was not found.
    #[error("No connected account with id {0}")]
    UnknownAccount(String),
}
