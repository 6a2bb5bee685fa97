//! Debt payoff and interest calculations.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AmortizationEngine;
pub use error::AmortizationError;
pub use types::{DebtPayoffSummary, PayoffStrategy, StrategyComparison};
