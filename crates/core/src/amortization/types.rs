//! Amortization data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payoff projection for a single debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoffSummary {
    /// Debt name.
    pub name: String,
    /// Outstanding balance.
    pub balance: Decimal,
    /// Monthly payment.
    pub payment: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Months until the balance reaches zero (partial months round up).
    pub payoff_months: u32,
    /// Total interest paid over the payoff period.
    pub total_interest: Decimal,
}

/// A payoff path across all debts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffStrategy {
    /// Months until debt freedom under the blended-rate approximation.
    pub months: u32,
    /// Total monthly payment across all debts.
    pub monthly_payment: Decimal,
    /// Total interest paid across all debts.
    pub total_interest: Decimal,
}

/// Comparison of the current payoff path against an accelerated path with an
/// extra monthly payment split evenly across debts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Current path (minimum payments only).
    pub current: PayoffStrategy,
    /// Accelerated path with the extra payment applied.
    pub accelerated: PayoffStrategy,
    /// Interest saved by accelerating, floored at zero.
    pub interest_saved: Decimal,
}
