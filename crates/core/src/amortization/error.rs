//! Amortization error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by payoff calculations.
///
/// Both variants replace what would otherwise surface as a non-finite number
/// downstream; callers must treat them as distinct outcomes, not values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmortizationError {
    /// Payment is zero or negative (or the rate is negative), so no payoff
    /// time exists.
    #[error("Payment must be positive to amortize a balance")]
    IndeterminatePayoff,

    /// The payment does not cover the interest accruing each month; the
    /// balance never pays off.
    #[error("Monthly payment {payment} does not cover interest accruing on balance {balance}")]
    PaymentTooLow {
        /// Outstanding balance.
        balance: Decimal,
        /// Monthly payment.
        payment: Decimal,
    },
}
