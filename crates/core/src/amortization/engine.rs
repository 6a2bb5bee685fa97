//! Closed-form amortization calculations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::records::Debt;

use super::error::AmortizationError;
use super::types::{DebtPayoffSummary, PayoffStrategy, StrategyComparison};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Amortization engine. All functions are pure functions of
/// (balance, payment, annual rate in percent).
pub struct AmortizationEngine;

impl AmortizationEngine {
    /// Months until a balance reaches zero under a fixed monthly payment.
    ///
    /// Uses the standard amortization-period formula
    /// `ceil(-ln(1 - balance*r/payment) / ln(1 + r))` with the monthly rate
    /// `r = rate / 100 / 12`; a partial final month counts as a full month.
    ///
    /// # Errors
    ///
    /// - `IndeterminatePayoff` when the payment (or rate) makes the payoff
    ///   time undefined.
    /// - `PaymentTooLow` when the payment does not cover accruing interest.
    pub fn payoff_months(
        balance: Decimal,
        payment: Decimal,
        annual_rate_percent: Decimal,
    ) -> Result<u32, AmortizationError> {
        if payment <= Decimal::ZERO || annual_rate_percent < Decimal::ZERO {
            return Err(AmortizationError::IndeterminatePayoff);
        }

        let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
        if monthly_rate.is_zero() {
            let months = (balance / payment).ceil();
            return months
                .to_u32()
                .ok_or(AmortizationError::IndeterminatePayoff);
        }

        let monthly_interest = balance * monthly_rate;
        if monthly_interest >= payment {
            return Err(AmortizationError::PaymentTooLow { balance, payment });
        }

        // ln argument is in (0, 1]; both logs are therefore well defined.
        let ratio = Decimal::ONE - monthly_interest / payment;
        let numerator = ratio
            .checked_ln()
            .ok_or(AmortizationError::IndeterminatePayoff)?;
        let denominator = (Decimal::ONE + monthly_rate)
            .checked_ln()
            .ok_or(AmortizationError::IndeterminatePayoff)?;

        let months = (-numerator / denominator).ceil();
        months.to_u32().ok_or(AmortizationError::IndeterminatePayoff)
    }

    /// Total interest paid over the payoff period:
    /// `payment * payoff_months - balance`.
    ///
    /// # Errors
    ///
    /// Propagates the payoff-time errors.
    pub fn total_interest(
        balance: Decimal,
        payment: Decimal,
        annual_rate_percent: Decimal,
    ) -> Result<Decimal, AmortizationError> {
        let months = Self::payoff_months(balance, payment, annual_rate_percent)?;
        Ok(payment * Decimal::from(months) - balance)
    }

    /// Months until all debts are paid off, pooling balances and payments
    /// under a balance-weighted average annual rate.
    ///
    /// This blends all debts into one synthetic loan; it does not model a
    /// true avalanche schedule where freed-up payments cascade debt by debt.
    /// No debt (zero total balance) means already debt-free: zero months.
    ///
    /// # Errors
    ///
    /// Propagates the payoff-time errors for the pooled loan.
    pub fn pooled_payoff_months(
        debts: &[Debt],
        extra_payment: Decimal,
    ) -> Result<u32, AmortizationError> {
        let total_balance: Decimal = debts.iter().map(|d| d.balance).sum();
        if total_balance.is_zero() {
            return Ok(0);
        }

        let total_payment: Decimal = debts.iter().map(|d| d.payment).sum::<Decimal>() + extra_payment;
        let weighted_rate: Decimal = debts
            .iter()
            .map(|d| d.interest_rate * d.balance)
            .sum::<Decimal>()
            / total_balance;

        Self::payoff_months(total_balance, total_payment, weighted_rate)
    }

    /// Per-debt payoff summaries.
    ///
    /// # Errors
    ///
    /// Propagates the first payoff-time error.
    pub fn debt_summaries(debts: &[Debt]) -> Result<Vec<DebtPayoffSummary>, AmortizationError> {
        debts
            .iter()
            .map(|debt| {
                let payoff_months =
                    Self::payoff_months(debt.balance, debt.payment, debt.interest_rate)?;
                let total_interest =
                    Self::total_interest(debt.balance, debt.payment, debt.interest_rate)?;
                Ok(DebtPayoffSummary {
                    name: debt.name.clone(),
                    balance: debt.balance,
                    payment: debt.payment,
                    interest_rate: debt.interest_rate,
                    payoff_months,
                    total_interest,
                })
            })
            .collect()
    }

    /// Compares the current payoff path against an accelerated one where an
    /// extra monthly payment is split evenly across all debts.
    ///
    /// The interest-saved delta is floored at zero; a rounding-induced
    /// negative saving is reported as no saving.
    ///
    /// # Errors
    ///
    /// Propagates the payoff-time errors from either path.
    pub fn compare_strategies(
        debts: &[Debt],
        extra_payment: Decimal,
    ) -> Result<StrategyComparison, AmortizationError> {
        let total_payment: Decimal = debts.iter().map(|d| d.payment).sum();

        if debts.is_empty() {
            let empty = PayoffStrategy {
                months: 0,
                monthly_payment: Decimal::ZERO,
                total_interest: Decimal::ZERO,
            };
            return Ok(StrategyComparison {
                current: empty.clone(),
                accelerated: empty,
                interest_saved: Decimal::ZERO,
            });
        }

        let current_interest: Decimal = debts
            .iter()
            .map(|d| Self::total_interest(d.balance, d.payment, d.interest_rate))
            .sum::<Result<Decimal, _>>()?;
        let current = PayoffStrategy {
            months: Self::pooled_payoff_months(debts, Decimal::ZERO)?,
            monthly_payment: total_payment,
            total_interest: current_interest,
        };

        let share = extra_payment / Decimal::from(debts.len());
        let accelerated_interest: Decimal = debts
            .iter()
            .map(|d| Self::total_interest(d.balance, d.payment + share, d.interest_rate))
            .sum::<Result<Decimal, _>>()?;
        let accelerated = PayoffStrategy {
            months: Self::pooled_payoff_months(debts, extra_payment)?,
            monthly_payment: total_payment + extra_payment,
            total_interest: accelerated_interest,
        };

        let interest_saved =
            (current.total_interest - accelerated.total_interest).max(Decimal::ZERO);

        Ok(StrategyComparison {
            current,
            accelerated,
            interest_saved,
        })
    }
}
