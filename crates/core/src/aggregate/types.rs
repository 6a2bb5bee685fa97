//! Aggregate data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly cash-flow totals derived from the record collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Sum of income stream amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// Sum of investment contributions.
    pub total_investments: Decimal,
    /// Sum of debt payments.
    pub total_debt_payments: Decimal,
    /// Income minus expenses minus investments. May be negative; no floor.
    pub available_for_spending: Decimal,
    /// Sum of current balances across linked accounts (missing counts as 0).
    pub total_account_balance: Decimal,
    /// Linked balances minus outstanding debt balances.
    pub net_worth: Decimal,
}

/// Share of income per spending bucket, as percentages rounded to one
/// decimal place. Zero income yields zero percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Expenses as a share of income.
    pub expenses_percent: Decimal,
    /// Investments as a share of income.
    pub investments_percent: Decimal,
    /// Remaining flexible spending as a share of income.
    pub flexible_percent: Decimal,
}

/// Suggested split of the monthly surplus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurplusSplit {
    /// Suggested emergency-fund contribution (30%).
    pub emergency_fund: Decimal,
    /// Suggested extra debt payment (40%).
    pub extra_debt_payment: Decimal,
    /// Suggested discretionary amount (30%).
    pub flexible: Decimal,
}

/// Budget breakdown by spending bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    /// Expenses excluding debt-payment categories.
    pub essential_expenses: Decimal,
    /// Sum of debt payments.
    pub debt_payments: Decimal,
    /// Sum of investment contributions.
    pub investments: Decimal,
    /// Available flexible spending.
    pub flexible: Decimal,
}
