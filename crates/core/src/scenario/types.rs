//! Scenario data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A hypothetical financial decision to simulate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionScenario {
    /// Scenario name.
    pub name: String,
    /// Free-form scenario tag (e.g., "business_investment", "job_exit").
    pub kind: String,
    /// One-time cost paid at simulation start. A negative value is a
    /// one-time inflow.
    pub upfront_cost: Decimal,
    /// Monthly income delta while the scenario window is active.
    pub monthly_income: Decimal,
    /// Monthly expense delta while the scenario window is active.
    pub monthly_expense: Decimal,
    /// Number of months the deltas apply.
    pub duration: u32,
    /// 1-based month the deltas begin applying, inclusive. Deltas stop at
    /// `start_month + duration`, exclusive.
    pub start_month: u32,
}

/// Baseline cash-flow position the scenario is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationBaseline {
    /// Baseline monthly income.
    pub base_income: Decimal,
    /// Baseline monthly outflow (expenses plus investment contributions).
    pub base_expenses: Decimal,
    /// Estimated emergency fund at simulation start.
    pub emergency_fund: Decimal,
}

/// Projection for a single simulated month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthProjection {
    /// 1-based month index.
    pub month: u32,
    /// Effective income for the month.
    pub monthly_income: Decimal,
    /// Effective expenses for the month.
    pub monthly_expenses: Decimal,
    /// Income minus expenses.
    pub net_cash_flow: Decimal,
    /// Running cash-flow total including the upfront cost.
    pub cumulative_cash_flow: Decimal,
    /// Projected emergency fund level, floored at zero.
    pub emergency_fund_level: Decimal,
}
