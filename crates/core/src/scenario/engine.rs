//! Scenario simulation engine.

use rust_decimal::Decimal;

use super::error::ScenarioError;
use super::types::{DecisionScenario, MonthProjection, SimulationBaseline};

/// Fixed simulation horizon in months.
pub const HORIZON_MONTHS: u32 = 24;

/// Engine for running decision simulations.
///
/// A positive upfront cost is debited from the starting cash flow and from
/// the emergency fund. A negative upfront cost (a one-time windfall) is NOT
/// credited to the starting cash flow, though it does raise the projected
/// emergency fund level.
pub struct ScenarioEngine;

impl ScenarioEngine {
    /// Validates a scenario.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::InvalidStartMonth` when the start month is 0.
    pub fn validate(scenario: &DecisionScenario) -> Result<(), ScenarioError> {
        if scenario.start_month == 0 {
            return Err(ScenarioError::InvalidStartMonth);
        }
        Ok(())
    }

    /// Runs a 24-month simulation of the scenario against the baseline.
    ///
    /// Produces exactly [`HORIZON_MONTHS`] freshly allocated per-month
    /// projections; neither input is mutated.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid scenario.
    pub fn simulate(
        baseline: &SimulationBaseline,
        scenario: &DecisionScenario,
    ) -> Result<Vec<MonthProjection>, ScenarioError> {
        Self::validate(scenario)?;

        let mut results = Vec::with_capacity(HORIZON_MONTHS as usize);
        let mut cumulative_cash_flow = Decimal::ZERO;
        let mut emergency_fund_impact = Decimal::ZERO;

        if scenario.upfront_cost > Decimal::ZERO {
            cumulative_cash_flow -= scenario.upfront_cost;
            emergency_fund_impact -= scenario.upfront_cost;
        }

        let window_end = scenario.start_month.saturating_add(scenario.duration);

        for month in 1..=HORIZON_MONTHS {
            let active = month >= scenario.start_month && month < window_end;

            let mut monthly_income = baseline.base_income;
            let mut monthly_expenses = baseline.base_expenses;
            if active {
                monthly_income += scenario.monthly_income;
                monthly_expenses += scenario.monthly_expense;
            }

            let net_cash_flow = monthly_income - monthly_expenses;
            cumulative_cash_flow += net_cash_flow;

            let emergency_fund_level = (baseline.emergency_fund
                + emergency_fund_impact
                + (cumulative_cash_flow - scenario.upfront_cost))
                .max(Decimal::ZERO);

            results.push(MonthProjection {
                month,
                monthly_income,
                monthly_expenses,
                net_cash_flow,
                cumulative_cash_flow,
                emergency_fund_level,
            });
        }

        Ok(results)
    }
}
