//! Insight derivation from simulations and aggregates.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::aggregate::{AggregateService, CashFlowSummary};
use crate::records::JobExitSettings;
use crate::scenario::MonthProjection;

use super::types::{BreakEven, HealthScore, JobExitReadiness, RiskLevel, ScenarioInsights};

/// Latest acceptable break-even month for a scenario to be viable.
const VIABILITY_LIMIT_MONTHS: u32 = 18;

/// Emergency-fund level below which a scenario is flagged high risk.
const FUND_RISK_FLOOR: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Insight engine over simulations and aggregates.
pub struct InsightService;

impl InsightService {
    /// Derives the verdict for a simulated scenario.
    #[must_use]
    pub fn scenario_insights(projection: &[MonthProjection]) -> ScenarioInsights {
        let break_even = projection
            .iter()
            .find(|m| m.cumulative_cash_flow >= Decimal::ZERO)
            .map_or(BreakEven::Never, |m| BreakEven::Month(m.month));

        let month12_cash_flow = projection
            .get(11)
            .map_or(Decimal::ZERO, |m| m.cumulative_cash_flow);
        let total_roi = projection
            .get(23)
            .map_or(Decimal::ZERO, |m| m.cumulative_cash_flow);
        let emergency_fund_risk = projection
            .iter()
            .any(|m| m.emergency_fund_level < FUND_RISK_FLOOR);

        let is_viable = break_even
            .month()
            .is_some_and(|month| month <= VIABILITY_LIMIT_MONTHS);

        let risk_level = if emergency_fund_risk {
            RiskLevel::High
        } else if month12_cash_flow < Decimal::ZERO {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        ScenarioInsights {
            break_even,
            month12_cash_flow,
            emergency_fund_risk,
            total_roi,
            is_viable,
            risk_level,
        }
    }

    /// Computes the weighted financial health score.
    ///
    /// Ratios with a zero denominator count as zero, so a household with no
    /// recorded income scores the most favorable expense and debt buckets.
    #[must_use]
    pub fn health_score(
        summary: &CashFlowSummary,
        emergency_fund_progress_percent: Decimal,
    ) -> HealthScore {
        let expense_ratio = AggregateService::ratio(summary.total_expenses, summary.total_income);
        let expense_ratio_points = if expense_ratio < Decimal::new(5, 1) {
            30
        } else if expense_ratio < Decimal::new(7, 1) {
            20
        } else if expense_ratio < Decimal::new(9, 1) {
            10
        } else {
            0
        };

        let emergency_fund_points = if emergency_fund_progress_percent >= Decimal::ONE_HUNDRED {
            25
        } else if emergency_fund_progress_percent >= Decimal::new(75, 0) {
            20
        } else if emergency_fund_progress_percent >= Decimal::new(50, 0) {
            15
        } else if emergency_fund_progress_percent >= Decimal::new(25, 0) {
            10
        } else {
            0
        };

        let investment_rate =
            AggregateService::ratio(summary.total_investments, summary.total_income);
        let investment_rate_points = if investment_rate >= Decimal::new(15, 2) {
            20
        } else if investment_rate >= Decimal::new(10, 2) {
            15
        } else if investment_rate >= Decimal::new(5, 2) {
            10
        } else {
            0
        };

        let debt_ratio =
            AggregateService::ratio(summary.total_debt_payments, summary.total_income);
        let debt_load_points = if debt_ratio < Decimal::new(1, 1) {
            25
        } else if debt_ratio < Decimal::new(2, 1) {
            20
        } else if debt_ratio < Decimal::new(3, 1) {
            15
        } else if debt_ratio < Decimal::new(4, 1) {
            10
        } else {
            0
        };

        HealthScore {
            expense_ratio_points,
            emergency_fund_points,
            investment_rate_points,
            debt_load_points,
            total: expense_ratio_points
                + emergency_fund_points
                + investment_rate_points
                + debt_load_points,
        }
    }

    /// Computes job-exit readiness from the exit settings and aggregates.
    #[must_use]
    pub fn job_exit_readiness(
        settings: &JobExitSettings,
        summary: &CashFlowSummary,
    ) -> JobExitReadiness {
        let current_emergency_fund =
            AggregateService::estimated_emergency_fund(summary.total_account_balance);
        let emergency_fund_needed =
            summary.total_expenses * Decimal::from(settings.target_emergency_fund_months);

        let emergency_fund_progress_percent =
            AggregateService::ratio(current_emergency_fund, emergency_fund_needed)
                * Decimal::ONE_HUNDRED;
        let side_income_progress_percent =
            AggregateService::ratio(settings.current_side_income, settings.target_side_income)
                * Decimal::ONE_HUNDRED;
        let account_balance_progress_percent = AggregateService::ratio(
            summary.total_account_balance,
            settings.target_account_balance,
        ) * Decimal::ONE_HUNDRED;

        let months_to_full_emergency_fund = Self::months_to_target(
            emergency_fund_needed - current_emergency_fund,
            summary.available_for_spending,
        );

        let cap = |percent: Decimal| percent.min(Decimal::ONE_HUNDRED);
        let overall_percent = (cap(emergency_fund_progress_percent) * Decimal::new(4, 1)
            + cap(side_income_progress_percent) * Decimal::new(35, 2)
            + cap(account_balance_progress_percent) * Decimal::new(25, 2))
        .round_dp(1);

        JobExitReadiness {
            emergency_fund_needed,
            current_emergency_fund,
            emergency_fund_progress_percent,
            months_to_full_emergency_fund,
            side_income_progress_percent,
            account_balance_progress_percent,
            overall_percent,
        }
    }

    /// Months of saving the monthly surplus until a shortfall is covered.
    /// A non-positive surplus makes the horizon indeterminate.
    fn months_to_target(shortfall: Decimal, monthly_surplus: Decimal) -> Option<u32> {
        if shortfall <= Decimal::ZERO {
            return Some(0);
        }
        if monthly_surplus <= Decimal::ZERO {
            return None;
        }
        (shortfall / monthly_surplus).ceil().to_u32()
    }
}
