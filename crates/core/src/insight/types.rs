//! Insight data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// First month at which cumulative scenario cash flow is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// Break-even reached in the given 1-based month.
    Month(u32),
    /// Cumulative cash flow never recovers within the horizon.
    Never,
}

impl BreakEven {
    /// Returns the break-even month, when reached.
    #[must_use]
    pub const fn month(self) -> Option<u32> {
        match self {
            Self::Month(month) => Some(month),
            Self::Never => None,
        }
    }
}

/// Risk classification for a simulated scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Cash flow recovers and the emergency fund stays healthy.
    Low,
    /// Cumulative cash flow is still negative at month 12.
    Medium,
    /// The emergency fund dips below the risk floor in some month.
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Derived verdict for a simulated scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInsights {
    /// Break-even month, if any.
    pub break_even: BreakEven,
    /// Cumulative cash flow at month 12 (zero when absent).
    pub month12_cash_flow: Decimal,
    /// Whether any month's emergency fund dips below the risk floor.
    pub emergency_fund_risk: bool,
    /// Cumulative cash flow at month 24.
    pub total_roi: Decimal,
    /// Whether break-even arrives within 18 months.
    pub is_viable: bool,
    /// Overall risk classification.
    pub risk_level: RiskLevel,
}

/// Weighted 0-100 financial health score.
///
/// Each sub-score is independently bucketed; there is no partial credit
/// between buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Expense-ratio points (max 30).
    pub expense_ratio_points: u32,
    /// Emergency-fund progress points (max 25).
    pub emergency_fund_points: u32,
    /// Investment-rate points (max 20).
    pub investment_rate_points: u32,
    /// Debt-to-income points (max 25).
    pub debt_load_points: u32,
    /// Sum of all sub-scores, in [0, 100].
    pub total: u32,
}

/// Progress toward leaving the primary income source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobExitReadiness {
    /// Emergency fund target: monthly expenses times the target months.
    pub emergency_fund_needed: Decimal,
    /// Estimated current emergency fund.
    pub current_emergency_fund: Decimal,
    /// Fund progress as a percentage (uncapped).
    pub emergency_fund_progress_percent: Decimal,
    /// Months of surplus saving until the fund target is reached. `None`
    /// when the monthly surplus is non-positive (indeterminate).
    pub months_to_full_emergency_fund: Option<u32>,
    /// Side-income progress as a percentage (uncapped).
    pub side_income_progress_percent: Decimal,
    /// Account-balance progress as a percentage (uncapped).
    pub account_balance_progress_percent: Decimal,
    /// Weighted overall readiness, each component capped at 100 before
    /// weighting: fund 40%, side income 35%, balance 25%.
    pub overall_percent: Decimal,
}
