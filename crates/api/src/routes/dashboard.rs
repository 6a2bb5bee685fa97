//! Dashboard routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use hearth_core::aggregate::AggregateService;
use hearth_core::insight::InsightService;
use hearth_core::records::{JobExitSettings, Transaction};

use crate::AppState;

/// Number of transactions shown on the dashboard.
const RECENT_TRANSACTION_LIMIT: usize = 10;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/settings/job-exit", put(put_job_exit))
}

// ============================================================================
// Response Types
// ============================================================================

/// Dashboard overview response.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Monthly cash-flow totals.
    pub summary: SummaryResponse,
    /// Income-share percentages per bucket.
    pub allocation: AllocationResponse,
    /// Budget breakdown by bucket.
    pub breakdown: BreakdownResponse,
    /// Suggested surplus split.
    pub surplus_split: SurplusSplitResponse,
    /// Financial health score.
    pub health_score: HealthScoreResponse,
    /// Job-exit readiness.
    pub job_exit: JobExitResponse,
    /// Most recent ingested transactions.
    pub recent_transactions: Vec<TransactionResponse>,
}

/// Cash-flow summary response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Total monthly income.
    pub total_income: String,
    /// Total monthly expenses.
    pub total_expenses: String,
    /// Total monthly investment contributions.
    pub total_investments: String,
    /// Total monthly debt payments.
    pub total_debt_payments: String,
    /// Monthly surplus.
    pub available_for_spending: String,
    /// Total linked account balance.
    pub total_account_balance: String,
    /// Linked balances minus debt balances.
    pub net_worth: String,
}

/// Allocation response.
#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    /// Expenses as a share of income.
    pub expenses_percent: String,
    /// Investments as a share of income.
    pub investments_percent: String,
    /// Flexible spending as a share of income.
    pub flexible_percent: String,
}

/// Budget breakdown response.
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    /// Essential (non-debt) expenses.
    pub essential_expenses: String,
    /// Debt payments.
    pub debt_payments: String,
    /// Investments.
    pub investments: String,
    /// Flexible spending.
    pub flexible: String,
}

/// Surplus split response.
#[derive(Debug, Serialize)]
pub struct SurplusSplitResponse {
    /// Suggested emergency-fund contribution.
    pub emergency_fund: String,
    /// Suggested extra debt payment.
    pub extra_debt_payment: String,
    /// Suggested discretionary amount.
    pub flexible: String,
}

/// Health score response.
#[derive(Debug, Serialize)]
pub struct HealthScoreResponse {
    /// Expense-ratio points (max 30).
    pub expense_ratio_points: u32,
    /// Emergency-fund points (max 25).
    pub emergency_fund_points: u32,
    /// Investment-rate points (max 20).
    pub investment_rate_points: u32,
    /// Debt-to-income points (max 25).
    pub debt_load_points: u32,
    /// Total score in [0, 100].
    pub total: u32,
}

/// Job-exit readiness response.
#[derive(Debug, Serialize)]
pub struct JobExitResponse {
    /// Emergency fund target.
    pub emergency_fund_needed: String,
    /// Estimated current emergency fund.
    pub current_emergency_fund: String,
    /// Fund progress percentage.
    pub emergency_fund_progress_percent: String,
    /// Months until the fund target at the current surplus, when
    /// determinate.
    pub months_to_full_emergency_fund: Option<u32>,
    /// Side-income progress percentage.
    pub side_income_progress_percent: String,
    /// Account-balance progress percentage.
    pub account_balance_progress_percent: String,
    /// Weighted overall readiness percentage.
    pub overall_percent: String,
}

/// Transaction response.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction id.
    pub id: String,
    /// Amount, positive for inflows.
    pub amount: String,
    /// Transaction date.
    pub date: String,
    /// Merchant or transaction name.
    pub name: String,
    /// Primary category.
    pub category: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal as a string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Formats a Decimal as a string with 1 decimal place.
fn format_percent(amount: Decimal) -> String {
    format!("{:.1}", amount.round_dp(1))
}

fn transaction_response(transaction: &Transaction) -> TransactionResponse {
    TransactionResponse {
        id: transaction.id.clone(),
        amount: format_money(transaction.amount),
        date: transaction.date.to_string(),
        name: transaction.name.clone(),
        category: transaction.category.clone(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/dashboard` - Full dashboard overview.
async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;

    let summary = AggregateService::summarize(&records);
    let allocation = AggregateService::allocation(&summary);
    let breakdown = AggregateService::breakdown(&records);
    let split = AggregateService::surplus_split(summary.available_for_spending);

    let settings = records.job_exit();
    let readiness = InsightService::job_exit_readiness(&settings, &summary);
    let score =
        InsightService::health_score(&summary, readiness.emergency_fund_progress_percent);

    let mut recent: Vec<&Transaction> = records.transactions().iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let recent_transactions = recent
        .into_iter()
        .take(RECENT_TRANSACTION_LIMIT)
        .map(transaction_response)
        .collect();

    let response = DashboardResponse {
        summary: SummaryResponse {
            total_income: format_money(summary.total_income),
            total_expenses: format_money(summary.total_expenses),
            total_investments: format_money(summary.total_investments),
            total_debt_payments: format_money(summary.total_debt_payments),
            available_for_spending: format_money(summary.available_for_spending),
            total_account_balance: format_money(summary.total_account_balance),
            net_worth: format_money(summary.net_worth),
        },
        allocation: AllocationResponse {
            expenses_percent: format_percent(allocation.expenses_percent),
            investments_percent: format_percent(allocation.investments_percent),
            flexible_percent: format_percent(allocation.flexible_percent),
        },
        breakdown: BreakdownResponse {
            essential_expenses: format_money(breakdown.essential_expenses),
            debt_payments: format_money(breakdown.debt_payments),
            investments: format_money(breakdown.investments),
            flexible: format_money(breakdown.flexible),
        },
        surplus_split: SurplusSplitResponse {
            emergency_fund: format_money(split.emergency_fund),
            extra_debt_payment: format_money(split.extra_debt_payment),
            flexible: format_money(split.flexible),
        },
        health_score: HealthScoreResponse {
            expense_ratio_points: score.expense_ratio_points,
            emergency_fund_points: score.emergency_fund_points,
            investment_rate_points: score.investment_rate_points,
            debt_load_points: score.debt_load_points,
            total: score.total,
        },
        job_exit: JobExitResponse {
            emergency_fund_needed: format_money(readiness.emergency_fund_needed),
            current_emergency_fund: format_money(readiness.current_emergency_fund),
            emergency_fund_progress_percent: format_percent(
                readiness.emergency_fund_progress_percent,
            ),
            months_to_full_emergency_fund: readiness.months_to_full_emergency_fund,
            side_income_progress_percent: format_percent(readiness.side_income_progress_percent),
            account_balance_progress_percent: format_percent(
                readiness.account_balance_progress_percent,
            ),
            overall_percent: format_percent(readiness.overall_percent),
        },
        recent_transactions,
    };

    (StatusCode::OK, Json(response))
}

/// PUT `/settings/job-exit` - Replace the job-exit settings.
async fn put_job_exit(
    State(state): State<AppState>,
    Json(settings): Json<JobExitSettings>,
) -> impl IntoResponse {
    {
        let mut records = state.records.write().await;
        records.set_job_exit(settings);
    }
    let persisted = state.persist().await;
    (StatusCode::OK, Json(json!({ "persisted": persisted })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_two_places() {
        assert_eq!(format_money(dec!(6013.04)), "6013.04");
        assert_eq!(format_money(dec!(5000)), "5000.00");
        assert_eq!(format_money(dec!(-686.956)), "-686.96");
    }

    #[test]
    fn test_format_percent_one_place() {
        assert_eq!(format_percent(dec!(61.9648)), "62.0");
        assert_eq!(format_percent(dec!(0)), "0.0");
    }
}
