//! Debt payoff routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;

use hearth_core::amortization::{AmortizationEngine, AmortizationError};

use crate::AppState;

/// Creates the debt payoff routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/debts/payoff", get(get_payoff))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the payoff projection.
#[derive(Debug, Deserialize)]
pub struct PayoffQuery {
    /// Extra monthly payment to simulate (decimal string, defaults to 0).
    #[serde(default)]
    pub extra: Option<String>,
}

/// Payoff projection response.
#[derive(Debug, Serialize)]
pub struct PayoffResponse {
    /// Per-debt payoff summaries.
    pub debts: Vec<DebtSummaryResponse>,
    /// Current path months (blended-rate pooling).
    pub current_months: u32,
    /// Accelerated path months with the extra payment.
    pub accelerated_months: u32,
    /// Total monthly payment on the current path.
    pub current_monthly_payment: String,
    /// Total monthly payment on the accelerated path.
    pub accelerated_monthly_payment: String,
    /// Total interest on the current path.
    pub current_total_interest: String,
    /// Total interest on the accelerated path.
    pub accelerated_total_interest: String,
    /// Interest saved by accelerating, floored at zero.
    pub interest_saved: String,
}

/// Per-debt payoff summary response.
#[derive(Debug, Serialize)]
pub struct DebtSummaryResponse {
    /// Debt name.
    pub name: String,
    /// Outstanding balance.
    pub balance: String,
    /// Monthly payment.
    pub payment: String,
    /// Annual interest rate in percent.
    pub interest_rate: String,
    /// Months until payoff.
    pub payoff_months: u32,
    /// Total interest over the payoff period.
    pub total_interest: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal as a string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Maps an amortization error to an API response.
fn amortization_error_response(error: &AmortizationError) -> (StatusCode, Json<serde_json::Value>) {
    let code = match error {
        AmortizationError::IndeterminatePayoff => "indeterminate_payoff",
        AmortizationError::PaymentTooLow { .. } => "payment_insufficient",
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": code,
            "message": error.to_string()
        })),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/debts/payoff` - Payoff projection for the stored debts.
async fn get_payoff(
    State(state): State<AppState>,
    Query(query): Query<PayoffQuery>,
) -> impl IntoResponse {
    let extra = query
        .extra
        .as_deref()
        .map_or(Ok(Decimal::ZERO), Decimal::from_str);
    let Ok(extra) = extra else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_extra_payment",
                "message": "Extra payment must be a decimal number"
            })),
        )
            .into_response();
    };
    if extra < Decimal::ZERO {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_extra_payment",
                "message": "Extra payment must not be negative"
            })),
        )
            .into_response();
    }

    let records = state.records.read().await;

    let summaries = match AmortizationEngine::debt_summaries(records.debts()) {
        Ok(summaries) => summaries,
        Err(e) => return amortization_error_response(&e).into_response(),
    };
    let comparison = match AmortizationEngine::compare_strategies(records.debts(), extra) {
        Ok(comparison) => comparison,
        Err(e) => return amortization_error_response(&e).into_response(),
    };

    let response = PayoffResponse {
        debts: summaries
            .into_iter()
            .map(|s| DebtSummaryResponse {
                name: s.name,
                balance: format_money(s.balance),
                payment: format_money(s.payment),
                interest_rate: s.interest_rate.to_string(),
                payoff_months: s.payoff_months,
                total_interest: format_money(s.total_interest),
            })
            .collect(),
        current_months: comparison.current.months,
        accelerated_months: comparison.accelerated.months,
        current_monthly_payment: format_money(comparison.current.monthly_payment),
        accelerated_monthly_payment: format_money(comparison.accelerated.monthly_payment),
        current_total_interest: format_money(comparison.current.total_interest),
        accelerated_total_interest: format_money(comparison.accelerated.total_interest),
        interest_saved: format_money(comparison.interest_saved),
    };

    (StatusCode::OK, Json(response)).into_response()
}
