//! Decision simulation routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;

use hearth_core::aggregate::AggregateService;
use hearth_core::insight::InsightService;
use hearth_core::scenario::{DecisionScenario, ScenarioEngine, SimulationBaseline};

use crate::AppState;

/// Creates the simulation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/simulation/run", post(run_simulation))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for running a decision simulation.
#[derive(Debug, Deserialize)]
pub struct RunSimulationRequest {
    /// Scenario name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form scenario tag.
    #[serde(default)]
    pub kind: Option<String>,
    /// One-time cost at start (decimal string; negative for a windfall).
    #[serde(default)]
    pub upfront_cost: Option<String>,
    /// Monthly income delta while the window is active (decimal string).
    #[serde(default)]
    pub monthly_income: Option<String>,
    /// Monthly expense delta while the window is active (decimal string).
    #[serde(default)]
    pub monthly_expense: Option<String>,
    /// Months the deltas apply.
    pub duration: u32,
    /// 1-based month the deltas begin applying.
    pub start_month: u32,
}

/// Simulation response.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    /// Per-month projections over the 24-month horizon.
    pub months: Vec<MonthResponse>,
    /// Derived verdict.
    pub insights: InsightsResponse,
}

/// Per-month projection response.
#[derive(Debug, Serialize)]
pub struct MonthResponse {
    /// 1-based month index.
    pub month: u32,
    /// Effective income.
    pub monthly_income: String,
    /// Effective expenses.
    pub monthly_expenses: String,
    /// Net cash flow.
    pub net_cash_flow: String,
    /// Running cash-flow total.
    pub cumulative_cash_flow: String,
    /// Projected emergency fund level.
    pub emergency_fund_level: String,
}

/// Insights response.
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    /// Break-even month, absent when never reached.
    pub break_even_month: Option<u32>,
    /// Cumulative cash flow at month 12.
    pub month12_cash_flow: String,
    /// Whether the emergency fund dips below the risk floor.
    pub emergency_fund_risk: bool,
    /// Cumulative cash flow at month 24.
    pub total_roi: String,
    /// Whether break-even arrives within 18 months.
    pub is_viable: bool,
    /// Risk classification: "Low", "Medium", or "High".
    pub risk_level: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal as a string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Parses a decimal from string, defaulting to zero.
fn parse_decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or(Decimal::ZERO)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/simulation/run` - Run a 24-month decision simulation.
async fn run_simulation(
    State(state): State<AppState>,
    Json(request): Json<RunSimulationRequest>,
) -> impl IntoResponse {
    if request.start_month == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_start_month",
                "message": "Start month must be at least 1"
            })),
        )
            .into_response();
    }

    let scenario = DecisionScenario {
        name: request.name.unwrap_or_else(|| "Custom Scenario".to_string()),
        kind: request.kind.unwrap_or_else(|| "custom".to_string()),
        upfront_cost: request.upfront_cost.as_deref().map_or(Decimal::ZERO, parse_decimal),
        monthly_income: request
            .monthly_income
            .as_deref()
            .map_or(Decimal::ZERO, parse_decimal),
        monthly_expense: request
            .monthly_expense
            .as_deref()
            .map_or(Decimal::ZERO, parse_decimal),
        duration: request.duration,
        start_month: request.start_month,
    };

    let baseline = {
        let records = state.records.read().await;
        let summary = AggregateService::summarize(&records);
        SimulationBaseline {
            base_income: summary.total_income,
            base_expenses: summary.total_expenses + summary.total_investments,
            emergency_fund: AggregateService::estimated_emergency_fund(
                summary.total_account_balance,
            ),
        }
    };

    let projection = match ScenarioEngine::simulate(&baseline, &scenario) {
        Ok(projection) => projection,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_scenario",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };
    let insights = InsightService::scenario_insights(&projection);

    let response = SimulationResponse {
        months: projection
            .iter()
            .map(|m| MonthResponse {
                month: m.month,
                monthly_income: format_money(m.monthly_income),
                monthly_expenses: format_money(m.monthly_expenses),
                net_cash_flow: format_money(m.net_cash_flow),
                cumulative_cash_flow: format_money(m.cumulative_cash_flow),
                emergency_fund_level: format_money(m.emergency_fund_level),
            })
            .collect(),
        insights: InsightsResponse {
            break_even_month: insights.break_even.month(),
            month12_cash_flow: format_money(insights.month12_cash_flow),
            emergency_fund_risk: insights.emergency_fund_risk,
            total_roi: format_money(insights.total_roi),
            is_viable: insights.is_viable,
            risk_level: insights.risk_level.to_string(),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
