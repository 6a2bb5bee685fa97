//! Record collection routes.
//!
//! The four collections are read and replaced wholesale; the caller owns
//! ordering. Every mutation persists a snapshot, and a persistence failure
//! is reported without failing the mutation.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use hearth_core::records::{Debt, Expense, IncomeStream, Investment};

use crate::AppState;

/// Creates the record collection routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records/income", get(get_income).put(put_income))
        .route("/records/expenses", get(get_expenses).put(put_expenses))
        .route(
            "/records/investments",
            get(get_investments).put(put_investments),
        )
        .route("/records/debts", get(get_debts).put(put_debts))
}

/// GET `/records/income` - List income streams.
async fn get_income(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;
    Json(records.income_streams().to_vec())
}

/// PUT `/records/income` - Replace income streams.
async fn put_income(
    State(state): State<AppState>,
    Json(streams): Json<Vec<IncomeStream>>,
) -> impl IntoResponse {
    {
        let mut records = state.records.write().await;
        records.set_income_streams(streams);
    }
    let persisted = state.persist().await;
    (StatusCode::OK, Json(json!({ "persisted": persisted })))
}

/// GET `/records/expenses` - List expenses.
async fn get_expenses(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;
    Json(records.expenses().to_vec())
}

/// PUT `/records/expenses` - Replace expenses.
async fn put_expenses(
    State(state): State<AppState>,
    Json(expenses): Json<Vec<Expense>>,
) -> impl IntoResponse {
    {
        let mut records = state.records.write().await;
        records.set_expenses(expenses);
    }
    let persisted = state.persist().await;
    (StatusCode::OK, Json(json!({ "persisted": persisted })))
}

/// GET `/records/investments` - List investments.
async fn get_investments(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;
    Json(records.investments().to_vec())
}

/// PUT `/records/investments` - Replace investments.
async fn put_investments(
    State(state): State<AppState>,
    Json(investments): Json<Vec<Investment>>,
) -> impl IntoResponse {
    {
        let mut records = state.records.write().await;
        records.set_investments(investments);
    }
    let persisted = state.persist().await;
    (StatusCode::OK, Json(json!({ "persisted": persisted })))
}

/// GET `/records/debts` - List debts.
async fn get_debts(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;
    Json(records.debts().to_vec())
}

/// PUT `/records/debts` - Replace debts after validation.
async fn put_debts(
    State(state): State<AppState>,
    Json(debts): Json<Vec<Debt>>,
) -> impl IntoResponse {
    {
        let mut records = state.records.write().await;
        if let Err(e) = records.set_debts(debts) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_debt",
                    "message": e.to_string()
                })),
            );
        }
    }
    let persisted = state.persist().await;
    (StatusCode::OK, Json(json!({ "persisted": persisted })))
}
