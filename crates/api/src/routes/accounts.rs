//! Linked bank-account routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use hearth_core::aggregation::AggregationIngest;
use hearth_core::records::{ConnectAccountInput, LinkedSubAccount, RecordStore};

use crate::aggregation::{AccountAggregator, AggregationError};
use crate::AppState;

/// Creates the linked-account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/connect", post(connect_account))
        .route("/accounts/sync", post(sync_accounts))
        .route("/accounts/{id}", delete(disconnect_account))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for registering a new connection.
#[derive(Debug, Deserialize)]
pub struct ConnectAccountRequest {
    /// Institution display name.
    pub institution_name: String,
    /// Institution identifier from the aggregation service.
    pub institution_id: String,
    /// Sub-accounts reported at link time.
    #[serde(default)]
    pub accounts: Vec<LinkedSubAccount>,
    /// Opaque bank-link credential.
    pub link_credential: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Fetches balances and transactions from the relay and applies them to the
/// store. Returns (balances updated, transactions added).
async fn fetch_and_apply(
    aggregator: &dyn AccountAggregator,
    records: &mut RecordStore,
) -> Result<(usize, usize), AggregationError> {
    let balances = aggregator.fetch_balances().await?;
    let transactions = aggregator.fetch_recent_transactions().await?;

    let balance_snapshot = AggregationIngest::balance_snapshot(balances, Utc::now());
    let balances_updated = balance_snapshot.len();
    records.apply_balances(balance_snapshot);

    let converted = AggregationIngest::transactions(transactions);
    let before = records.transactions().len();
    records.ingest_transactions(converted);
    let transactions_added = records.transactions().len() - before;

    Ok((balances_updated, transactions_added))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/accounts` - List connections (credentials redacted) and balances.
async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;

    let accounts: Vec<_> = records
        .connected_accounts()
        .iter()
        .map(hearth_core::records::ConnectedAccount::redacted)
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "accounts": accounts,
            "balances": records.account_balances(),
        })),
    )
}

/// POST `/accounts/connect` - Register a new bank-account connection.
async fn connect_account(
    State(state): State<AppState>,
    Json(request): Json<ConnectAccountRequest>,
) -> impl IntoResponse {
    let id = {
        let mut records = state.records.write().await;
        records.connect_account(ConnectAccountInput {
            institution_name: request.institution_name,
            institution_id: request.institution_id,
            accounts: request.accounts,
            link_credential: request.link_credential,
            connected_at: Utc::now(),
        })
    };
    info!(connection = %id, "Linked new bank connection");

    let persisted = state.persist().await;
    (
        StatusCode::CREATED,
        Json(json!({ "id": id, "persisted": persisted })),
    )
}

/// DELETE `/accounts/{id}` - Remove a connection and its data.
async fn disconnect_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = {
        let mut records = state.records.write().await;
        records.disconnect_account(&id)
    };

    match removed {
        Ok(_) => {
            let persisted = state.persist().await;
            (StatusCode::OK, Json(json!({ "persisted": persisted })))
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "unknown_account",
                "message": e.to_string()
            })),
        ),
    }
}

/// POST `/accounts/sync` - Refresh balances and transactions from the relay.
///
/// A relay failure degrades gracefully: the store keeps its last-known data
/// and the response reports the degraded sync instead of failing.
async fn sync_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = {
        let mut records = state.records.write().await;
        fetch_and_apply(state.aggregator.as_ref(), &mut records).await
    };

    match outcome {
        Ok((balances_updated, transactions_added)) => {
            let persisted = state.persist().await;
            (
                StatusCode::OK,
                Json(json!({
                    "degraded": false,
                    "balances_updated": balances_updated,
                    "transactions_added": transactions_added,
                    "persisted": persisted
                })),
            )
        }
        Err(e) => {
            warn!(error = %e, "Aggregation sync failed; keeping last-known data");
            (
                StatusCode::OK,
                Json(json!({
                    "degraded": true,
                    "balances_updated": 0,
                    "transactions_added": 0,
                    "persisted": false
                })),
            )
        }
    }
}
