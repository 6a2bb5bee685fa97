//! Data export routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use chrono::Utc;

use hearth_core::export::ExportService;

use crate::AppState;

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/export", get(export_records))
}

/// GET `/export` - One-way JSON dump of the record collections.
///
/// Lossless for the four record collections; connected-account credentials
/// are redacted to a fixed placeholder.
async fn export_records(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.records.read().await;
    let document = ExportService::export(&records, Utc::now());
    (StatusCode::OK, Json(document))
}
