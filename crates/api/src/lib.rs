//! HTTP API layer with Axum routes and the aggregation client.
//!
//! This crate provides:
//! - REST API routes over the core record store and engines
//! - The account aggregation relay client
//! - Response types

pub mod aggregation;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono::Utc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use hearth_core::records::RecordStore;
use hearth_core::snapshot::{SnapshotDocument, SnapshotStore};

use crate::aggregation::AccountAggregator;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The canonical record store.
    pub records: Arc<RwLock<RecordStore>>,
    /// Snapshot persistence.
    pub snapshots: Arc<SnapshotStore>,
    /// Account aggregation relay client.
    pub aggregator: Arc<dyn AccountAggregator>,
}

impl AppState {
    /// Persists the current record set, returning whether the write
    /// succeeded. Failures are logged and never fail the calling request;
    /// the in-memory store remains authoritative.
    pub async fn persist(&self) -> bool {
        let document = {
            let records = self.records.read().await;
            SnapshotDocument::capture(&records, Utc::now())
        };
        match self.snapshots.save(&document).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to persist snapshot");
                false
            }
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
