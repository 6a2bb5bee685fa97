//! Hearth API Server
//!
//! Main entry point for the Hearth backend service.

use std::sync::Arc;

use chrono::Utc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth_api::aggregation::{AccountAggregator, HttpAggregator, NullAggregator};
use hearth_api::{AppState, create_router};
use hearth_core::snapshot::{SnapshotRecovery, SnapshotStore};
use hearth_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Restore the record set from the snapshot store
    let snapshots = SnapshotStore::from_root(&config.snapshot.root)?;
    let loaded = snapshots.load(Utc::now()).await;
    match &loaded.recovery {
        None => info!("Restored records from snapshot"),
        Some(SnapshotRecovery::Missing) => {
            info!("No snapshot found; starting from seed records");
        }
        Some(SnapshotRecovery::Corrupt(reason)) => {
            warn!(%reason, "Snapshot unusable; starting from seed records");
        }
    }
    let records = loaded.document.into_store();

    // Create the aggregation relay client
    let aggregator: Arc<dyn AccountAggregator> = if config.aggregation.enabled {
        info!(base_url = %config.aggregation.base_url, "Aggregation relay enabled");
        Arc::new(HttpAggregator::from_config(&config.aggregation)?)
    } else {
        info!("Aggregation relay disabled; running with manual records only");
        Arc::new(NullAggregator)
    };

    // Create application state
    let state = AppState {
        records: Arc::new(RwLock::new(records)),
        snapshots: Arc::new(snapshots),
        aggregator,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
