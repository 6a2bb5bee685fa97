//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod dashboard;
pub mod debts;
pub mod export;
pub mod health;
pub mod records;
pub mod simulation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(records::routes())
        .merge(dashboard::routes())
        .merge(debts::routes())
        .merge(simulation::routes())
        .merge(accounts::routes())
        .merge(export::routes())
}
