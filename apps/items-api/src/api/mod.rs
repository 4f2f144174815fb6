//! API routes module

pub mod health;
pub mod items;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// All routes, mounted at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}
