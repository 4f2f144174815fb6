//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Readiness payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// "ready" or "not ready"
    #[schema(example = "ready")]
    pub status: &'static str,
    /// "connected" or "disconnected"
    #[schema(example = "connected")]
    pub mongodb: &'static str,
}

impl ReadyResponse {
    fn from_mongodb(connected: bool) -> (StatusCode, Self) {
        if connected {
            (
                StatusCode::OK,
                Self {
                    status: "ready",
                    mongodb: "connected",
                },
            )
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Self {
                    status: "not ready",
                    mongodb: "disconnected",
                },
            )
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "MongoDB reachable", body = ReadyResponse),
        (status = 503, description = "MongoDB unreachable", body = ReadyResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadyResponse>) {
    let health = database::mongodb::check_health_detailed(&state.mongo_client).await;

    if health.healthy {
        tracing::debug!(response_time_ms = health.response_time_ms, "MongoDB ping");
    } else {
        tracing::error!(
            response_time_ms = health.response_time_ms,
            error = health.message.as_deref().unwrap_or_default(),
            "Readiness check failed"
        );
    }

    let (status, body) = ReadyResponse::from_mongodb(health.healthy);
    (status, Json(body))
}
