//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its store:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (pings the catalog store)
//! - `GET /health/live` - Kubernetes-style liveness check

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use crate::error::{ApiError, ApiResult};
use crate::repositories::SharedStore;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Store checked by the readiness endpoint
    pub store: SharedStore,
}

impl HealthState {
    /// Create new health state for a store
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
///
/// # Response
/// - 200 OK with body "OK"
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness check for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
/// Does not touch the store.
///
/// # Response
/// - 200 OK with JSON body containing status
async fn liveness_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check - pings the catalog store
///
/// # Response
/// - 200 OK with the backend name when the store answers
/// - 503 Service Unavailable with `DATABASE_UNAVAILABLE` otherwise
async fn readiness_check(State(state): State<HealthState>) -> ApiResult<impl IntoResponse> {
    let backend = state.store.backend();

    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, backend, "Readiness check failed");
        return Err(ApiError::DatabaseUnavailable);
    }

    Ok(Json(serde_json::json!({
        "status": "ready",
        "store": backend,
    })))
}
