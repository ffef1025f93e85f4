//! Health check endpoints.
//!
//! - `/health/live` — liveness probe (restart the process if it fails)
//! - `/health/ready` — readiness probe (store must answer)
//! - `/api/health` — editor-facing status with a server timestamp

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forge_core::store::current_timestamp_ms;
use serde::Serialize;
use serde_json::json;

use crate::AppState;

/// Readiness response body.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// "healthy" or "unhealthy".
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
    /// Individual component checks.
    pub checks: HealthChecks,
}

/// Individual readiness checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Store lock answered and built-in templates are present.
    pub store: bool,
}

/// Liveness probe.
#[tracing::instrument(name = "liveness_probe")]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. Exercises the store lock by listing templates.
#[tracing::instrument(name = "readiness_probe", skip(state))]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let store_ok = !state.store.templates().is_empty();
    let status = HealthStatus {
        status: if store_ok { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { store: store_ok },
    };
    let code = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Editor-facing health endpoint.
pub async fn api_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": current_timestamp_ms(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_checks() {
        let status = HealthStatus {
            status: "healthy",
            version: "0.2.0",
            checks: HealthChecks { store: true },
        };
        let json = serde_json::to_string(&status).expect("should serialize");
        assert!(json.contains("healthy"));
        assert!(json.contains("store"));
    }
}
