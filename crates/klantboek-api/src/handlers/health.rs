//! Health check handlers for service monitoring.
//!
//! `/health` verifies database connectivity with a lightweight probe;
//! `/live` only confirms the process is serving requests.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use klantboek_core::Storage;
use serde::Serialize;
use tracing::{debug, error, instrument};

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service health status.
    pub status: HealthStatus,
    /// Individual component health checks.
    pub checks: HealthChecks,
    /// Service version information.
    pub version: String,
}

/// Overall health status enumeration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational.
    Healthy,
    /// Critical systems failing.
    Unhealthy,
}

/// Individual component health check results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Database connectivity probe result.
    pub database: ComponentHealth,
}

/// Health status for an individual component.
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    /// Component status.
    pub status: ComponentStatus,
    /// Optional error message if unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Component-level health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// Component is healthy.
    Up,
    /// Component is experiencing issues.
    Down,
}

/// Health check endpoint handler.
///
/// Designed to be called frequently by orchestration systems, so it runs
/// only a lightweight connectivity probe.
#[instrument(name = "health_check", skip(storage))]
pub async fn health_check(State(storage): State<Storage>) -> Response {
    let database = match storage.health_check().await {
        Ok(()) => {
            debug!("database health check passed");
            ComponentHealth { status: ComponentStatus::Up, message: None }
        },
        Err(e) => {
            error!("database health check failed: {}", e);
            ComponentHealth {
                status: ComponentStatus::Down,
                message: Some(format!("database connection failed: {e}")),
            }
        },
    };

    let (status_code, status) = match database.status {
        ComponentStatus::Up => (StatusCode::OK, HealthStatus::Healthy),
        ComponentStatus::Down => (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Unhealthy),
    };

    let response = HealthResponse {
        status,
        checks: HealthChecks { database },
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response)).into_response()
}

/// Liveness check endpoint.
///
/// Returns a minimal response without touching external dependencies.
#[instrument(name = "liveness_check")]
pub async fn liveness_check() -> Response {
    let response = serde_json::json!({
        "status": "alive",
        "service": "klantboek-api",
    });

    (StatusCode::OK, Json(response)).into_response()
}
