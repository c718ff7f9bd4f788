//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a small JSON document
//! when the process is running. Used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::HEALTH_STATUS_UP;
use crate::state::AppState;

/// Body of a health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
}

impl HealthStatus {
    /// Status for a process that is able to serve traffic.
    pub fn up(service: impl Into<String>) -> Self {
        Self {
            status: HEALTH_STATUS_UP,
            service: service.into(),
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe: it only checks that the process can respond to HTTP.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    tracing::debug!("Health check");
    Json(HealthStatus::up(state.config.service.name.as_str()))
}
