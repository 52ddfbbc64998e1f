//! Root-level liveness endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use duet_db::repositories::PromptTemplateRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored presets; absent when the database is unreachable.
    pub presets: Option<i64>,
}

/// GET /health
///
/// Counting presets doubles as the database probe, so a missing or
/// unmigrated schema reports as degraded too.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let presets = match PromptTemplateRepo::count(&state.pool, Some(true)).await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach prompt_templates");
            None
        }
    };
    let db_healthy = presets.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        presets,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
