//! Liveness and readiness report for the catalog service.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_db::CatalogStatus;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the catalog can be queried, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Schema version and row counts; omitted while degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogStatus>,
}

impl HealthReport {
    fn from_status(status: Result<CatalogStatus, sqlx::Error>) -> Self {
        let version = env!("CARGO_PKG_VERSION");
        match status {
            Ok(catalog) => Self {
                status: "ok",
                version,
                db_healthy: true,
                catalog: Some(catalog),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Catalog status unavailable");
                Self {
                    status: "degraded",
                    version,
                    db_healthy: false,
                    catalog: None,
                }
            }
        }
    }
}

/// GET /health
///
/// Always answers 200 so load balancers can tell a running process from a
/// dead one; the body says whether the catalog itself is usable.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let status = catalog_db::catalog_status(&state.pool).await;
    Json(HealthReport::from_status(status))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
