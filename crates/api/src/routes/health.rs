use axum::{routing::get, Router};

use crate::state::AppState;

/// Body returned by `GET /health`.
pub const HEALTH_MESSAGE: &str = "eb_pro is online and healthy";

/// GET /health -- liveness probe. Never touches the database.
async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
