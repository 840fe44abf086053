//! Rutas HTTP
//!
//! Arma el router completo de la API con sus capas.

pub mod revision_config_routes;
pub mod revision_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/revisions", revision_routes::create_revision_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/revision-configs", revision_config_routes::create_revision_config_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
