//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el dashboard.

use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// CORS permisivo, para desarrollo o cuando no hay orígenes configurados
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// CORS restringido a los orígenes dados; los inválidos se ignoran
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .max_age(Duration::from_secs(3600))
}
