use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::constants::API_NAME;
use crate::handlers::{cars, health, root};
use crate::service::CarService;

pub fn build_router(service: CarService, cors: CorsLayer) -> Router {
    Router::new()
        .merge(root::router())
        .merge(cars::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}

/// Cross-origin policy from the configured allow-list. A `*` entry opens it to any origin.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("{} Ignoring invalid CORS origin: {}", API_NAME, origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
