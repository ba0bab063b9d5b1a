// src/routes.rs

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{dictionary, health, preview, transpile},
    state::AppState,
    utils::headers::security_headers,
};

/// Assembles the main application router.
///
/// * `/health` and `/api/*` carry the security headers.
/// * `/api/*` is rate limited per client IP when configured.
/// * Everything else falls through to the static frontend, or to an API
///   info page when no build is present.
/// * Trace and CORS wrap the whole router.
///
/// Serve it with `into_make_service_with_connect_info::<SocketAddr>()` so
/// the rate limiter can fall back to the peer address.
pub fn create_router(state: AppState) -> Router {
    let config = &state.config;

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut api_routes = Router::new()
        .route("/preview", post(preview::preview_html))
        .route("/render", post(preview::render_html))
        .route("/transpile", post(transpile::transpile))
        .route("/dictionary", get(dictionary::get_dictionary));

    if config.rate_limit_per_minute > 0 {
        let per_minute = config.rate_limit_per_minute;
        let governor_conf = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond((60_000 / u64::from(per_minute)).max(1))
            .burst_size(per_minute)
            .finish();

        match governor_conf {
            Some(governor_conf) => {
                api_routes = api_routes.layer(GovernorLayer::new(Arc::new(governor_conf)));
            }
            None => tracing::warn!("Invalid rate limit {}/min, limiter disabled", per_minute),
        }
    }

    let router = Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(security_headers));

    let router = if config.static_dir.is_dir() {
        let index = config.static_dir.join("index.html");
        router.fallback_service(ServeDir::new(&config.static_dir).fallback(ServeFile::new(index)))
    } else {
        router.fallback(health::api_info)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
