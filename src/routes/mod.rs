pub mod api;

use std::sync::Arc;

use axum::Router;
use http::{
    HeaderName, HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::handlers::speech::WPM_HEADER;
use crate::state::AppState;

/// Build the complete application: public + API routes with CORS, rate
/// limiting and security headers applied.
///
/// Rate limiting keys on the client IP, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` unless it is disabled.
pub fn create_app(app_state: Arc<AppState>) -> Router {
    let cors_layer = cors_layer(&app_state.config);
    let governor_layer = if app_state.config.is_rate_limit_enabled() {
        let governor_config = GovernorConfigBuilder::default()
            .per_second(u64::from(app_state.config.rate_limit_requests_per_second))
            .burst_size(app_state.config.rate_limit_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish();
        match governor_config {
            Some(config) => Some(GovernorLayer::new(config)),
            None => {
                warn!("Invalid rate limiter settings, rate limiting disabled");
                None
            }
        }
    } else {
        info!("Rate limiting disabled (rate >= 100000/s)");
        None
    };

    // Security headers
    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    let public_routes = Router::new().route(
        "/",
        axum::routing::get(crate::handlers::api::health_check),
    );

    public_routes
        .merge(api::create_api_router())
        .with_state(app_state)
        .layer(cors_layer)
        .layer(tower::util::option_layer(governor_layer))
        .layer(security_headers)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [AUTHORIZATION, CONTENT_TYPE];
    let exposed = [HeaderName::from_static(WPM_HEADER)];

    match config.cors_allowed_origins.as_deref() {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
            .expose_headers(exposed)
            .allow_credentials(false),
        Some(origins) => {
            // Parse comma-separated origins
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(methods)
                .allow_headers(headers)
                .expose_headers(exposed)
                .allow_credentials(true)
        }
        None => {
            info!(
                "CORS not configured, defaulting to same-origin only. \
                 Set CORS_ALLOWED_ORIGINS to enable cross-origin access."
            );
            // No allow_origin = same-origin only (browsers block cross-origin requests)
            CorsLayer::new()
                .allow_methods(methods)
                .allow_headers(headers)
                .allow_credentials(false)
        }
    }
}
