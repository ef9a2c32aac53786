//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay is called straight from browser widgets on other origins, so
//! every response, errors and fallbacks included, carries the same
//! permissive CORS headers. They are stamped by response-header layers
//! rather than `CorsLayer`, which only answers preflights that carry an
//! `Origin` header.

pub mod relay;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Relay routes with CORS headers and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            post(relay::relay)
                .options(relay::preflight)
                .fallback(relay::post_only),
        )
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
