pub mod client_ip;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod lead;
pub mod notify;
pub mod rate_limit;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::content::ContentStore;
use crate::notify::Mailer;
use crate::rate_limit::FixedWindowLimiter;
use crate::state::{AppState, SharedState};

// Contact form: 5 submissions per 15 minutes per client.
const CONTACT_LIMIT: u32 = 5;
const CONTACT_WINDOW_SECS: u64 = 15 * 60;

// Read-only content endpoints: 60 requests per minute per client.
const CONTENT_LIMIT: u32 = 60;
const CONTENT_WINDOW_SECS: u64 = 60;

pub fn build_state(config: Config) -> SharedState {
    let mailer = config.smtp.as_ref().and_then(|smtp| match Mailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP configured, lead notifications will be emailed");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!("SMTP not available, falling back to log-only dispatch: {e}");
            None
        }
    });

    if mailer.is_none() {
        tracing::info!("No mail transport, leads will be logged");
    }

    let content = ContentStore::load(&config.content_dir);

    Arc::new(AppState {
        config,
        mailer,
        contact_limiter: FixedWindowLimiter::new(CONTACT_LIMIT, CONTACT_WINDOW_SECS),
        content_limiter: FixedWindowLimiter::new(CONTENT_LIMIT, CONTENT_WINDOW_SECS),
        content,
        http: reqwest::Client::new(),
    })
}

pub fn build_app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Periodically drop rate-limit entries whose window has long expired so
/// the per-IP maps stay bounded.
pub async fn limiter_sweep(state: SharedState) {
    let mut interval = tokio::time::interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        state
            .contact_limiter
            .cleanup(Duration::from_secs(2 * CONTACT_WINDOW_SECS));
        state
            .content_limiter
            .cleanup(Duration::from_secs(2 * CONTENT_WINDOW_SECS));
    }
}

async fn health() -> &'static str {
    "ok"
}
