use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::client_ip;
use crate::content::Section;
use crate::error::ApiError;
use crate::i18n::{self, Locale};
use crate::state::SharedState;

/// GET /{locale}/api/content/gallery
pub async fn gallery(
    state: State<SharedState>,
    locale: Path<String>,
    addr: ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    serve_section(state, locale, addr, headers, Section::Gallery).await
}

/// GET /{locale}/api/content/testimonials
pub async fn testimonials(
    state: State<SharedState>,
    locale: Path<String>,
    addr: ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    serve_section(state, locale, addr, headers, Section::Testimonials).await
}

async fn serve_section(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    section: Section,
) -> Response {
    let locale = Locale::parse(&locale);
    let ip = client_ip::resolve(&headers, addr.ip(), &state.config.trusted_proxies);

    if state.content_limiter.check(ip).is_err() {
        return ApiError::RateLimited(locale).into_response();
    }

    Json(state.content.get(section).await).into_response()
}

/// POST /api/revalidate
///
/// CMS-side webhook that refreshes the content caches. Requires the shared
/// secret; 503 when no secret is configured at all.
pub async fn revalidate(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let Some(expected) = state.config.webhook_secret.as_deref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": "Revalidation not configured"})),
        )
            .into_response();
    };

    let provided = headers
        .get("x-webhook-secret")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if provided != expected {
        tracing::warn!("Revalidation webhook rejected: bad secret");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "Invalid webhook secret"})),
        )
            .into_response();
    }

    match state.config.cms_url.as_deref() {
        Some(base_url) => state.content.refresh_from_cms(&state.http, base_url).await,
        None => state.content.refresh_from_disk().await,
    }

    Json(json!({
        "revalidated": true,
        "timestamp": Utc::now().with_timezone(&i18n::ist()).to_rfc3339(),
    }))
    .into_response()
}
