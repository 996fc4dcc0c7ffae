use std::net::SocketAddr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::client_ip;
use crate::error::ApiError;
use crate::i18n::{self, Key, Locale};
use crate::lead::{parser, pipeline};
use crate::state::SharedState;

/// POST /{locale}/api/contact
pub async fn submit(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let locale = Locale::parse(&locale);

    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());
    let form = match parser::parse_body(content_type, &body) {
        Ok(form) => form,
        // Malformed bodies surface as a generic internal failure; validation
        // errors are reserved for well-formed submissions.
        Err(e) => return ApiError::Internal(locale, e).into_response(),
    };

    let ip = client_ip::resolve(&headers, addr.ip(), &state.config.trusted_proxies);

    match pipeline::run(&state, locale, ip, form).await {
        Ok(accepted) => (
            StatusCode::OK,
            Json(json!({
                "message": i18n::success_message(locale, &accepted.first_name),
                "success": true,
                "emailConfigured": state.email_configured(),
                "data": {
                    "submissionId": accepted.submission_id,
                    "estimatedResponseTime": "24 hours",
                },
            })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /{locale}/api/contact
pub async fn health(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
) -> Json<serde_json::Value> {
    let locale = Locale::parse(&locale);
    Json(json!({
        "status": "ok",
        "message": i18n::message(Key::Health, locale),
        "emailConfigured": state.email_configured(),
        "timestamp": Utc::now().with_timezone(&i18n::ist()).to_rfc3339(),
        "timezone": "Asia/Kolkata",
    }))
}
