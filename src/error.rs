use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::i18n::{self, Key, Locale};

/// Which format rule a submission field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Phone,
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Name => "INVALID_NAME",
            FieldError::Email => "INVALID_EMAIL",
            FieldError::Phone => "INVALID_PHONE",
        }
    }

    fn message_key(&self) -> Key {
        match self {
            FieldError::Name => Key::InvalidName,
            FieldError::Email => Key::InvalidEmail,
            FieldError::Phone => Key::InvalidPhone,
        }
    }
}

/// Terminal rejection outcomes of the lead pipeline plus the catch-all
/// internal error. Each variant carries the request locale so the wire
/// message can be localized.
#[derive(Debug)]
pub enum ApiError {
    RateLimited(Locale),
    Spam(Locale),
    MissingFields(Locale, Vec<&'static str>),
    InvalidField(Locale, FieldError),
    Internal(Locale, String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RateLimited(_) => write!(f, "Rate limit exceeded"),
            ApiError::Spam(_) => write!(f, "Spam detected"),
            ApiError::MissingFields(_, fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            ApiError::InvalidField(_, field) => write!(f, "Invalid field: {}", field.code()),
            ApiError::Internal(_, msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::RateLimited(locale) => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({
                    "message": i18n::message(Key::RateLimited, *locale),
                    "error": "RATE_LIMIT_EXCEEDED",
                }),
            ),
            ApiError::Spam(locale) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": i18n::message(Key::Spam, *locale),
                    "error": "SPAM_DETECTED",
                }),
            ),
            ApiError::MissingFields(locale, fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": i18n::message(Key::MissingFields, *locale),
                    "error": "VALIDATION_ERROR",
                    "missingFields": fields,
                }),
            ),
            ApiError::InvalidField(locale, field) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": i18n::message(field.message_key(), *locale),
                    "error": field.code(),
                }),
            ),
            ApiError::Internal(locale, msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": i18n::message(Key::Internal, *locale),
                        "error": "INTERNAL_SERVER_ERROR",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
