use std::net::IpAddr;

use uuid::Uuid;

use crate::error::ApiError;
use crate::i18n::Locale;
use crate::notify;
use crate::state::SharedState;

use super::form::{CleanLead, ContactForm};
use super::sanitize::{sanitize, sanitize_opt};
use super::validate;

pub struct LeadAccepted {
    pub submission_id: Uuid,
    pub first_name: String,
}

/// Run one submission through the intake state machine:
/// rate check, honeypot, required fields, format checks, sanitize,
/// notify. Dispatch failure never rejects the lead.
pub async fn run(
    state: &SharedState,
    locale: Locale,
    client_ip: IpAddr,
    form: ContactForm,
) -> Result<LeadAccepted, ApiError> {
    if let Err(retry_after) = state.contact_limiter.check(client_ip) {
        tracing::warn!(%client_ip, retry_after, "contact submission rate limited");
        return Err(ApiError::RateLimited(locale));
    }

    if validate::is_spam(&form) {
        tracing::info!(%client_ip, "honeypot triggered, dropping submission");
        return Err(ApiError::Spam(locale));
    }

    let missing = validate::missing_fields(&form);
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(locale, missing));
    }

    if let Err(field) = validate::check_formats(&form) {
        return Err(ApiError::InvalidField(locale, field));
    }

    let lead = CleanLead {
        first_name: sanitize(&form.first_name),
        last_name: sanitize(&form.last_name),
        email: sanitize_opt(&form.email),
        phone: sanitize(&form.phone),
        address: sanitize(&form.address),
        bill: sanitize_opt(&form.bill),
        additional: sanitize_opt(&form.additional),
        submitted_at: sanitize_opt(&form.submitted_at),
        source: sanitize_opt(&form.source),
        locale: form.notification_locale(locale),
    };

    let submission_id = Uuid::now_v7();
    let notification = notify::templates::render(&lead, submission_id);
    notify::dispatch(state, &lead, &notification).await;

    tracing::info!(%submission_id, %client_ip, "lead accepted");

    Ok(LeadAccepted {
        submission_id,
        first_name: lead.first_name,
    })
}
