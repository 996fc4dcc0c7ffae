use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

use super::form::ContactForm;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{1,50}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Indian mobile: optional +91/91 prefix, optional separator, ten digits
// starting 6-9.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\+?91[\s-]?)?[6-9]\d{9}$").unwrap());

const MAX_EMAIL_LEN: usize = 254;

/// Honeypot check. Any value in the decoy fields marks the whole
/// submission as automated.
pub fn is_spam(form: &ContactForm) -> bool {
    !form.website.trim().is_empty() || !form.url.trim().is_empty()
}

/// Required fields that are empty after trimming, in wire-name form.
pub fn missing_fields(form: &ContactForm) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if form.first_name.trim().is_empty() {
        missing.push("firstName");
    }
    if form.last_name.trim().is_empty() {
        missing.push("lastName");
    }
    if form.phone.trim().is_empty() {
        missing.push("phone");
    }
    if form.address.trim().is_empty() {
        missing.push("address");
    }
    missing
}

/// Format checks in fixed order: name, then email, then phone. The first
/// failing rule is reported.
pub fn check_formats(form: &ContactForm) -> Result<(), FieldError> {
    if !NAME_RE.is_match(form.first_name.trim()) || !NAME_RE.is_match(form.last_name.trim()) {
        return Err(FieldError::Name);
    }

    let email = form.email.trim();
    if !email.is_empty() && (email.chars().count() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(email)) {
        return Err(FieldError::Email);
    }

    if !PHONE_RE.is_match(form.phone.trim()) {
        return Err(FieldError::Phone);
    }

    Ok(())
}
