use serde::Deserialize;

use crate::i18n::Locale;

/// Raw contact-form submission as it arrives on the wire. Every field
/// defaults to empty so the required-field check can report missing keys
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bill: String,
    pub additional: String,
    pub submitted_at: String,
    pub language: String,
    pub source: String,
    // Honeypot fields, invisible on the rendered form. Humans leave them
    // empty; bots fill them in.
    pub website: String,
    pub url: String,
}

impl ContactForm {
    /// Locale the notification should be rendered in. The body `language`
    /// field wins; the caller passes the path locale as fallback.
    pub fn notification_locale(&self, path_locale: Locale) -> Locale {
        if self.language.trim().is_empty() {
            path_locale
        } else {
            Locale::parse(&self.language)
        }
    }
}

/// A submission that has passed validation and sanitization. Optional
/// fields are `None` once empty after cleanup.
#[derive(Debug, Clone)]
pub struct CleanLead {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub bill: Option<String>,
    pub additional: Option<String>,
    pub submitted_at: Option<String>,
    pub source: Option<String>,
    pub locale: Locale,
}

impl CleanLead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
