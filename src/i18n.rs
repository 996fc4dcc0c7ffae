use serde::{Deserialize, Serialize};

/// Phone number shown in rejection and failure copy so a blocked visitor
/// still has a way to reach the sales team.
pub const FALLBACK_PHONE: &str = "+91 99191 23456";

/// IST offset in seconds (+05:30). All user-facing timestamps use this.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn ist() -> chrono::FixedOffset {
    // +05:30 is always a valid offset.
    chrono::FixedOffset::east_opt(IST_OFFSET_SECS).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    /// Parse a locale path segment or `language` field. Unknown values fall
    /// back to English.
    pub fn parse(s: &str) -> Locale {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" => Locale::Hi,
            _ => Locale::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Key {
    Success,
    RateLimited,
    Spam,
    MissingFields,
    InvalidName,
    InvalidEmail,
    InvalidPhone,
    Internal,
    Health,
}

/// Single lookup table for all user-facing message strings. Templates may
/// contain `{name}` and `{phone}` placeholders.
pub fn localize(key: Key, locale: Locale) -> &'static str {
    use Key::*;
    use Locale::*;
    match (key, locale) {
        (Success, En) => {
            "Thank you {name}! Your enquiry has been received. Our team will contact you within 24 hours."
        }
        (Success, Hi) => {
            "धन्यवाद {name}! आपकी पूछताछ प्राप्त हो गई है। हमारी टीम 24 घंटे के भीतर आपसे संपर्क करेगी।"
        }
        (RateLimited, En) => {
            "Too many requests. Please try again after some time or call us directly at {phone}."
        }
        (RateLimited, Hi) => {
            "बहुत अधिक अनुरोध। कृपया कुछ समय बाद पुनः प्रयास करें या हमें सीधे {phone} पर कॉल करें।"
        }
        (Spam, En) => "Your submission could not be processed. Please call us at {phone}.",
        (Spam, Hi) => "आपका अनुरोध संसाधित नहीं किया जा सका। कृपया हमें {phone} पर कॉल करें।",
        (MissingFields, En) => "Please fill in all required fields.",
        (MissingFields, Hi) => "कृपया सभी आवश्यक फ़ील्ड भरें।",
        (InvalidName, En) => "Please enter a valid name (letters and spaces only).",
        (InvalidName, Hi) => "कृपया एक मान्य नाम दर्ज करें (केवल अक्षर और रिक्त स्थान)।",
        (InvalidEmail, En) => "Please enter a valid email address.",
        (InvalidEmail, Hi) => "कृपया एक मान्य ईमेल पता दर्ज करें।",
        (InvalidPhone, En) => "Please enter a valid 10-digit Indian mobile number.",
        (InvalidPhone, Hi) => "कृपया एक मान्य 10 अंकों का भारतीय मोबाइल नंबर दर्ज करें।",
        (Internal, En) => {
            "Something went wrong on our end. Please try again or call us at {phone}."
        }
        (Internal, Hi) => {
            "हमारी ओर से कुछ गलत हो गया। कृपया पुनः प्रयास करें या हमें {phone} पर कॉल करें।"
        }
        (Health, En) => "Contact API is up",
        (Health, Hi) => "संपर्क एपीआई चालू है",
    }
}

/// Render a message template, filling the `{phone}` placeholder.
pub fn message(key: Key, locale: Locale) -> String {
    localize(key, locale).replace("{phone}", FALLBACK_PHONE)
}

/// Render the success acknowledgement with the customer's first name.
pub fn success_message(locale: Locale, first_name: &str) -> String {
    localize(Key::Success, locale).replace("{name}", first_name)
}

/// Static label set consumed by the notification formatter.
pub struct NotificationLabels {
    pub org_name: &'static str,
    pub subject: &'static str,
    pub no_bill: &'static str,
    pub urgency_banner: &'static str,
    pub customer_info: &'static str,
    pub project_details: &'static str,
    pub submission_meta: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub monthly_bill: &'static str,
    pub additional: &'static str,
    pub submitted_at: &'static str,
    pub source: &'static str,
    pub language: &'static str,
    pub not_provided: &'static str,
    pub none: &'static str,
    pub generated_at: &'static str,
}

static LABELS_EN: NotificationLabels = NotificationLabels {
    org_name: "Suryoday Solar",
    subject: "New Solar Enquiry: {name} ({bill})",
    no_bill: "no bill info",
    urgency_banner: "New lead: respond within 24 hours",
    customer_info: "Customer Information",
    project_details: "Project Details",
    submission_meta: "Submission Details",
    name: "Name",
    email: "Email",
    phone: "Phone",
    address: "Address",
    monthly_bill: "Monthly Electricity Bill",
    additional: "Additional Notes",
    submitted_at: "Submitted At",
    source: "Source",
    language: "Language",
    not_provided: "Not provided",
    none: "None",
    generated_at: "Generated at",
};

static LABELS_HI: NotificationLabels = NotificationLabels {
    org_name: "सूर्योदय सोलर",
    subject: "नई सोलर पूछताछ: {name} ({bill})",
    no_bill: "बिल जानकारी नहीं",
    urgency_banner: "नई लीड: 24 घंटे के भीतर संपर्क करें",
    customer_info: "ग्राहक जानकारी",
    project_details: "प्रोजेक्ट विवरण",
    submission_meta: "सबमिशन विवरण",
    name: "नाम",
    email: "ईमेल",
    phone: "फ़ोन",
    address: "पता",
    monthly_bill: "मासिक बिजली बिल",
    additional: "अतिरिक्त टिप्पणी",
    submitted_at: "सबमिट किया गया",
    source: "स्रोत",
    language: "भाषा",
    not_provided: "उपलब्ध नहीं",
    none: "कोई नहीं",
    generated_at: "जनरेट किया गया",
};

pub fn notification_labels(locale: Locale) -> &'static NotificationLabels {
    match locale {
        Locale::En => &LABELS_EN,
        Locale::Hi => &LABELS_HI,
    }
}
