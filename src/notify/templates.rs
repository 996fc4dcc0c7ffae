use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::i18n;
use crate::lead::form::CleanLead;

use super::Notification;

fn ist_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&i18n::ist())
        .format("%d %b %Y, %H:%M IST")
        .to_string()
}

/// Render the staff notification for an accepted lead in the lead's
/// locale. Missing optional fields get placeholder text; rendering never
/// fails.
pub fn render(lead: &CleanLead, submission_id: Uuid) -> Notification {
    let labels = i18n::notification_labels(lead.locale);
    let generated_at = ist_timestamp(Utc::now());

    let bill = lead.bill.as_deref().unwrap_or(labels.no_bill);
    let email = lead.email.as_deref().unwrap_or(labels.not_provided);
    let additional = lead.additional.as_deref().unwrap_or(labels.none);
    let source = lead.source.as_deref().unwrap_or(labels.not_provided);

    // Client timestamps arrive as ISO 8601; render them in IST like every
    // other timestamp. Unparseable values are shown as-is.
    let submitted_at = match lead.submitted_at.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| ist_timestamp(dt.with_timezone(&Utc)))
            .unwrap_or_else(|_| raw.to_string()),
        None => generated_at.clone(),
    };

    let subject = labels
        .subject
        .replace("{name}", &lead.full_name())
        .replace("{bill}", bill);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: #d97706; color: white; padding: 12px 16px; border-radius: 4px; font-weight: bold;">
        {urgency}
    </div>

    <h2 style="margin-top: 24px;">{customer_info}</h2>
    <table style="width: 100%; border-collapse: collapse;">
        <tr><td style="padding: 4px 8px; color: #666;">{name_label}</td><td style="padding: 4px 8px;">{name}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{phone_label}</td><td style="padding: 4px 8px;">{phone}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{email_label}</td><td style="padding: 4px 8px;">{email}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{address_label}</td><td style="padding: 4px 8px;">{address}</td></tr>
    </table>

    <h2>{project_details}</h2>
    <table style="width: 100%; border-collapse: collapse;">
        <tr><td style="padding: 4px 8px; color: #666;">{bill_label}</td><td style="padding: 4px 8px;">{bill}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{additional_label}</td><td style="padding: 4px 8px;">{additional}</td></tr>
    </table>

    <h2>{meta_label}</h2>
    <table style="width: 100%; border-collapse: collapse;">
        <tr><td style="padding: 4px 8px; color: #666;">ID</td><td style="padding: 4px 8px;">{submission_id}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{submitted_label}</td><td style="padding: 4px 8px;">{submitted_at}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{source_label}</td><td style="padding: 4px 8px;">{source}</td></tr>
        <tr><td style="padding: 4px 8px; color: #666;">{language_label}</td><td style="padding: 4px 8px;">{language}</td></tr>
    </table>

    <p style="color: #666; font-size: 13px; margin-top: 32px; border-top: 1px solid #ddd; padding-top: 12px;">
        {org_name} &middot; {generated_label}: {generated_at}
    </p>
</body>
</html>"#,
        lang = lead.locale.as_str(),
        urgency = labels.urgency_banner,
        customer_info = labels.customer_info,
        name_label = labels.name,
        name = lead.full_name(),
        phone_label = labels.phone,
        phone = lead.phone,
        email_label = labels.email,
        email = email,
        address_label = labels.address,
        address = lead.address,
        project_details = labels.project_details,
        bill_label = labels.monthly_bill,
        bill = bill,
        additional_label = labels.additional,
        additional = additional,
        meta_label = labels.submission_meta,
        submission_id = submission_id,
        submitted_label = labels.submitted_at,
        submitted_at = submitted_at,
        source_label = labels.source,
        source = source,
        language_label = labels.language,
        language = lead.locale.as_str(),
        org_name = labels.org_name,
        generated_label = labels.generated_at,
        generated_at = generated_at,
    );

    Notification { subject, html }
}
