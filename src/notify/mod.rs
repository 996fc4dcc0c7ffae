pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::lead::form::CleanLead;
use crate::state::SharedState;

/// A rendered, localized lead notification ready for delivery.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub html: String,
}

/// SMTP mailer for lead notifications, built once at startup when the
/// SMTP environment group is present.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP transport error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    pub async fn send(&self, notification: &Notification) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(&notification.subject)
            .header(ContentType::TEXT_HTML)
            .body(notification.html.clone())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

/// Deliver a notification, or log it when no transport is configured.
/// Exactly one send attempt; a transport failure is logged and swallowed
/// so the lead is still acknowledged.
pub async fn dispatch(state: &SharedState, lead: &CleanLead, notification: &Notification) {
    match &state.mailer {
        None => {
            tracing::info!(
                name = %lead.full_name(),
                phone = %lead.phone,
                email = lead.email.as_deref().unwrap_or("-"),
                address = %lead.address,
                bill = lead.bill.as_deref().unwrap_or("-"),
                locale = lead.locale.as_str(),
                subject = %notification.subject,
                "mail transport not configured, lead logged instead"
            );
        }
        Some(mailer) => {
            if let Err(e) = mailer.send(notification).await {
                tracing::error!("Failed to send lead notification: {e}");
            }
        }
    }
}
