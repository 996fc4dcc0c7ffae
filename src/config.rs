use std::net::IpAddr;
use std::path::PathBuf;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
    /// Absent SMTP group means log-only dispatch.
    pub smtp: Option<SmtpConfig>,
    /// Shared secret for the content-revalidation webhook.
    pub webhook_secret: Option<String>,
    /// Headless CMS base URL; when unset, revalidation re-reads disk caches.
    pub cms_url: Option<String>,
    /// Directory holding the gallery/testimonials JSON caches.
    pub content_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    /// Recipient for lead notifications.
    pub to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("SOLARLEAD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SOLARLEAD_HOST: {e}"))?;

        let port: u16 = env_or("SOLARLEAD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SOLARLEAD_PORT: {e}"))?;

        let max_body_size: usize = env_or("SOLARLEAD_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SOLARLEAD_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("SOLARLEAD_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid SOLARLEAD_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("SOLARLEAD_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("SOLARLEAD_SMTP_HOST").ok(),
            std::env::var("SOLARLEAD_SMTP_PORT").ok(),
            std::env::var("SOLARLEAD_SMTP_USER").ok(),
            std::env::var("SOLARLEAD_SMTP_PASS").ok(),
            std::env::var("SOLARLEAD_SMTP_FROM").ok(),
            std::env::var("SOLARLEAD_NOTIFY_TO").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from), Some(to)) => {
                Some(SmtpConfig {
                    host,
                    port: port
                        .parse()
                        .map_err(|e| format!("Invalid SOLARLEAD_SMTP_PORT: {e}"))?,
                    user,
                    pass,
                    from,
                    to,
                })
            }
            _ => None,
        };

        let webhook_secret = std::env::var("SOLARLEAD_WEBHOOK_SECRET").ok();
        let cms_url = std::env::var("SOLARLEAD_CMS_URL").ok();
        let content_dir = PathBuf::from(env_or("SOLARLEAD_CONTENT_DIR", "content"));

        Ok(Config {
            host,
            port,
            max_body_size,
            trusted_proxies,
            log_level,
            smtp,
            webhook_secret,
            cms_url,
            content_dir,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
