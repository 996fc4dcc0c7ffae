use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::notify::Mailer;
use crate::rate_limit::FixedWindowLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub mailer: Option<Arc<Mailer>>,
    pub contact_limiter: FixedWindowLimiter,
    pub content_limiter: FixedWindowLimiter,
    pub content: ContentStore,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn email_configured(&self) -> bool {
        self.mailer.is_some()
    }
}
