use std::net::SocketAddr;
use std::path::Path;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;

use solarlead::config::Config;

pub const TEST_WEBHOOK_SECRET: &str = "test-secret";

/// A running test server instance with its own content-cache directory and
/// fresh rate-limit state.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    content_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn content_dir(&self) -> &Path {
        self.content_dir.path()
    }

    /// Submit a contact form as JSON, return (body, status).
    pub async fn submit(&self, locale: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/{locale}/api/contact")))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a contact form as form-urlencoded, return (body, status).
    pub async fn submit_form(&self, locale: &str, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/{locale}/api/contact")))
            .form(data)
            .send()
            .await
            .expect("form submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a path expecting a JSON body, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// A complete, well-formed submission with no email.
pub fn valid_form() -> Value {
    json!({
        "firstName": "Ravi",
        "lastName": "Kumar",
        "phone": "9876543210",
        "address": "123 MG Road",
        "language": "en",
    })
}

/// Spawn the app on an ephemeral port with no SMTP (log-only dispatch),
/// a seeded content directory, and a known webhook secret.
pub async fn spawn_app() -> TestApp {
    let content_dir = tempfile::tempdir().expect("create content dir");
    std::fs::write(
        content_dir.path().join("gallery.json"),
        r#"[{"id": "g1", "title": "Rooftop install, Jaipur"}]"#,
    )
    .expect("seed gallery cache");
    std::fs::write(
        content_dir.path().join("testimonials.json"),
        r#"[{"id": "t1", "author": "Meera", "quote": "Great service"}]"#,
    )
    .expect("seed testimonials cache");

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 65536,
        trusted_proxies: Vec::new(),
        log_level: "warn".to_string(),
        smtp: None,
        webhook_secret: Some(TEST_WEBHOOK_SECRET.to_string()),
        cms_url: None,
        content_dir: content_dir.path().to_path_buf(),
    };

    let state = solarlead::build_state(config);
    let app = solarlead::build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("test server error");
    });

    TestApp {
        addr,
        client: Client::new(),
        content_dir,
    }
}
