mod common;

use reqwest::StatusCode;
use serde_json::json;

use common::{TEST_WEBHOOK_SECRET, spawn_app, valid_form};

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn contact_health_reports_configuration() {
    let app = spawn_app().await;

    let (body, status) = app.get_json("/en/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["emailConfigured"], false);
    assert_eq!(body["timezone"], "Asia/Kolkata");
    assert!(body["timestamp"].as_str().unwrap().contains("+05:30"));
    assert_eq!(body["message"], "Contact API is up");
}

#[tokio::test]
async fn contact_health_is_localized() {
    let app = spawn_app().await;

    let (body, status) = app.get_json("/hi/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("एपीआई"));
}

// ── Accepted submissions ────────────────────────────────────────

#[tokio::test]
async fn valid_submission_without_email_is_accepted() {
    let app = spawn_app().await;

    let (body, status) = app.submit("en", &valid_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["emailConfigured"], false);
    assert!(body["message"].as_str().unwrap().contains("Ravi"));
    assert!(!body["data"]["submissionId"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["estimatedResponseTime"], "24 hours");
}

#[tokio::test]
async fn submission_with_optional_fields_is_accepted() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["email"] = json!("ravi@example.in");
    form["bill"] = json!("Rs 4500/month");
    form["additional"] = json!("South-facing roof, 3 floors");
    form["source"] = json!("homepage");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn null_optional_fields_are_accepted() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["email"] = json!(null);
    form["bill"] = json!(null);
    form["additional"] = json!(null);
    form["source"] = json!(null);

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn form_urlencoded_submission_is_accepted() {
    let app = spawn_app().await;

    let (body, status) = app
        .submit_form(
            "en",
            &[
                ("firstName", "Ravi"),
                ("lastName", "Kumar"),
                ("phone", "9876543210"),
                ("address", "123 MG Road"),
            ],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn phone_with_country_code_is_accepted() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["phone"] = json!("+91 9876543210");
    let (_, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::OK);

    let mut form = valid_form();
    form["phone"] = json!("91-9876543210");
    let (_, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::OK);
}

// ── Spam ────────────────────────────────────────────────────────

#[tokio::test]
async fn honeypot_website_field_flags_spam() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["website"] = json!("http://spam.example");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SPAM_DETECTED");
}

#[tokio::test]
async fn honeypot_url_field_flags_spam() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["url"] = json!("x");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SPAM_DETECTED");
}

#[tokio::test]
async fn spam_check_precedes_validation() {
    let app = spawn_app().await;

    // Honeypot filled and required fields missing: spam wins.
    let (body, status) = app.submit("en", &json!({"website": "http://spam.example"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SPAM_DETECTED");
}

// ── Validation ──────────────────────────────────────────────────

#[tokio::test]
async fn empty_first_name_reports_missing_field() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["firstName"] = json!("");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let missing: Vec<&str> = body["missingFields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(missing, vec!["firstName"]);
}

#[tokio::test]
async fn all_missing_fields_are_listed() {
    let app = spawn_app().await;

    let (body, status) = app.submit("en", &json!({"email": "a@b.co"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let missing = body["missingFields"].as_array().unwrap();
    assert_eq!(missing.len(), 4);
}

#[tokio::test]
async fn short_phone_is_rejected() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["phone"] = json!("123");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_PHONE");
}

#[tokio::test]
async fn bad_leading_digit_phone_is_rejected() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["phone"] = json!("1234567890");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_PHONE");
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["email"] = json!("not-an-email");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_EMAIL");
}

#[tokio::test]
async fn name_with_digits_is_rejected() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["firstName"] = json!("R4vi");

    let (body, status) = app.submit("en", &form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_NAME");
}

#[tokio::test]
async fn name_errors_take_priority_over_phone() {
    let app = spawn_app().await;

    let mut form = valid_form();
    form["firstName"] = json!("R4vi");
    form["phone"] = json!("123");

    let (body, _) = app.submit("en", &form).await;
    assert_eq!(body["error"], "INVALID_NAME");
}

// ── Localization ────────────────────────────────────────────────

#[tokio::test]
async fn hindi_locale_yields_hindi_messages() {
    let app = spawn_app().await;

    let (body, status) = app.submit("hi", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("कृपया"));

    let (body, status) = app.submit("hi", &valid_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("धन्यवाद"));
}

#[tokio::test]
async fn unknown_locale_falls_back_to_english() {
    let app = spawn_app().await;

    let (body, status) = app.submit("fr", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please fill in all required fields.");
}

// ── Rate limiting ───────────────────────────────────────────────

#[tokio::test]
async fn sixth_submission_in_window_is_rate_limited() {
    let app = spawn_app().await;

    for _ in 0..5 {
        let (_, status) = app.submit("en", &valid_form()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (body, status) = app.submit("en", &valid_form()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn invalid_submissions_count_toward_the_limit() {
    let app = spawn_app().await;

    // Five malformed-field submissions, each judged on its own validity.
    for _ in 0..5 {
        let (_, status) = app.submit("en", &json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (body, status) = app.submit("en", &valid_form()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");
}

// ── Internal errors ─────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_body_returns_internal_error() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/en/api/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "INTERNAL_SERVER_ERROR");
    // Internals never leak to the caller.
    assert!(!body["message"].as_str().unwrap().contains("json"));
}

// ── Content endpoints ───────────────────────────────────────────

#[tokio::test]
async fn gallery_serves_cached_json() {
    let app = spawn_app().await;

    let (body, status) = app.get_json("/en/api/content/gallery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "g1");
}

#[tokio::test]
async fn testimonials_serve_cached_json() {
    let app = spawn_app().await;

    let (body, status) = app.get_json("/hi/api/content/testimonials").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["author"], "Meera");
}

#[tokio::test]
async fn revalidate_rejects_missing_or_wrong_secret() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/revalidate"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .client
        .post(app.url("/api/revalidate"))
        .header("x-webhook-secret", "wrong")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn revalidate_picks_up_new_disk_cache() {
    let app = spawn_app().await;

    std::fs::write(
        app.content_dir().join("gallery.json"),
        r#"[{"id": "g2", "title": "Ground-mount array"}]"#,
    )
    .unwrap();

    // Served content is still the old cache until revalidation.
    let (body, _) = app.get_json("/en/api/content/gallery").await;
    assert_eq!(body[0]["id"], "g1");

    let resp = app
        .client
        .post(app.url("/api/revalidate"))
        .header("x-webhook-secret", TEST_WEBHOOK_SECRET)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["revalidated"], true);

    let (body, _) = app.get_json("/en/api/content/gallery").await;
    assert_eq!(body[0]["id"], "g2");
}
