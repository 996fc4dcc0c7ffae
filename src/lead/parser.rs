use std::collections::HashMap;

use serde_json::{Map, Value};

use super::form::ContactForm;

/// Parse a request body into a ContactForm based on Content-Type.
/// The public site posts JSON; form-urlencoded is accepted for plain
/// HTML-form fallbacks.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<ContactForm, String> {
    let ct = content_type.unwrap_or("application/json");

    let mut value = if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else {
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))?
    };

    // JSON clients send null for absent optionals; treat those keys as
    // not supplied.
    if let Value::Object(map) = &mut value {
        map.retain(|_, v| !v.is_null());
    }

    serde_json::from_value(value).map_err(|e| format!("Invalid submission shape: {e}"))
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k, Value::String(v));
    }
    Ok(Value::Object(map))
}
