// ============================================================================
// ERROR FRAGMENT - Failure reason carried by a non-redirect response body
// ============================================================================
// JSON `{"error": ...}` payloads win; HTML pages fall back to the first
// `.alert-danger` element.
// ============================================================================

use serde_json::Value;
use web_sys::{DomParser, SupportedType};

use crate::utils::ERROR_FRAGMENT_SELECTOR;

const JSON_REASON_KEYS: [&str; 2] = ["error", "message"];

pub fn extract_error_reason(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    json_error_reason(body).or_else(|| html_error_reason(body))
}

/// Reason from a structured payload: `{"error": "..."}`,
/// `{"error": {"message": "..."}}` or `{"message": "..."}`.
pub fn json_error_reason(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let object = value.as_object()?;

    JSON_REASON_KEYS.iter().find_map(|key| match object.get(*key)? {
        Value::String(text) => non_empty(text),
        Value::Object(nested) => nested.get("message")?.as_str().and_then(non_empty),
        _ => None,
    })
}

/// Reason from a rendered page, located by the danger-alert marker class.
pub fn html_error_reason(body: &str) -> Option<String> {
    let parser = DomParser::new().ok()?;
    let document = parser
        .parse_from_string(body, SupportedType::TextHtml)
        .ok()?;
    let element = document.query_selector(ERROR_FRAGMENT_SELECTOR).ok()??;
    non_empty(&element.text_content()?)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
