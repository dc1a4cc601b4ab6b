//! Response-envelope test helpers
//!
//! Every route of the API answers with a `{success, ...}` JSON envelope.
//! These assertions operate on raw response parts so tests don't have to
//! depend on the backend's serializer types.

use actix_web::http::StatusCode;

/// Parse a response body, panicking with the body text on malformed JSON.
pub fn parse_json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "response body is not valid JSON ({e}): {}",
            String::from_utf8_lossy(body)
        )
    })
}

/// Assert a 200 response carrying `success: true`; returns the parsed body
/// for further field checks.
pub fn assert_success_envelope(status: StatusCode, body: &[u8]) -> serde_json::Value {
    assert_eq!(status, StatusCode::OK, "expected 200, got {status}");
    let json = parse_json(body);
    assert_eq!(json["success"], true, "body: {json}");
    json
}

/// Assert an error response: expected status, `success: false`, and an
/// `error` field containing the given fragment. Returns the parsed body so
/// callers can inspect the optional `message` detail.
pub fn assert_error_envelope(
    status: StatusCode,
    body: &[u8],
    expected_status: StatusCode,
    expected_error_contains: &str,
) -> serde_json::Value {
    assert_eq!(status, expected_status, "unexpected status");
    let json = parse_json(body);
    assert_eq!(json["success"], false, "body: {json}");
    let error = json["error"]
        .as_str()
        .unwrap_or_else(|| panic!("missing string `error` field in {json}"));
    assert!(
        error.contains(expected_error_contains),
        "error {error:?} does not contain {expected_error_contains:?}"
    );
    json
}
