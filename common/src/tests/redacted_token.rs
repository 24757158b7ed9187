use crate::RedactedToken;

/// **VALUE**: The token must never leak through Debug or Display.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` slipping back in and
/// printing the raw token into log files.
#[test]
fn given_token_when_debug_or_display_formatted_then_value_is_redacted() {
    let token = RedactedToken::new("8cca895f10303c554c2762fb7179eb89".to_string());

    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    assert!(!debug.contains("8cca895f"), "Debug must not leak the token");
    assert!(!display.contains("8cca895f"), "Display must not leak the token");
    assert!(debug.contains("REDACTED"));
    assert!(display.contains("REDACTED"));
}

#[test]
fn given_token_when_accessed_for_transmission_then_raw_value_available() {
    let token = RedactedToken::new("abc123".to_string());

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
}

#[test]
fn given_empty_token_when_checked_then_reports_empty() {
    let token = RedactedToken::new(String::new());

    assert!(token.is_empty());
    assert_eq!(token.len(), 0);
}

/// Serialization is refused so the token can never end up inside a config
/// file or request body by accident.
#[test]
fn given_token_when_serialized_then_fails_with_redact_error() {
    let token = RedactedToken::new("secret".to_string());

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "RedactedToken must refuse serialization");
}
