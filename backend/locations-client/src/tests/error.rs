use crate::error::api::ApiError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies classified errors format with their kind, message and
/// source location.
///
/// **BUG THIS CATCHES**: Would catch the Display implementation dropping the
/// location suffix, which is what makes production logs traceable.
#[test]
#[track_caller]
fn given_network_error_when_formatted_then_includes_kind_message_and_location() {
    let location = ErrorLocation::from(Location::caller());
    let err = ApiError::NetworkError {
        message: "connection refused".to_string(),
        location,
    };

    let formatted = format!("{}", err);

    assert!(formatted.contains("Network Error"));
    assert!(formatted.contains("connection refused"));
    assert!(formatted.contains("error.rs"));
}

/// `message()` strips the classification prefix: the front-end shows this
/// string verbatim in a dismissible notice.
#[test]
#[track_caller]
fn given_any_variant_when_message_accessed_then_returns_bare_payload() {
    let location = ErrorLocation::from(Location::caller());

    let errors = [
        ApiError::MissingData {
            message: "The server returned an empty response.".to_string(),
            location,
        },
        ApiError::WrongDataFormat {
            message: "The server returned data in an unexpected format.".to_string(),
            location,
        },
        ApiError::UnexpectedError {
            message: "An unexpected error occurred. Please try again later.".to_string(),
            location,
        },
    ];

    for err in &errors {
        assert!(!err.message().is_empty());
        assert!(
            !err.message().contains("Error:"),
            "message() must not include the Display prefix"
        );
        assert!(
            !err.message().contains(".rs"),
            "message() must not include the source location"
        );
    }
}

#[test]
fn given_url_parse_failure_when_converted_then_classified_as_invalid_url() {
    let parse_error = url::Url::parse("not a url").unwrap_err();

    let err = ApiError::from(parse_error);

    assert!(matches!(err, ApiError::InvalidUrl { .. }));
    assert!(format!("{}", err).contains("Invalid URL Error"));
}

/// Different call sites converting the same error kind must record
/// different locations, proving `#[track_caller]` is wired through the
/// `From` impls.
#[test]
fn given_two_conversion_sites_when_converted_then_locations_differ() {
    let first = ApiError::from(url::Url::parse("::").unwrap_err());
    let second = ApiError::from(url::Url::parse("::").unwrap_err());

    let (ApiError::InvalidUrl { location: a, .. }, ApiError::InvalidUrl { location: b, .. }) =
        (&first, &second)
    else {
        panic!("Expected InvalidUrl variants");
    };

    assert_eq!(a.file, b.file);
    assert_ne!(a.line, b.line);
}
