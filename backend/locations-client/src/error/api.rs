//! The closed set of failure kinds surfaced by the API client.
//!
//! Every operation resolves to exactly one of these. The front-end shows
//! `message()` verbatim in a dismissible notice, so the strings are
//! user-facing, not developer-facing; the location suffix only shows up
//! in logs via `Display`.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    /// HTTP 200 with an empty body.
    #[error("Missing Data Error: {message} {location}")]
    MissingData {
        message: String,
        location: ErrorLocation,
    },

    /// Transport failure or a non-200 status.
    #[error("Network Error: {message} {location}")]
    NetworkError {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL Error: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected before submission, e.g. an empty city name.
    #[error("Validation Error: {message} {location}")]
    ValidationError {
        message: String,
        location: ErrorLocation,
    },

    /// The body was not a decodable response envelope.
    #[error("Wrong Data Format Error: {message} {location}")]
    WrongDataFormat {
        message: String,
        location: ErrorLocation,
    },

    /// The envelope decoded but the server reported `success: false`.
    #[error("Unexpected Error: {message} {location}")]
    UnexpectedError {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// The human-readable payload, without the classification prefix or
    /// source location.
    pub fn message(&self) -> &str {
        match self {
            ApiError::MissingData { message, .. }
            | ApiError::NetworkError { message, .. }
            | ApiError::InvalidUrl { message, .. }
            | ApiError::ValidationError { message, .. }
            | ApiError::WrongDataFormat { message, .. }
            | ApiError::UnexpectedError { message, .. } => message,
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::InvalidUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiError::NetworkError {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
