//! Shared building blocks for the locations client.
//!
//! This crate contains small, dependency-light pieces that every other
//! layer leans on: error location tracking, HTTP status classification
//! and the redacted API token wrapper. Nothing in here talks to the
//! network or holds state.
//!
//! ## Architecture
//!
//! - **common** (this crate): leaf utilities with no domain knowledge
//! - **locations-client**: the typed API client built on top of them
//!
//! Keeping these out of the client crate means error plumbing can be
//! tested without pulling in an HTTP stack.

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
