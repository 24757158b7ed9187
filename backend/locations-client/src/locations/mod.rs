//! Domain records for the two-level location hierarchy.
//!
//! Records are short-lived values created per round trip; there is no
//! identity or caching across calls.

use crate::error::api::ApiError;

use common::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// A top-level administrative region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    pub name: String,
}

/// A city belonging to exactly one state.
///
/// During creation the server has not assigned a city id yet, so callers
/// put the parent state's id into `id` when building the create request.
/// The value is only a real city id once the record has come back from
/// the server; see [`crate::CityMutation::Create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Shared capability of [`State`] and [`City`]: an integer identifier
/// and a display name.
pub trait NamedLocation {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

impl NamedLocation for State {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedLocation for City {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive duplicate check against the sibling cities of a
/// state, applied before submitting a create or rename. Uniqueness is
/// not part of the server contract, so this is the only guard.
pub fn name_taken(cities: &[City], candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    cities.iter().any(|city| city.name.to_lowercase() == candidate)
}

/// A location name must be non-empty for display.
#[track_caller]
pub fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::ValidationError {
            message: "The location name cannot be empty.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
