pub mod config;
pub mod envelope;
pub mod error;
pub mod locations;

mod api_client;
#[cfg(test)]
mod tests;

pub use api_client::{CityMutation, LocationsClient};

pub const API_HOSTNAME: &str = "probafeladat-api.zengo.eu";
pub const API_BASE_URL: &str = const_format::concatcp!("https://", API_HOSTNAME);
