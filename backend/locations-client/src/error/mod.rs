pub mod api;
pub mod config;

use thiserror::Error;

/// Umbrella error for entry points that cross both the config and the
/// API layer, such as [`crate::LocationsClient::from_config`].
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] api::ApiError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
