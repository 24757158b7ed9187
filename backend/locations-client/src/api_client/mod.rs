use crate::config::ClientConfig;
use crate::envelope::{ApiResponse, ErrorMessage};
use crate::error::CoreError;
use crate::error::api::ApiError;
use crate::error::config::ConfigError;
use crate::locations::{self, City, State};

use common::{ErrorLocation, HttpStatusCode, RedactedToken};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const TOKEN_HEADER_KEY: &str = "token";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const ALL_STATES_ENDPOINT: &str = "api/all_states";
const STATE_CITY_ENDPOINT: &str = "api/state_city";
const CITY_ENDPOINT: &str = "api/city";

// User-facing failure strings, shown verbatim by the front-end.
const NETWORK_FAILURE_MESSAGE: &str =
    "A network error occurred. Please check your internet connection and try again.";
const EMPTY_BODY_MESSAGE: &str = "The server returned an empty response.";
const WRONG_FORMAT_MESSAGE: &str = "The server returned data in an unexpected format.";
const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// A city write. All three variants target the same endpoint; method and
/// body shape are picked per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CityMutation {
    /// Create a city under a state.
    ///
    /// The server has not assigned a city id yet, so `City::id` carries
    /// the parent state's id here and goes out as `state_id` on the
    /// wire. The id on the returned record is the real one.
    Create(City),

    /// Delete a city by its id.
    Delete(i64),

    /// Rename an existing city; `City::id` is the city's own id.
    Update(City),
}

// Wire bodies. Field order is part of the observed wire contract, so
// these stay typed structs rather than serde_json maps (which would
// re-sort the keys).
#[derive(Serialize)]
struct StateCityBody {
    state_id: i64,
}

#[derive(Serialize)]
pub(crate) struct CreateCityBody<'a> {
    pub(crate) name: &'a str,
    pub(crate) state_id: i64,
}

#[derive(Serialize)]
pub(crate) struct DeleteCityBody {
    pub(crate) city_id: i64,
}

#[derive(Serialize)]
pub(crate) struct UpdateCityBody<'a> {
    pub(crate) name: &'a str,
    pub(crate) city_id: i64,
}

/// Typed client for the locations API.
///
/// Holds only immutable configuration; each operation is a single
/// stateless round trip with no retries and no shared mutable state.
/// Construct one value at application start and pass it to every caller
/// that needs it.
#[derive(Debug, Clone)]
pub struct LocationsClient {
    base_url: Url,
    client: Client,
    token: RedactedToken,
}

impl LocationsClient {
    pub fn new(base_url_str: &str, token: RedactedToken) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self {
            base_url,
            client,
            token,
        })
    }

    /// Build a client from loaded configuration, enforcing that a token
    /// is actually present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the config fails validation or the base
    /// URL cannot be parsed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        config.validate()?;

        if config.token.is_empty() {
            return Err(CoreError::Config(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "API token is not set; provide it in config.json or via LOCATIONS_API_TOKEN"
                    .to_string(),
            }));
        }

        let client = Self::new(&config.base_url, RedactedToken::new(config.token.clone()))?;
        Ok(client)
    }

    /// Fetch all top-level states.
    pub async fn list_states(&self) -> Result<ApiResponse<Vec<State>>, ApiError> {
        self.dispatch(Method::GET, ALL_STATES_ENDPOINT, None::<&()>)
            .await
    }

    /// Fetch the cities belonging to one state.
    pub async fn list_cities_for_state(
        &self,
        state_id: i64,
    ) -> Result<ApiResponse<Vec<City>>, ApiError> {
        let body = StateCityBody { state_id };
        self.dispatch(Method::POST, STATE_CITY_ENDPOINT, Some(&body))
            .await
    }

    /// Create, delete or rename a city.
    ///
    /// Create and update validate the display name before anything goes
    /// on the wire; duplicate-name checks are the caller's job via
    /// [`locations::name_taken`] since only the caller holds the sibling
    /// list.
    pub async fn perform_city_mutation(
        &self,
        mutation: &CityMutation,
    ) -> Result<ApiResponse<City>, ApiError> {
        match mutation {
            CityMutation::Create(city) => {
                locations::validate_name(&city.name)?;
                let body = CreateCityBody {
                    name: &city.name,
                    state_id: city.id,
                };
                self.dispatch(Method::PUT, CITY_ENDPOINT, Some(&body)).await
            }
            CityMutation::Delete(city_id) => {
                let body = DeleteCityBody { city_id: *city_id };
                self.dispatch(Method::DELETE, CITY_ENDPOINT, Some(&body))
                    .await
            }
            CityMutation::Update(city) => {
                locations::validate_name(&city.name)?;
                let body = UpdateCityBody {
                    name: &city.name,
                    city_id: city.id,
                };
                self.dispatch(Method::PATCH, CITY_ENDPOINT, Some(&body))
                    .await
            }
        }
    }

    /// One round trip: build, send, classify.
    ///
    /// Classification precedence, highest first: transport error,
    /// non-200 status, empty body, undecodable envelope, server-reported
    /// failure. Exactly one outcome per call.
    async fn dispatch<T, B>(
        &self,
        http_method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.base_url.join(endpoint)?;
        debug!("{} {}", http_method, url);

        let mut request = self
            .client
            .request(http_method, url)
            .header(TOKEN_HEADER_KEY, self.token.as_str());

        // The server expects a Content-Type header on every request,
        // including the bodiless GET.
        request = match body {
            Some(body) => request.json(body),
            None => request.header(CONTENT_TYPE, FORM_CONTENT_TYPE),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} transport failure: {}", endpoint, e);
                return Err(ApiError::from(e));
            }
        };

        let status = response.status().as_u16();
        if status != 200 {
            let status = HttpStatusCode::from(status);
            if status.is_server_error() {
                warn!("{} failed server-side with HTTP {}", endpoint, status);
            } else {
                warn!("{} rejected with HTTP {}", endpoint, status);
            }
            return Err(ApiError::NetworkError {
                message: NETWORK_FAILURE_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            warn!("{} returned an empty body", endpoint);
            return Err(ApiError::MissingData {
                message: EMPTY_BODY_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("{} returned an undecodable body: {}", endpoint, e);
            ApiError::WrongDataFormat {
                message: WRONG_FORMAT_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        if !envelope.success {
            let message = envelope
                .error_message
                .as_ref()
                .and_then(ErrorMessage::first_message)
                .unwrap_or(UNEXPECTED_FAILURE_MESSAGE);
            warn!("{} reported failure: {}", endpoint, message);
            return Err(ApiError::UnexpectedError {
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("{} round trip completed", endpoint);
        Ok(envelope)
    }
}
