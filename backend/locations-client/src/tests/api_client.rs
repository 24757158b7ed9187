// Unit tests for request construction. The wire bodies are part of the
// observed server contract, so the encodings are asserted byte-exact.

use crate::api_client::{CreateCityBody, DeleteCityBody, UpdateCityBody};
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::{CityMutation, LocationsClient};

use crate::locations::City;

use common::RedactedToken;

/// **VALUE**: Pins the exact create body, including field order.
///
/// **WHY THIS MATTERS**: `state_id` here is the parent state's id, not a
/// city id — the server has not assigned one yet. Renaming or reordering
/// the fields silently breaks city creation.
#[test]
fn given_create_body_when_encoded_then_exact_wire_shape() {
    let body = CreateCityBody {
        name: "X",
        state_id: 7,
    };

    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"name":"X","state_id":7}"#
    );
}

#[test]
fn given_update_body_when_encoded_then_exact_wire_shape() {
    let body = UpdateCityBody {
        name: "X",
        city_id: 3,
    };

    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"name":"X","city_id":3}"#
    );
}

#[test]
fn given_delete_body_when_encoded_then_exact_wire_shape() {
    let body = DeleteCityBody { city_id: 3 };

    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"city_id":3}"#);
}

// ============================================
// CLIENT CONSTRUCTION
// ============================================

#[test]
fn given_invalid_base_url_when_client_built_then_invalid_url_error() {
    let result = LocationsClient::new("not a url", RedactedToken::new("t".to_string()));

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        crate::error::api::ApiError::InvalidUrl { .. }
    ));
}

#[test]
fn given_config_without_token_when_client_built_then_config_error() {
    let config = ClientConfig::default();

    let result = LocationsClient::from_config(&config);

    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn given_complete_config_when_client_built_then_ok() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9000".to_string(),
        token: "test-token".to_string(),
    };

    assert!(LocationsClient::from_config(&config).is_ok());
}

// ============================================
// MUTATION PRE-VALIDATION
// ============================================

/// Create and update refuse an empty display name before anything goes on
/// the wire; the future resolves without any I/O.
#[tokio::test]
async fn given_blank_city_name_when_mutation_performed_then_validation_error() {
    let client =
        LocationsClient::new("http://127.0.0.1:9000", RedactedToken::new("t".to_string()))
            .unwrap();
    let mutation = CityMutation::Create(City {
        id: 7,
        name: "  ".to_string(),
    });

    let result = client.perform_city_mutation(&mutation).await;

    assert!(matches!(
        result,
        Err(crate::error::api::ApiError::ValidationError { .. })
    ));
}

#[tokio::test]
async fn given_blank_rename_when_mutation_performed_then_validation_error() {
    let client =
        LocationsClient::new("http://127.0.0.1:9000", RedactedToken::new("t".to_string()))
            .unwrap();
    let mutation = CityMutation::Update(City {
        id: 3,
        name: String::new(),
    });

    let result = client.perform_city_mutation(&mutation).await;

    assert!(matches!(
        result,
        Err(crate::error::api::ApiError::ValidationError { .. })
    ));
}
