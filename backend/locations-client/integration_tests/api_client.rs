use crate::helpers::{TEST_TOKEN, client_for};

use locations_client::CityMutation;
use locations_client::error::api::ApiError;
use locations_client::locations::{City, State};

use common::RedactedToken;
use locations_client::LocationsClient;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================
// LIST STATES
// ============================================

/// **VALUE**: Full happy path for the states listing: GET with the token
/// and content-type headers, envelope decoded, payload returned.
#[tokio::test]
async fn given_states_endpoint_when_listed_then_envelope_payload_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .and(header("token", TEST_TOKEN))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"id": 1, "name": "Baranya"},
                {"id": 2, "name": "Somogy"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client_for(&server).list_states().await.unwrap();

    assert!(envelope.success);
    assert_eq!(
        envelope.data,
        Some(vec![
            State {
                id: 1,
                name: "Baranya".to_string()
            },
            State {
                id: 2,
                name: "Somogy".to_string()
            },
        ])
    );
}

#[tokio::test]
async fn given_string_sentinel_payload_when_listed_then_data_absent_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": "Theres no data."
        })))
        .mount(&server)
        .await;

    let envelope = client_for(&server).list_states().await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data, None);
}

// ============================================
// LIST CITIES
// ============================================

#[tokio::test]
async fn given_cities_endpoint_when_listed_then_posts_state_id_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/state_city"))
        .and(header("token", TEST_TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"state_id": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 21, "name": "Zalaegerszeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client_for(&server).list_cities_for_state(5).await.unwrap();

    assert_eq!(
        envelope.data,
        Some(vec![City {
            id: 21,
            name: "Zalaegerszeg".to_string()
        }])
    );
}

// ============================================
// CITY MUTATIONS
// ============================================

/// Creation sends the parent state's id as `state_id`; the returned
/// record carries the server-assigned city id.
#[tokio::test]
async fn given_create_mutation_when_performed_then_put_with_state_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/city"))
        .and(header("token", TEST_TOKEN))
        .and(body_json(json!({"name": "Pécs", "state_id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"id": 101, "name": "Pécs"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mutation = CityMutation::Create(City {
        id: 7, // parent state id until the server assigns a real one
        name: "Pécs".to_string(),
    });
    let envelope = client_for(&server)
        .perform_city_mutation(&mutation)
        .await
        .unwrap();

    assert_eq!(
        envelope.data,
        Some(City {
            id: 101,
            name: "Pécs".to_string()
        })
    );
}

#[tokio::test]
async fn given_update_mutation_when_performed_then_patch_with_city_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/city"))
        .and(body_json(json!({"name": "Mohács", "city_id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"id": 3, "name": "Mohács"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mutation = CityMutation::Update(City {
        id: 3,
        name: "Mohács".to_string(),
    });
    let envelope = client_for(&server)
        .perform_city_mutation(&mutation)
        .await
        .unwrap();

    assert_eq!(envelope.data.unwrap().name, "Mohács");
}

#[tokio::test]
async fn given_delete_mutation_when_performed_then_delete_with_city_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/city"))
        .and(body_json(json!({"city_id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": "Theres no data."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mutation = CityMutation::Delete(3);
    let envelope = client_for(&server)
        .perform_city_mutation(&mutation)
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data, None);
}

// ============================================
// CLASSIFICATION PRECEDENCE
// ============================================

/// **VALUE**: A non-200 status is always NetworkError, even with a decodable
/// envelope in the body — status outranks body content.
#[tokio::test]
async fn given_non_200_status_when_listed_then_network_error_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::NetworkError { .. }));
}

#[tokio::test]
async fn given_empty_body_with_200_when_listed_then_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server).list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::MissingData { .. }));
    assert_eq!(err.message(), "The server returned an empty response.");
}

#[tokio::test]
async fn given_malformed_body_with_200_when_listed_then_wrong_data_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::WrongDataFormat { .. }));
    assert_eq!(
        err.message(),
        "The server returned data in an unexpected format."
    );
}

#[tokio::test]
async fn given_server_failure_with_single_message_when_listed_then_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorCode": 401,
            "errorMessage": "Wrong token."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedError { .. }));
    assert_eq!(err.message(), "Wrong token.");
}

/// The per-field validation map unwraps to the first message of the first
/// field.
#[tokio::test]
async fn given_server_failure_with_field_map_when_mutated_then_first_field_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorMessage": {
                "name": ["The name field is required."],
                "state_id": ["The state id field is required."]
            }
        })))
        .mount(&server)
        .await;

    let mutation = CityMutation::Create(City {
        id: 7,
        name: "Pécs".to_string(),
    });
    let err = client_for(&server)
        .perform_city_mutation(&mutation)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedError { .. }));
    assert_eq!(err.message(), "The name field is required.");
}

#[tokio::test]
async fn given_server_failure_without_message_when_listed_then_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all_states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let err = client_for(&server).list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedError { .. }));
    assert_eq!(
        err.message(),
        "An unexpected error occurred. Please try again later."
    );
}

/// Transport failure (nothing listening) outranks everything else.
#[tokio::test]
async fn given_unreachable_server_when_listed_then_network_error() {
    // Reserve a port, then drop the server so nothing is listening.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = LocationsClient::new(&uri, RedactedToken::new(TEST_TOKEN.to_string())).unwrap();
    let err = client.list_states().await.unwrap_err();

    assert!(matches!(err, ApiError::NetworkError { .. }));
}
