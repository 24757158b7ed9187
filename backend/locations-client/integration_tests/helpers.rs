//! Test helpers shared by the API client integration tests.

use locations_client::LocationsClient;

use common::RedactedToken;

use wiremock::MockServer;

/// Token presented by every test client; mocks match on it to prove the
/// header goes out on each request.
pub const TEST_TOKEN: &str = "test-token-12345";

/// Test helper: client pointed at a running mock server.
pub fn client_for(server: &MockServer) -> LocationsClient {
    LocationsClient::new(&server.uri(), RedactedToken::new(TEST_TOKEN.to_string()))
        .expect("mock server URI must parse")
}
