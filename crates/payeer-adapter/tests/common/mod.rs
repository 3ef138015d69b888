/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for payeer-adapter tests

use payeer_adapter::{ClientConfig, Credentials, PayeerClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Canned credentials for testing
pub fn test_credentials() -> Credentials {
    Credentials::new("P1000000", "12345", "test-secret")
}

/// Client wired to a mock server with the canned credentials
pub fn client_for(server: &MockServer) -> PayeerClient {
    PayeerClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}
