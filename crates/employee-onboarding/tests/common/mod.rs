//! Common test utilities for integration tests.

use employee_client::{EmployeeClient, QueryEncoding};
use employee_onboarding::{Console, Navigator, Route, Shell};
use std::sync::Arc;
use wiremock::MockServer;

pub const PREFIX: &str = "/employee-management";

/// Start a mock employee-management server.
pub async fn mock_employee_server() -> MockServer {
    MockServer::start().await
}

/// Create a client configured for a mock server.
pub fn test_employee_client(mock_server: &MockServer, encoding: QueryEncoding) -> EmployeeClient {
    EmployeeClient::new(format!("{}{}", mock_server.uri(), PREFIX), None)
        .unwrap()
        .with_query_encoding(encoding)
}

/// Shell wired to a mock server, reading the given scripted input.
pub fn test_shell(
    mock_server: &MockServer,
    input: &'static str,
    start: Route,
) -> Shell<&'static [u8], Vec<u8>> {
    Shell::new(
        Arc::new(test_employee_client(mock_server, QueryEncoding::Encoded)),
        Console::new(input.as_bytes(), Vec::new()),
        Navigator::open(start, false),
    )
}

/// Everything the shell printed.
pub fn output(shell: Shell<&'static [u8], Vec<u8>>) -> String {
    String::from_utf8(shell.into_console().into_parts().1).unwrap()
}
