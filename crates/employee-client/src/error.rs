//! Employee API client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmployeeError {
    /// The request never produced a response (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response did not contain an email")]
    MissingEmail,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmployeeError {
    /// Whether the service answered and refused the request, as opposed to
    /// the request failing in transit or the answer being unreadable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, EmployeeError::Api { .. } | EmployeeError::MissingEmail)
    }
}

impl From<reqwest::Error> for EmployeeError {
    fn from(e: reqwest::Error) -> Self {
        EmployeeError::Http(e.to_string())
    }
}
