//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Employee API error: {0}")]
    Client(#[from] employee_client::EmployeeError),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
