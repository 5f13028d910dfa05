//! Employee management REST API client.

mod api;
mod client;
mod error;
mod types;

pub use api::EmployeeApi;
pub use client::{EmployeeClient, DEFAULT_BASE_URL};
pub use error::EmployeeError;
pub use types::*;
