//! The two calls the onboarding flow makes against the service.

use crate::error::EmployeeError;
use crate::types::{EmployeeRecord, OtpInput, RegistrationInput};
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Submit a registration. Succeeds on any 2xx; the body is ignored.
    async fn register(&self, input: &RegistrationInput) -> Result<(), EmployeeError>;

    /// Exchange a one-time code for the verified employee record.
    async fn authenticate_otp(&self, input: &OtpInput) -> Result<EmployeeRecord, EmployeeError>;
}
