//! Test doubles for the employee API.

use crate::lifecycle::RequestState;
use async_trait::async_trait;
use employee_client::{EmployeeApi, EmployeeError, EmployeeRecord, OtpInput, RegistrationInput};
use mockall::mock;
use std::sync::Mutex;
use tokio::sync::watch;

mock! {
    pub Api {}

    #[async_trait]
    impl EmployeeApi for Api {
        async fn register(&self, input: &RegistrationInput) -> Result<(), EmployeeError>;
        async fn authenticate_otp(&self, input: &OtpInput) -> Result<EmployeeRecord, EmployeeError>;
    }
}

pub fn http_error() -> EmployeeError {
    EmployeeError::Http("error sending request: connection refused".into())
}

pub fn employee(name: &str, email: &str, phone_number: &str) -> EmployeeRecord {
    EmployeeRecord::from_value(serde_json::json!({
        "name": name,
        "email": email,
        "phoneNumber": phone_number,
    }))
    .unwrap()
}

/// Succeeds every call and records the screen's request state at call time.
pub struct ObservingApi {
    state: watch::Receiver<RequestState>,
    seen: Mutex<Vec<RequestState>>,
}

impl ObservingApi {
    pub fn new(state: watch::Receiver<RequestState>) -> Self {
        Self {
            state,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<RequestState> {
        self.seen.lock().unwrap().clone()
    }

    fn observe(&self) {
        let current = self.state.borrow().clone();
        self.seen.lock().unwrap().push(current);
    }
}

#[async_trait]
impl EmployeeApi for ObservingApi {
    async fn register(&self, _input: &RegistrationInput) -> Result<(), EmployeeError> {
        self.observe();
        Ok(())
    }

    async fn authenticate_otp(&self, input: &OtpInput) -> Result<EmployeeRecord, EmployeeError> {
        self.observe();
        Ok(employee("Observed", &input.email, "0"))
    }
}
