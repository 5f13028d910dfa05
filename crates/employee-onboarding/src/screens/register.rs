//! Registration screen - collects name, email and phone number.

use super::{Outcome, Screen, ERROR_REGISTERING, FAILED_TO_REGISTER};
use crate::console::Console;
use crate::error::AppResult;
use crate::lifecycle::RequestTracker;
use crate::navigator::{Navigation, Route};
use employee_client::{EmployeeApi, RegistrationInput};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info, warn};

#[derive(Debug, Default)]
pub struct RegisterScreen {
    form: RegistrationInput,
    request: RequestTracker,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: RegistrationInput) -> Self {
        Self {
            form,
            request: RequestTracker::new(),
        }
    }

    pub fn form(&self) -> &RegistrationInput {
        &self.form
    }

    pub fn request(&self) -> &RequestTracker {
        &self.request
    }

    /// Submit the current form.
    pub async fn submit(&mut self, api: &dyn EmployeeApi) -> Outcome {
        let Some(request) = self.request.begin() else {
            return Outcome::Busy;
        };

        match api.register(&self.form).await {
            Ok(()) => {
                request.succeed();
                info!(email = %self.form.email, "Registration accepted, awaiting OTP");
                Outcome::Navigate(Navigation::VerifyOtp {
                    email: self.form.email.clone(),
                })
            }
            Err(e) if e.is_rejection() => {
                warn!("Registration failed: {}", e);
                request.fail(FAILED_TO_REGISTER);
                Outcome::Alert(FAILED_TO_REGISTER)
            }
            Err(e) => {
                error!("Error registering: {}", e);
                request.fail(ERROR_REGISTERING);
                Outcome::Alert(ERROR_REGISTERING)
            }
        }
    }

    /// Fill in the form and submit until registration succeeds.
    ///
    /// Returns `None` if the input closes first.
    pub async fn interact<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        api: &dyn EmployeeApi,
    ) -> AppResult<Option<Navigation>>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        loop {
            let Some(name) = console.prompt("Full Name", &self.form.name, true).await? else {
                return Ok(None);
            };
            let Some(email) = console.prompt("Email", &self.form.email, true).await? else {
                return Ok(None);
            };
            let Some(phone_number) = console
                .prompt("Phone Number", &self.form.phone_number, true)
                .await?
            else {
                return Ok(None);
            };
            self.form = RegistrationInput::new(name, email, phone_number);

            console.line("Registering...").await?;
            match self.submit(api).await {
                Outcome::Navigate(next) => return Ok(Some(next)),
                Outcome::Alert(message) => console.alert(message).await?,
                Outcome::Busy => {}
            }
        }
    }
}

impl Screen for RegisterScreen {
    fn route(&self) -> Route {
        Route::Register
    }

    fn title(&self) -> &'static str {
        "Employee Registration"
    }
}
