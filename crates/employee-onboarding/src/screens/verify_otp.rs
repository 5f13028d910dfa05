//! OTP screen - exchanges the emailed code for the employee record.

use super::{Outcome, Screen, ERROR_VERIFYING_OTP, INVALID_OTP};
use crate::console::Console;
use crate::error::AppResult;
use crate::lifecycle::RequestTracker;
use crate::navigator::{Navigation, Route};
use employee_client::{EmployeeApi, OtpInput};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info, warn};

#[derive(Debug, Default)]
pub struct VerifyOtpScreen {
    email: String,
    otp: String,
    request: RequestTracker,
}

impl VerifyOtpScreen {
    /// Open the screen for the email carried over from registration.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            otp: String::new(),
            request: RequestTracker::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn set_otp(&mut self, otp: impl Into<String>) {
        self.otp = otp.into();
    }

    pub fn request(&self) -> &RequestTracker {
        &self.request
    }

    /// Verify the entered code.
    pub async fn submit(&mut self, api: &dyn EmployeeApi) -> Outcome {
        let Some(request) = self.request.begin() else {
            return Outcome::Busy;
        };

        let input = OtpInput::new(self.otp.clone(), self.email.clone());
        match api.authenticate_otp(&input).await {
            Ok(employee) => {
                request.succeed();
                info!(email = %employee.email(), "OTP verified");
                Outcome::Navigate(Navigation::Success(employee))
            }
            Err(e) if e.is_rejection() => {
                warn!("OTP rejected: {}", e);
                request.fail(INVALID_OTP);
                Outcome::Alert(INVALID_OTP)
            }
            Err(e) => {
                error!("Error verifying OTP: {}", e);
                request.fail(ERROR_VERIFYING_OTP);
                Outcome::Alert(ERROR_VERIFYING_OTP)
            }
        }
    }

    /// Ask for the code and verify it until it is accepted.
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
            let Some(otp) = console.prompt("Enter OTP", "", false).await? else {
                return Ok(None);
            };
            self.otp = otp;

            console.line("Verifying...").await?;
            match self.submit(api).await {
                Outcome::Navigate(next) => return Ok(Some(next)),
                Outcome::Alert(message) => console.alert(message).await?,
                Outcome::Busy => {}
            }
        }
    }
}

impl Screen for VerifyOtpScreen {
    fn route(&self) -> Route {
        Route::VerifyOtp
    }

    fn title(&self) -> &'static str {
        "Verify OTP"
    }
}
