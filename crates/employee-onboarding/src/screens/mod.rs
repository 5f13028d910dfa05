//! Screens of the onboarding flow.

mod register;
mod success;
mod verify_otp;

pub use register::RegisterScreen;
pub use success::SuccessScreen;
pub use verify_otp::VerifyOtpScreen;

use crate::navigator::{Navigation, Route};

pub const FAILED_TO_REGISTER: &str = "Failed to register";
pub const ERROR_REGISTERING: &str = "Error registering";
pub const INVALID_OTP: &str = "Invalid OTP";
pub const ERROR_VERIFYING_OTP: &str = "Error verifying OTP";

/// A routed step of the flow.
pub trait Screen {
    fn route(&self) -> Route;

    fn title(&self) -> &'static str;
}

/// Result of pressing a screen's submit control.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Leave for the next screen.
    Navigate(Navigation),
    /// Stay and show a blocking message.
    Alert(&'static str),
    /// A request is already in flight; the press was ignored.
    Busy,
}
