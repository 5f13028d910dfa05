//! Employee onboarding - interactive registration and OTP verification.
//!
//! The flow has three screens:
//! - Registration: collects name, email and phone number and registers them
//! - OTP: verifies the one-time code sent to the registered email
//! - Success: shows the employee record returned by verification
//!
//! State moves between screens only through [`navigator::Navigation`].

pub mod config;
pub mod console;
pub mod error;
pub mod lifecycle;
pub mod navigator;
pub mod screens;
pub mod shell;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use console::Console;
pub use error::{AppError, AppResult};
pub use navigator::{Navigation, Navigator, Route, Session};
pub use shell::{FlowOutcome, Shell};
