//! Routes, session state and the transitions between them.

use crate::error::AppError;
use crate::screens::{RegisterScreen, Screen, SuccessScreen, VerifyOtpScreen};
use employee_client::EmployeeRecord;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    VerifyOtp,
    Success,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/",
            Route::VerifyOtp => "/verify-otp",
            Route::Success => "/success",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "/" => Ok(Route::Register),
            "/verify-otp" => Ok(Route::VerifyOtp),
            "/success" => Ok(Route::Success),
            other => Err(AppError::UnknownRoute(other.to_string())),
        }
    }
}

/// In-app transition. The payload is handed to the next screen exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    VerifyOtp { email: String },
    Success(EmployeeRecord),
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::VerifyOtp { .. } => Route::VerifyOtp,
            Navigation::Success(_) => Route::Success,
        }
    }
}

/// The active screen together with the state it was opened with.
#[derive(Debug)]
pub enum Session {
    Registration(RegisterScreen),
    VerifyOtp(VerifyOtpScreen),
    Success(SuccessScreen),
}

impl Session {
    pub fn screen(&self) -> &dyn Screen {
        match self {
            Session::Registration(screen) => screen,
            Session::VerifyOtp(screen) => screen,
            Session::Success(screen) => screen,
        }
    }

    pub fn route(&self) -> Route {
        self.screen().route()
    }
}

impl From<Navigation> for Session {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::VerifyOtp { email } => Session::VerifyOtp(VerifyOtpScreen::new(email)),
            Navigation::Success(employee) => Session::Success(SuccessScreen::new(Some(employee))),
        }
    }
}

/// Owns the session and moves it from screen to screen.
#[derive(Debug)]
pub struct Navigator {
    session: Session,
    history: Vec<Route>,
}

impl Navigator {
    /// Open `route` without any navigation state, as when the address is
    /// entered directly.
    ///
    /// With `guard_direct_entry`, screens that depend on navigation state
    /// redirect to registration instead of opening blank.
    pub fn open(route: Route, guard_direct_entry: bool) -> Self {
        let session = match route {
            Route::Register => Session::Registration(RegisterScreen::new()),
            _ if guard_direct_entry => {
                warn!(route = %route, "Direct entry without navigation state, redirecting to {}", Route::Register);
                Session::Registration(RegisterScreen::new())
            }
            Route::VerifyOtp => Session::VerifyOtp(VerifyOtpScreen::new("")),
            Route::Success => Session::Success(SuccessScreen::new(None)),
        };

        Self {
            history: vec![session.route()],
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn route(&self) -> Route {
        self.session.route()
    }

    /// Routes visited so far, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        let from = self.route();
        self.session = Session::from(navigation);
        self.history.push(self.session.route());
        info!(from = %from, to = %self.route(), "Navigated");
    }
}
