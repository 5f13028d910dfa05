//! Drives the session from its first screen to the end of the flow.

use crate::console::Console;
use crate::error::AppResult;
use crate::navigator::{Navigator, Route, Session};
use crate::screens::Screen;
use employee_client::{EmployeeApi, EmployeeRecord};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

/// How a run of the flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// The success screen was shown, with whatever record it received.
    Completed(Option<EmployeeRecord>),
    /// Input closed while the given screen was waiting for it.
    Abandoned(Route),
}

pub struct Shell<R, W> {
    api: Arc<dyn EmployeeApi>,
    console: Console<R, W>,
    navigator: Navigator,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(api: Arc<dyn EmployeeApi>, console: Console<R, W>, navigator: Navigator) -> Self {
        Self {
            api,
            console,
            navigator,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub async fn run(&mut self) -> AppResult<FlowOutcome> {
        loop {
            let route = self.navigator.route();
            let title = self.navigator.session().screen().title();
            self.console.heading(title).await?;

            let next = match self.navigator.session_mut() {
                Session::Registration(screen) => {
                    screen.interact(&mut self.console, self.api.as_ref()).await?
                }
                Session::VerifyOtp(screen) => {
                    screen.interact(&mut self.console, self.api.as_ref()).await?
                }
                Session::Success(screen) => {
                    screen.display(&mut self.console).await?;
                    info!("Onboarding complete");
                    return Ok(FlowOutcome::Completed(screen.employee().cloned()));
                }
            };

            match next {
                Some(navigation) => self.navigator.navigate(navigation),
                None => {
                    info!(route = %route, "Input closed");
                    return Ok(FlowOutcome::Abandoned(route));
                }
            }
        }
    }
}
