//! Per-screen request lifecycle.
//!
//! Each screen owns one [`RequestTracker`]. While a request is in flight the
//! screen refuses to start another one, which is the terminal equivalent of a
//! disabled submit button.

use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

/// Publishes a screen's [`RequestState`] to any number of observers.
#[derive(Debug)]
pub struct RequestTracker {
    tx: watch::Sender<RequestState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(RequestState::Idle);
        Self { tx }
    }

    pub fn state(&self) -> RequestState {
        self.tx.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.tx.borrow().is_in_flight()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.tx.subscribe()
    }

    /// Mark a request as started.
    ///
    /// Returns `None` if one is already in flight. The returned guard resets
    /// the state to `Idle` if it is dropped without being resolved.
    pub fn begin(&self) -> Option<InFlight<'_>> {
        let started = self.tx.send_if_modified(|state| {
            if state.is_in_flight() {
                false
            } else {
                *state = RequestState::InFlight;
                true
            }
        });

        if !started {
            return None;
        }

        Some(InFlight {
            tx: &self.tx,
            resolved: false,
        })
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running request.
#[must_use = "dropping the guard immediately cancels the in-flight state"]
pub struct InFlight<'a> {
    tx: &'a watch::Sender<RequestState>,
    resolved: bool,
}

impl InFlight<'_> {
    pub fn succeed(mut self) {
        self.resolve(RequestState::Succeeded);
    }

    pub fn fail(mut self, reason: impl Into<String>) {
        self.resolve(RequestState::Failed(reason.into()));
    }

    fn resolve(&mut self, state: RequestState) {
        self.resolved = true;
        self.tx.send_replace(state);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.tx.send_replace(RequestState::Idle);
        }
    }
}
