//! One-shot, memoizing guard for fallible repository initialization.
//!
//! [`InitGuard::run`] executes its action at most once for the lifetime of
//! the guard. Concurrent callers wait on the guard's lock while the action
//! is in flight and then read the stored outcome. A failed action is never
//! retried: every later caller receives the same error.

use std::future::Future;

use tokio::sync::Mutex;

use crate::error::GatewayError;

/// Lifecycle of a guarded initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InitState {
    /// No caller has started the action yet.
    Uninitialized,
    /// The action is running. Only observable under the lock if the
    /// running caller was cancelled before it finished.
    InProgress,
    /// The action finished with this outcome.
    Done(Result<(), GatewayError>),
}

/// Runs a fallible initialization action exactly once and memoizes the
/// outcome for every caller.
#[derive(Debug)]
pub struct InitGuard {
    state: Mutex<InitState>,
}

impl InitGuard {
    /// Creates a guard that has not run yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(InitState::Uninitialized),
        }
    }

    /// Runs `action` if no caller has run it before, otherwise returns the
    /// stored outcome without calling `action`.
    ///
    /// If a previous caller was cancelled while its action was in flight,
    /// the guard records a permanent [`GatewayError::Initialization`]
    /// rather than running the action a second time.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the single execution of the action,
    /// cloned for every caller.
    pub async fn run<F, Fut>(&self, action: F) -> Result<(), GatewayError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), GatewayError>>,
    {
        let mut state = self.state.lock().await;
        match &*state {
            InitState::Done(outcome) => return outcome.clone(),
            InitState::InProgress => {
                let err = GatewayError::Initialization(
                    "previous initialization was abandoned before completing".to_string(),
                );
                tracing::warn!(error = %err, "initialization abandoned");
                *state = InitState::Done(Err(err.clone()));
                return Err(err);
            }
            InitState::Uninitialized => {}
        }

        *state = InitState::InProgress;
        let outcome = action().await;
        *state = InitState::Done(outcome.clone());
        outcome
    }

    /// Returns `true` once the action has completed, successfully or not.
    pub async fn is_done(&self) -> bool {
        matches!(*self.state.lock().await, InitState::Done(_))
    }
}

impl Default for InitGuard {
    fn default() -> Self {
        Self::new()
    }
}
