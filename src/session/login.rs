//! Login session
//!
//! Drives one attempt at a time through validation, the injected delay and
//! authentication. This is the surface a presentation layer calls into.

use super::cancel::CancelToken;
use super::delay::AuthDelay;
use super::state::{RejectReason, SessionState};
use crate::auth::{Authenticator, Credential, ValidationRules, validate_with};
use crate::error::handlers::log_rejection;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;

/// A login session bound to a shared [`Authenticator`].
///
/// `submit` takes `&mut self`, so a session cannot process two submissions
/// at once. Observers that need to see `Pending` (to render a waiting
/// indicator) can [`subscribe`](LoginSession::subscribe) to state changes.
pub struct LoginSession<D: AuthDelay> {
    authenticator: Arc<Authenticator>,
    rules: ValidationRules,
    delay: D,
    state: watch::Sender<SessionState>,
}

impl<D: AuthDelay> LoginSession<D> {
    pub fn new(authenticator: Arc<Authenticator>, rules: ValidationRules, delay: D) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            authenticator,
            rules,
            delay,
            state,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn authenticator(&self) -> &Arc<Authenticator> {
        &self.authenticator
    }

    // --------------------
    // Transitions
    // --------------------

    /// Validates and authenticates a submission, running the delay to completion.
    ///
    /// A submission made while the session is not `Idle` is ignored and the
    /// current state is returned unchanged.
    pub async fn submit(&mut self, identity: &str, secret: &str) -> SessionState {
        self.run(identity, secret, None).await
    }

    /// Like [`submit`](LoginSession::submit), but resolves to
    /// `Rejected(Cancelled)` if `token` is cancelled before the delay ends.
    pub async fn submit_with_cancel(
        &mut self,
        identity: &str,
        secret: &str,
        token: &CancelToken,
    ) -> SessionState {
        self.run(identity, secret, Some(token)).await
    }

    /// Submits a credential, consuming it.
    pub async fn submit_credential(&mut self, credential: Credential) -> SessionState {
        self.run(&credential.identity, &credential.secret, None).await
    }

    /// Returns the session to `Idle`. Always succeeds; a no-op when already idle.
    pub fn reset(&mut self) {
        if self.state.borrow().is_idle() {
            return;
        }
        debug!("Session reset to idle");
        self.state.send_replace(SessionState::Idle);
    }

    async fn run(
        &mut self,
        identity: &str,
        secret: &str,
        cancel: Option<&CancelToken>,
    ) -> SessionState {
        let current = self.state();
        if !current.is_idle() {
            warn!("Ignoring submission: session is not idle ({:?})", current);
            return current;
        }

        self.state.send_replace(SessionState::Pending);
        debug!("Session pending for {}", identity);

        if let Err(errors) = validate_with(identity, secret, &self.rules) {
            return self.resolve(SessionState::Rejected(RejectReason::ValidationFailed(errors)));
        }

        let completed = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => false,
                    _ = self.delay.wait() => true,
                }
            }
            None => {
                self.delay.wait().await;
                true
            }
        };

        if !completed {
            return self.resolve(SessionState::Rejected(RejectReason::Cancelled));
        }

        let outcome = self.authenticator.authenticate(identity, secret).await;
        self.resolve(outcome)
    }

    fn resolve(&mut self, outcome: SessionState) -> SessionState {
        match &outcome {
            SessionState::Authenticated(identity) => info!("Login successful for {}", identity),
            SessionState::Rejected(reason) => log_rejection(reason),
            SessionState::Idle | SessionState::Pending => {}
        }
        self.state.send_replace(outcome.clone());
        outcome
    }
}
