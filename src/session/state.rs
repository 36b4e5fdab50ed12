//! Session state
//!
//! Defines the per-attempt login state machine:
//! `Idle -> Pending -> {Authenticated | Rejected}`, and back to `Idle` on reset.

use crate::error::{AuthError, LoginCoreError, ValidationError};

/// Why an attempt ended in `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The submission failed shape validation; every violation is listed.
    ValidationFailed(Vec<ValidationError>),
    /// Unknown identity or wrong secret.
    InvalidCredentials,
    /// The attempt was cancelled while pending.
    Cancelled,
}

impl From<AuthError> for RejectReason {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => RejectReason::InvalidCredentials,
        }
    }
}

/// Progress of a single login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Authenticated(String),
    Rejected(RejectReason),
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    /// Returns true for `Authenticated` and `Rejected`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Authenticated(_) | SessionState::Rejected(_))
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Converts a terminal state into a `Result` carrying the identity.
    pub fn into_result(self) -> Result<String, LoginCoreError> {
        match self {
            SessionState::Authenticated(identity) => Ok(identity),
            SessionState::Rejected(RejectReason::ValidationFailed(errors)) => {
                Err(LoginCoreError::Validation(errors))
            }
            SessionState::Rejected(RejectReason::InvalidCredentials) => {
                Err(LoginCoreError::Auth(AuthError::InvalidCredentials))
            }
            SessionState::Rejected(RejectReason::Cancelled) => Err(LoginCoreError::Cancelled),
            SessionState::Idle => Err(LoginCoreError::InvalidState("session is idle".into())),
            SessionState::Pending => {
                Err(LoginCoreError::InvalidState("session is pending".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = SessionState::default();
        assert!(state.is_idle());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(SessionState::Authenticated("admin".into()).is_terminal());
        assert!(SessionState::Rejected(RejectReason::Cancelled).is_terminal());
        assert!(!SessionState::Pending.is_terminal());
    }

    #[test]
    fn test_identity() {
        assert_eq!(
            SessionState::Authenticated("demo".into()).identity(),
            Some("demo")
        );
        assert_eq!(
            SessionState::Rejected(RejectReason::InvalidCredentials).identity(),
            None
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            SessionState::Authenticated("test".into()).into_result().unwrap(),
            "test"
        );
        assert!(matches!(
            SessionState::Rejected(RejectReason::InvalidCredentials).into_result(),
            Err(LoginCoreError::Auth(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            SessionState::Rejected(RejectReason::ValidationFailed(vec![
                ValidationError::MissingSecret
            ]))
            .into_result(),
            Err(LoginCoreError::Validation(errors)) if errors == vec![ValidationError::MissingSecret]
        ));
        assert!(matches!(
            SessionState::Pending.into_result(),
            Err(LoginCoreError::InvalidState(_))
        ));
    }
}
