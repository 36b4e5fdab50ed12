//! Error types
//!
//! Defines the error taxonomy of the login core: detailed shape errors from
//! validation, a single opaque authentication error, and an umbrella error
//! for callers that prefer `Result` over inspecting a `SessionState`.

use std::fmt;

/// Credential shape errors reported by the validator.
///
/// These are recoverable and always reported in full so the caller can
/// surface every problem at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    MissingIdentity,
    IdentityTooShort,
    MissingSecret,
    SecretTooShort,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingIdentity => write!(f, "Identity is required"),
            ValidationError::IdentityTooShort => write!(f, "Identity is too short"),
            ValidationError::MissingSecret => write!(f, "Secret is required"),
            ValidationError::SecretTooShort => write!(f, "Secret is too short"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Authentication errors.
///
/// Unknown identities and wrong secrets both map to `InvalidCredentials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

/// General login core error that encompasses all error types
#[derive(Debug)]
pub enum LoginCoreError {
    Validation(Vec<ValidationError>),
    Auth(AuthError),
    Config(config::ConfigError),
    Cancelled,
    InvalidState(String),
}

impl fmt::Display for LoginCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginCoreError::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Validation failed: {}", joined)
            }
            LoginCoreError::Auth(e) => write!(f, "Authentication error: {}", e),
            LoginCoreError::Config(e) => write!(f, "Configuration error: {}", e),
            LoginCoreError::Cancelled => write!(f, "Authentication cancelled"),
            LoginCoreError::InvalidState(s) => write!(f, "Invalid state: {}", s),
        }
    }
}

impl std::error::Error for LoginCoreError {}

impl From<Vec<ValidationError>> for LoginCoreError {
    fn from(errors: Vec<ValidationError>) -> Self {
        LoginCoreError::Validation(errors)
    }
}

impl From<AuthError> for LoginCoreError {
    fn from(error: AuthError) -> Self {
        LoginCoreError::Auth(error)
    }
}

impl From<config::ConfigError> for LoginCoreError {
    fn from(error: config::ConfigError) -> Self {
        LoginCoreError::Config(error)
    }
}
