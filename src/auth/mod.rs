//! Authentication system
//!
//! Handles credential validation, the credential store, and authentication.

pub mod authenticator;
pub mod credentials;
pub mod results;
pub mod validator;

pub use authenticator::Authenticator;
pub use credentials::{Credential, CredentialStore, DEMO_CREDENTIALS};
pub use results::Valid;
pub use validator::{ValidationRules, validate, validate_with};
