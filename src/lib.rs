pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod utils;

pub use crate::auth::{Authenticator, Credential, CredentialStore, ValidationRules, validate};
pub use crate::config::CoreConfig;
pub use crate::engine::LoginCore;
pub use crate::error::{AuthError, LoginCoreError, ValidationError};
pub use crate::session::{CancelToken, LoginSession, RejectReason, SessionState};
