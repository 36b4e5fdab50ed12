//! Authenticator
//!
//! Resolves a validated submission against the credential store.

use super::credentials::CredentialStore;
use crate::error::AuthError;
use crate::session::{RejectReason, SessionState};
use log::{debug, info};
use std::sync::Arc;

/// Checks submissions against an injected [`CredentialStore`] and exposes
/// administrative add/remove operations on it.
pub struct Authenticator {
    store: Arc<CredentialStore>,
}

impl Authenticator {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Verifies an identity/secret pair.
    ///
    /// Unknown identity and wrong secret are indistinguishable to the caller.
    pub async fn verify(&self, identity: &str, secret: &str) -> Result<(), AuthError> {
        if self.store.matches(identity, secret).await {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Authenticates a submission and returns the resulting terminal state.
    pub async fn authenticate(&self, identity: &str, secret: &str) -> SessionState {
        match self.verify(identity, secret).await {
            Ok(()) => {
                info!("User {} authenticated", identity);
                SessionState::Authenticated(identity.to_string())
            }
            Err(e) => {
                debug!("Authentication failed for {}", identity);
                SessionState::Rejected(RejectReason::from(e))
            }
        }
    }

    /// Adds or replaces a user. Returns `false` if either field is empty.
    pub async fn add_user(&self, identity: &str, secret: &str) -> bool {
        self.store.insert(identity, secret).await
    }

    /// Removes a user. Returns `false` if the identity was unknown.
    pub async fn remove_user(&self, identity: &str) -> bool {
        self.store.remove(identity).await
    }
}
