//! Login engine
//!
//! Wires configuration, the credential store, the authenticator and new
//! sessions together. One `LoginCore` owns one store; every session it hands
//! out shares that store.

use crate::auth::{Authenticator, CredentialStore, ValidationRules};
use crate::config::CoreConfig;
use crate::error::LoginCoreError;
use crate::error::handlers::handle_error;
use crate::session::{AuthDelay, LoginSession, SimulatedDelay};
use log::info;
use std::sync::Arc;

pub struct LoginCore {
    config: CoreConfig,
    authenticator: Arc<Authenticator>,
}

impl LoginCore {
    /// Builds a core from ./config.toml and the environment.
    pub fn load() -> Result<Self, LoginCoreError> {
        let config = CoreConfig::load().map_err(|e| {
            let err = LoginCoreError::from(e);
            handle_error(&err);
            err
        })?;
        Ok(Self::new(config))
    }

    pub fn new(config: CoreConfig) -> Self {
        let store = CredentialStore::with_seed(config.seed_users.clone());
        info!(
            "Login core ready (identity >= {}, secret >= {}, delay {} ms)",
            config.min_identity_length, config.min_secret_length, config.auth_delay_ms
        );

        Self {
            authenticator: Arc::new(Authenticator::new(Arc::new(store))),
            config,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn rules(&self) -> ValidationRules {
        self.config.validation_rules()
    }

    pub fn authenticator(&self) -> Arc<Authenticator> {
        Arc::clone(&self.authenticator)
    }

    /// A new idle session using the configured delay.
    pub fn session(&self) -> LoginSession<SimulatedDelay> {
        self.session_with_delay(SimulatedDelay::new(self.config.auth_delay()))
    }

    /// A new idle session using `delay` instead of the configured one.
    pub fn session_with_delay<D: AuthDelay>(&self, delay: D) -> LoginSession<D> {
        LoginSession::new(self.authenticator(), self.rules(), delay)
    }

    /// Administrative: adds or replaces a user.
    pub async fn add_user(&self, identity: &str, secret: &str) -> bool {
        self.authenticator.add_user(identity, secret).await
    }

    /// Administrative: removes a user.
    pub async fn remove_user(&self, identity: &str) -> bool {
        self.authenticator.remove_user(identity).await
    }
}

impl Default for LoginCore {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}
