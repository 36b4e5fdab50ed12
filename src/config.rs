//! Configuration management for the login core
//!
//! Loads validation limits, the simulated authentication delay and the seed
//! credential set from an optional `config.toml`, with `LOGIN_CORE_*`
//! environment overrides and built-in defaults for anything missing.

use crate::auth::{DEMO_CREDENTIALS, ValidationRules};
use crate::auth::validator::{MIN_IDENTITY_LENGTH, MIN_SECRET_LENGTH};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_AUTH_DELAY_MS: u64 = 2000;

/// Complete login core configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CoreConfig {
    /// Minimum identity length in characters
    /// Environment: LOGIN_CORE_MIN_IDENTITY_LENGTH
    #[serde(default = "default_min_identity_length")]
    pub min_identity_length: usize,

    /// Minimum secret length in characters
    /// Environment: LOGIN_CORE_MIN_SECRET_LENGTH
    #[serde(default = "default_min_secret_length")]
    pub min_secret_length: usize,

    /// Simulated round trip before a credential is checked
    /// Environment: LOGIN_CORE_AUTH_DELAY_MS
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Users present when the store is created (TOML only)
    #[serde(default = "default_seed_users")]
    pub seed_users: HashMap<String, String>,
}

fn default_min_identity_length() -> usize {
    MIN_IDENTITY_LENGTH
}

fn default_min_secret_length() -> usize {
    MIN_SECRET_LENGTH
}

fn default_auth_delay_ms() -> u64 {
    DEFAULT_AUTH_DELAY_MS
}

fn default_seed_users() -> HashMap<String, String> {
    DEMO_CREDENTIALS
        .iter()
        .map(|(identity, secret)| (identity.to_string(), secret.to_string()))
        .collect()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            min_identity_length: default_min_identity_length(),
            min_secret_length: default_min_secret_length(),
            auth_delay_ms: default_auth_delay_ms(),
            seed_users: default_seed_users(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from ./config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from `path` (extension optional). A missing file
    /// falls back to defaults.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("LOGIN_CORE"))
            .build()?;

        let config: CoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_identity_length == 0 {
            return Err(config::ConfigError::Message(
                "min_identity_length must be greater than 0".into(),
            ));
        }

        if self.min_secret_length == 0 {
            return Err(config::ConfigError::Message(
                "min_secret_length must be greater than 0".into(),
            ));
        }

        if let Some(identity) = self
            .seed_users
            .iter()
            .find(|(identity, secret)| identity.is_empty() || secret.is_empty())
            .map(|(identity, _)| identity)
        {
            return Err(config::ConfigError::Message(format!(
                "seed user {:?} must have a non-empty identity and secret",
                identity
            )));
        }

        Ok(())
    }

    /// Get the validation limits
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_identity_length: self.min_identity_length,
            min_secret_length: self.min_secret_length,
        }
    }

    /// Get the authentication delay as Duration
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }
}
