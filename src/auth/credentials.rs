//! Credential storage and management
//!
//! Holds the identity → secret table consulted on every login attempt.
//! The store is an owned value shared through `Arc`; nothing here is global.

use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use tokio::sync::RwLock;

/// Accounts the store is seeded with when no other seed is configured.
pub const DEMO_CREDENTIALS: [(&str, &str); 4] = [
    ("admin", "admin123"),
    ("user@demo.com", "password"),
    ("test", "test123"),
    ("demo", "demo123"),
];

/// A single submitted identity/secret pair. Created per attempt and dropped
/// once the attempt resolves.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub identity: String,
    pub secret: String,
}

impl Credential {
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }
}

// Secrets never end up in logs through `{:?}`.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// In-memory identity → secret map.
///
/// Lookups take the read side of the lock, mutations the write side, so
/// concurrent callers are serialized around every change.
pub struct CredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl CredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store from a fixed seed set. Entries with an empty identity
    /// or secret are skipped.
    pub fn with_seed<I, K, V>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> = seed
            .into_iter()
            .map(|(identity, secret)| (identity.into(), secret.into()))
            .filter(|(identity, secret)| !identity.is_empty() && !secret.is_empty())
            .collect();

        info!("Credential store seeded with {} user(s)", entries.len());

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Creates a store seeded with [`DEMO_CREDENTIALS`].
    pub fn demo() -> Self {
        Self::with_seed(DEMO_CREDENTIALS)
    }

    /// Inserts or replaces a user. Returns `false` and leaves the store
    /// untouched when either field is empty.
    pub async fn insert(&self, identity: &str, secret: &str) -> bool {
        if identity.is_empty() || secret.is_empty() {
            debug!("Refusing to add user with empty identity or secret");
            return false;
        }

        let replaced = self
            .entries
            .write()
            .await
            .insert(identity.to_string(), secret.to_string())
            .is_some();

        if replaced {
            info!("User {} updated", identity);
        } else {
            info!("User {} added", identity);
        }
        true
    }

    /// Removes a user. Returns whether the identity existed.
    pub async fn remove(&self, identity: &str) -> bool {
        let removed = self.entries.write().await.remove(identity).is_some();
        if removed {
            info!("User {} removed", identity);
        } else {
            debug!("Cannot remove unknown user {}", identity);
        }
        removed
    }

    /// Exact, case-sensitive match of identity and secret.
    pub async fn matches(&self, identity: &str, secret: &str) -> bool {
        matches!(self.entries.read().await.get(identity), Some(stored) if stored == secret)
    }

    pub async fn contains(&self, identity: &str) -> bool {
        self.entries.read().await.contains_key(identity)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Sorted list of known identities. Secrets are not exposed.
    pub async fn identities(&self) -> Vec<String> {
        let mut identities: Vec<String> = self.entries.read().await.keys().cloned().collect();
        identities.sort();
        identities
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_store_contents() {
        let store = CredentialStore::demo();
        assert_eq!(store.len().await, 4);
        assert_eq!(
            store.identities().await,
            vec!["admin", "demo", "test", "user@demo.com"]
        );
        assert!(store.matches("admin", "admin123").await);
        assert!(store.matches("user@demo.com", "password").await);
    }

    #[tokio::test]
    async fn test_matches_is_exact() {
        let store = CredentialStore::demo();
        assert!(!store.matches("admin", "ADMIN123").await);
        assert!(!store.matches("Admin", "admin123").await);
        assert!(!store.matches("admin ", "admin123").await);
        assert!(!store.matches("ghost", "admin123").await);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_fields() {
        let store = CredentialStore::new();
        assert!(!store.insert("", "secret1").await);
        assert!(!store.insert("someone", "").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_secret() {
        let store = CredentialStore::demo();
        assert!(store.insert("admin", "rotated1").await);
        assert_eq!(store.len().await, 4);
        assert!(store.matches("admin", "rotated1").await);
        assert!(!store.matches("admin", "admin123").await);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = CredentialStore::demo();
        assert!(store.remove("test").await);
        assert!(!store.contains("test").await);
        assert!(!store.remove("test").await);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_seed_skips_empty_entries() {
        let store = CredentialStore::with_seed([("ok", "secret1"), ("", "x"), ("blank", "")]);
        assert_eq!(store.identities().await, vec!["ok"]);
    }

    #[test]
    fn test_credential_debug_redacts_secret() {
        let credential = Credential::new("admin", "admin123");
        let rendered = format!("{:?}", credential);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("admin123"));
    }
}
