//! Credential validator
//!
//! Structural checks run before any authentication attempt. Every rule is
//! evaluated independently and all violations are reported together.

use super::credentials::Credential;
use super::results::Valid;
use crate::error::ValidationError;

/// Minimum identity length, in characters.
pub const MIN_IDENTITY_LENGTH: usize = 3;

/// Minimum secret length, in characters.
pub const MIN_SECRET_LENGTH: usize = 6;

/// Length limits applied by [`validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_identity_length: usize,
    pub min_secret_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_identity_length: MIN_IDENTITY_LENGTH,
            min_secret_length: MIN_SECRET_LENGTH,
        }
    }
}

/// Validates a submission against the default rules.
pub fn validate(identity: &str, secret: &str) -> Result<Valid, Vec<ValidationError>> {
    validate_with(identity, secret, &ValidationRules::default())
}

/// Validates a submission against `rules`.
///
/// Errors come back in a fixed order: identity errors before secret errors,
/// "missing" before "too short".
///
/// Lengths are counted in Unicode scalar values, not UTF-16 code units, so
/// `"😀😀😀"` is three characters long and fails a six-character minimum.
pub fn validate_with(
    identity: &str,
    secret: &str,
    rules: &ValidationRules,
) -> Result<Valid, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if identity.is_empty() {
        errors.push(ValidationError::MissingIdentity);
    }
    if identity.chars().count() < rules.min_identity_length {
        errors.push(ValidationError::IdentityTooShort);
    }
    if secret.is_empty() {
        errors.push(ValidationError::MissingSecret);
    }
    if secret.chars().count() < rules.min_secret_length {
        errors.push(ValidationError::SecretTooShort);
    }

    if errors.is_empty() {
        Ok(Valid)
    } else {
        Err(errors)
    }
}

impl Credential {
    /// Validates this credential against `rules`.
    pub fn validate(&self, rules: &ValidationRules) -> Result<Valid, Vec<ValidationError>> {
        validate_with(&self.identity, &self.secret, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ValidationError::*;

    #[test]
    fn test_valid_credentials() {
        assert_eq!(validate("admin", "admin123"), Ok(Valid));
        assert_eq!(validate("abc", "123456"), Ok(Valid));
    }

    #[test]
    fn test_short_identities_flagged() {
        for identity in ["", "a", "ab"] {
            let errors = validate(identity, "longenough").unwrap_err();
            assert!(errors.contains(&IdentityTooShort), "identity {:?}", identity);
        }
    }

    #[test]
    fn test_short_secrets_flagged() {
        for secret in ["", "1", "12345", "wrong"] {
            let errors = validate("admin", secret).unwrap_err();
            assert!(errors.contains(&SecretTooShort), "secret {:?}", secret);
        }
    }

    #[test]
    fn test_all_errors_collected_in_order() {
        assert_eq!(
            validate("", ""),
            Err(vec![MissingIdentity, IdentityTooShort, MissingSecret, SecretTooShort])
        );
        assert_eq!(validate("ab", "12345"), Err(vec![IdentityTooShort, SecretTooShort]));
        assert_eq!(validate("admin", "wrong"), Err(vec![SecretTooShort]));
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, six bytes.
        assert_eq!(validate("äöü", "secret"), Ok(Valid));
        assert_eq!(validate("ab", "ééééé"), Err(vec![IdentityTooShort, SecretTooShort]));
        // Astral-plane characters count once each.
        assert_eq!(validate("admin", "😀😀😀"), Err(vec![SecretTooShort]));
        assert_eq!(validate("admin", "😀😀😀😀😀😀"), Ok(Valid));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_identity_length: 1,
            min_secret_length: 10,
        };
        assert_eq!(validate_with("a", "0123456789", &rules), Ok(Valid));
        assert_eq!(validate_with("a", "012345678", &rules), Err(vec![SecretTooShort]));
    }

    #[test]
    fn test_credential_validate() {
        let credential = Credential::new("no", "pw");
        assert_eq!(
            credential.validate(&ValidationRules::default()),
            Err(vec![IdentityTooShort, SecretTooShort])
        );
    }
}
