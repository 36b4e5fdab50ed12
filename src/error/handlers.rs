//! Error handlers
//!
//! Logs rejections and turns them into messages a presentation layer can show.

use crate::auth::ValidationRules;
use crate::error::types::{LoginCoreError, ValidationError};
use crate::session::RejectReason;
use log::{error, info, warn};

/// Handle a login core error
pub fn handle_error(err: &LoginCoreError) {
    error!("Login core error: {}", err);
}

/// Log a rejected attempt without revealing which credential was wrong.
pub fn log_rejection(reason: &RejectReason) {
    match reason {
        RejectReason::ValidationFailed(errors) => {
            info!("Submission rejected by validation ({} error(s))", errors.len())
        }
        RejectReason::InvalidCredentials => warn!("Authentication failed: invalid credentials"),
        RejectReason::Cancelled => info!("Authentication attempt cancelled"),
    }
}

/// Convert a validation error to the message shown next to its field
pub fn validation_message(err: &ValidationError, rules: &ValidationRules) -> String {
    match err {
        ValidationError::MissingIdentity => "Username is required".to_string(),
        ValidationError::IdentityTooShort => format!(
            "Username must be at least {} characters",
            rules.min_identity_length
        ),
        ValidationError::MissingSecret => "Password is required".to_string(),
        ValidationError::SecretTooShort => format!(
            "Password must be at least {} characters",
            rules.min_secret_length
        ),
    }
}

/// Convert a rejection to the messages shown to the user.
///
/// At most one message per field: a missing field is not also reported as
/// too short.
pub fn rejection_messages(reason: &RejectReason, rules: &ValidationRules) -> Vec<String> {
    match reason {
        RejectReason::ValidationFailed(errors) => errors
            .iter()
            .filter(|e| match e {
                ValidationError::IdentityTooShort => {
                    !errors.contains(&ValidationError::MissingIdentity)
                }
                ValidationError::SecretTooShort => {
                    !errors.contains(&ValidationError::MissingSecret)
                }
                _ => true,
            })
            .map(|e| validation_message(e, rules))
            .collect(),
        RejectReason::InvalidCredentials => vec!["Invalid username or password".to_string()],
        RejectReason::Cancelled => vec!["Login failed. Please try again.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_use_rule_lengths() {
        let rules = ValidationRules::default();
        assert_eq!(
            validation_message(&ValidationError::IdentityTooShort, &rules),
            "Username must be at least 3 characters"
        );
        assert_eq!(
            validation_message(&ValidationError::SecretTooShort, &rules),
            "Password must be at least 6 characters"
        );

        let strict = ValidationRules {
            min_identity_length: 5,
            min_secret_length: 12,
        };
        assert_eq!(
            validation_message(&ValidationError::SecretTooShort, &strict),
            "Password must be at least 12 characters"
        );
    }

    #[test]
    fn test_empty_fields_get_one_message_each() {
        let rules = ValidationRules::default();
        let errors = crate::auth::validate("", "").unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            rejection_messages(&RejectReason::ValidationFailed(errors), &rules),
            vec![
                "Username is required".to_string(),
                "Password is required".to_string(),
            ]
        );

        let errors = crate::auth::validate("", "12345").unwrap_err();
        assert_eq!(
            rejection_messages(&RejectReason::ValidationFailed(errors), &rules),
            vec![
                "Username is required".to_string(),
                "Password must be at least 6 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_rejection_messages() {
        let rules = ValidationRules::default();
        let reason = RejectReason::ValidationFailed(vec![
            ValidationError::MissingIdentity,
            ValidationError::SecretTooShort,
        ]);
        assert_eq!(
            rejection_messages(&reason, &rules),
            vec![
                "Username is required".to_string(),
                "Password must be at least 6 characters".to_string(),
            ]
        );
        assert_eq!(
            rejection_messages(&RejectReason::InvalidCredentials, &rules),
            vec!["Invalid username or password".to_string()]
        );
    }
}
