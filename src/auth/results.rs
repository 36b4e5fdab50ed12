//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

/// Marker returned by the validator when a submission passes every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Valid;
