//! Error handling
//!
//! Defines error types and handling for the login core.

pub mod handlers;
pub mod types;

pub use types::*;
