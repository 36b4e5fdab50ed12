//! Utility functions
//!
//! Provides logging utilities.

pub mod logging;

pub use logging::setup_logging;
