//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging from `RUST_LOG`. Safe to call more than once.
pub fn setup_logging() {
    let _ = env_logger::try_init();
}
