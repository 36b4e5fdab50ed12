//! Session management
//!
//! Handles the login state machine, the injected authentication delay and
//! cancellation of in-flight attempts.

pub mod cancel;
pub mod delay;
pub mod login;
pub mod state;

pub use cancel::CancelToken;
pub use delay::{AuthDelay, DelayFn, NoDelay, SimulatedDelay};
pub use login::LoginSession;
pub use state::{RejectReason, SessionState};
