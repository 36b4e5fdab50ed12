//! Authentication delay
//!
//! The single suspension point of a login attempt. It stands in for the
//! round trip to a remote authenticator and is injected so tests can skip it.

use std::future::{self, Future};
use std::time::Duration;

/// Something a session awaits between validation and authentication.
pub trait AuthDelay: Send + Sync {
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelay {
    duration: Duration,
}

impl SimulatedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl AuthDelay for SimulatedDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.duration)
    }
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl AuthDelay for NoDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        future::ready(())
    }
}

/// Adapts a function returning a future into an [`AuthDelay`].
pub struct DelayFn<F>(pub F);

impl<F, Fut> AuthDelay for DelayFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send,
{
    fn wait(&self) -> impl Future<Output = ()> + Send {
        (self.0)()
    }
}
