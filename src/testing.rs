//! Waiter doubles for deterministic tests.
//!
//! Backoff behavior is fully observable without real time passing: inject
//! one of these waiters with
//! [`with_waiter`](crate::ExponentialBackoff::with_waiter) and a retry
//! sequence that would span minutes runs in microseconds.
//!
//! - [`InstantWaiter`] resolves every pause immediately.
//! - [`RecordingWaiter`] resolves immediately and remembers the requested
//!   delays for assertions.
//! - [`InterruptingWaiter`] fails every pause, for exercising the
//!   interruption path.
//!
//! # Example
//!
//! ```rust
//! use slackwater::testing::RecordingWaiter;
//! use slackwater::ExponentialBackoff;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let waiter = RecordingWaiter::new();
//! let policy = ExponentialBackoff::new().with_waiter(waiter.clone());
//!
//! let state = policy.start();
//! policy.back_off(&state).await.unwrap();
//!
//! assert_eq!(waiter.pauses(), vec![Duration::from_millis(100)]);
//! # });
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::future::BoxFuture;

use crate::waiter::{Interrupted, Waiter};

/// A waiter that resolves every pause immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantWaiter;

impl Waiter for InstantWaiter {
    fn pause(&self, _duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>> {
        Box::pin(async { Ok(()) })
    }
}

/// A waiter that resolves immediately and records each requested delay.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the policy.
#[derive(Debug, Clone, Default)]
pub struct RecordingWaiter {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingWaiter {
    /// Create a waiter with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The delays requested so far, in call order.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Waiter for RecordingWaiter {
    fn pause(&self, duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>> {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
        Box::pin(async { Ok(()) })
    }
}

/// A waiter that fails every pause without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterruptingWaiter;

impl Waiter for InterruptingWaiter {
    fn pause(&self, _duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>> {
        Box::pin(async { Err(Interrupted::after(Duration::ZERO)) })
    }
}
