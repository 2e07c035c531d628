//! Error types for backoff pauses.

use std::time::Duration;

use crate::waiter::Interrupted;

/// Error returned when a backoff pause is interrupted.
///
/// This is the only failure the backoff core propagates. It wraps the
/// waiter's [`Interrupted`] signal together with the delay that was being
/// waited out, and always surfaces to the caller of
/// [`back_off`](crate::ExponentialBackoff::back_off); the core never
/// retries the pause or swallows the interruption. The state's interval was
/// already advanced before the pause began, so retry bookkeeping survives
/// an interruption intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffInterrupted {
    /// The delay the pause was waiting out when it was interrupted.
    pub delay: Duration,
    /// The underlying interruption signal from the waiter.
    pub cause: Interrupted,
}

impl BackoffInterrupted {
    /// Wrap an interruption raised while pausing for `delay`.
    pub fn new(delay: Duration, cause: Interrupted) -> Self {
        Self { delay, cause }
    }

    /// Extract the underlying interruption signal.
    pub fn into_cause(self) -> Interrupted {
        self.cause
    }
}

impl std::fmt::Display for BackoffInterrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "backoff interrupted while pausing for {:?}: {}",
            self.delay, self.cause
        )
    }
}

impl std::error::Error for BackoffInterrupted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
