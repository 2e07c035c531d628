//! The waiter capability: pluggable timed suspension.
//!
//! A [`Waiter`] performs the actual pause between retry attempts. The policy
//! layer decides *how long* to wait; the waiter decides *how* to wait. This
//! split keeps the backoff arithmetic pure and makes the waiting side
//! trivially substitutable: production code suspends on the runtime timer,
//! tests inject a double from [`crate::testing`] and run in microseconds.
//!
//! Two implementations ship with the crate:
//!
//! - [`TokioWaiter`] - the default; a real timed suspension on the tokio
//!   timer. It completes the full pause and is never interrupted on its own.
//! - [`InterruptibleWaiter`] - a pause that can be cut short from the
//!   outside through an [`InterruptHandle`], failing with [`Interrupted`].
//!
//! # Example
//!
//! ```rust
//! use slackwater::waiter::{InterruptibleWaiter, Waiter};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let waiter = InterruptibleWaiter::new();
//! let handle = waiter.handle();
//!
//! // Interrupts latch: delivered now, consumed by the next pause.
//! handle.interrupt();
//!
//! let err = waiter.pause(Duration::from_secs(60)).await.unwrap_err();
//! assert!(err.waited < Duration::from_secs(60));
//! # });
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use tokio::sync::Notify;

/// Signal that a pause was cut short before the full delay elapsed.
///
/// Carries how long the waiter actually waited before being interrupted.
/// Waiters that fail without ever suspending report [`Duration::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted {
    /// Time actually spent waiting before the interruption arrived.
    pub waited: Duration,
}

impl Interrupted {
    /// Create an interruption signal after `waited` of actual waiting.
    pub fn after(waited: Duration) -> Self {
        Self { waited }
    }
}

impl std::fmt::Display for Interrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pause interrupted after {:?}", self.waited)
    }
}

impl std::error::Error for Interrupted {}

/// A pluggable capability that suspends the caller for a duration.
///
/// Implementations must resolve `Ok(())` once the full duration has elapsed,
/// or `Err(Interrupted)` immediately when the pause is cut short externally.
/// An interrupted pause must not be resumed or retried by the waiter itself;
/// the decision belongs to whoever called it.
pub trait Waiter: Send + Sync {
    /// Suspend the caller for `duration`.
    fn pause(&self, duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>>;
}

/// The default waiter: a real timed suspension on the tokio timer.
///
/// # Example
///
/// ```rust
/// use slackwater::waiter::{TokioWaiter, Waiter};
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// TokioWaiter.pause(Duration::from_millis(1)).await.unwrap();
/// # });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWaiter;

impl Waiter for TokioWaiter {
    fn pause(&self, duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>> {
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

/// A waiter whose pause can be cut short through an [`InterruptHandle`].
///
/// Interrupts are latched: one delivered while no pause is in flight is
/// stored and consumed by the next `pause` call, which then fails without
/// waiting out its full duration. Each interrupt cancels at most one pause.
#[derive(Debug, Default)]
pub struct InterruptibleWaiter {
    interrupt: Arc<Notify>,
}

impl InterruptibleWaiter {
    /// Create a waiter with no pending interrupt.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that interrupts this waiter's pauses.
    ///
    /// Handles are cheap to clone and may be sent to other tasks or threads.
    pub fn handle(&self) -> InterruptHandle {
        InterruptHandle {
            interrupt: Arc::clone(&self.interrupt),
        }
    }
}

impl Waiter for InterruptibleWaiter {
    fn pause(&self, duration: Duration) -> BoxFuture<'_, Result<(), Interrupted>> {
        Box::pin(async move {
            let start = Instant::now();
            tokio::select! {
                _ = tokio::time::sleep(duration) => Ok(()),
                _ = self.interrupt.notified() => Err(Interrupted::after(start.elapsed())),
            }
        })
    }
}

/// Interrupts the pauses of the [`InterruptibleWaiter`] it was taken from.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    interrupt: Arc<Notify>,
}

impl InterruptHandle {
    /// Interrupt the current pause, or latch the interrupt for the next one.
    pub fn interrupt(&self) {
        self.interrupt.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokio_waiter_completes_full_pause() {
        let start = Instant::now();
        TokioWaiter.pause(Duration::from_millis(20)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn interrupt_cuts_pause_short() {
        let waiter = InterruptibleWaiter::new();
        let handle = waiter.handle();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.interrupt();
        });

        let start = Instant::now();
        let err = waiter.pause(Duration::from_secs(60)).await.unwrap_err();
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(err.waited < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn latched_interrupt_fails_next_pause() {
        let waiter = InterruptibleWaiter::new();
        waiter.handle().interrupt();

        let result = waiter.pause(Duration::from_secs(60)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn interrupt_cancels_at_most_one_pause() {
        let waiter = InterruptibleWaiter::new();
        waiter.handle().interrupt();

        assert!(waiter.pause(Duration::from_secs(60)).await.is_err());
        // The latch was consumed; the next pause runs to completion.
        assert!(waiter.pause(Duration::from_millis(1)).await.is_ok());
    }

    #[test]
    fn interrupted_display_mentions_wait() {
        let signal = Interrupted::after(Duration::from_millis(7));
        assert!(format!("{}", signal).contains("interrupted"));
    }
}
