//! # Slackwater
//!
//! > *"Slack water is the pause between tides"*
//!
//! Capped exponential backoff for retry orchestration.
//!
//! ## Philosophy
//!
//! **Slackwater** embodies the principle of **pure core, imperative shell**:
//! - **Slack** = the pause (computed by pure, lock-free arithmetic)
//! - **Water** = the waiting (a pluggable capability that actually suspends)
//!
//! The crate deliberately does *one* thing: given a failure, how long should
//! the next pause be? Whether to retry at all, how many times, and with what
//! randomization are decisions for the orchestrator that embeds it.
//!
//! ## Quick Example
//!
//! ```rust
//! use slackwater::ExponentialBackoff;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let policy = ExponentialBackoff::new()
//!     .with_initial_interval(Duration::from_millis(1))
//!     .with_multiplier(2.0)
//!     .with_max_interval(Duration::from_millis(8));
//!
//! // One state per retry sequence.
//! let state = policy.start();
//!
//! // One back_off per attempt: 1ms, 2ms, 4ms, 8ms, 8ms, ...
//! for _ in 0..5 {
//!     policy.back_off(&state).await.unwrap();
//! }
//! assert_eq!(state.next_delay(), Duration::from_millis(8));
//! # });
//! ```
//!
//! States are safe to share between tasks or threads racing the same retry
//! sequence: the read-and-advance step is a single atomic operation, so
//! concurrent attempts each observe a distinct, non-decreasing delay.
//!
//! For deterministic tests, substitute the waiter: see [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod backoff;
pub mod testing;
pub mod waiter;

// Re-exports
pub use backoff::{BackoffInterrupted, BackoffState, ExponentialBackoff};
pub use waiter::{InterruptHandle, Interrupted, InterruptibleWaiter, TokioWaiter, Waiter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backoff::{BackoffInterrupted, BackoffState, ExponentialBackoff};
    pub use crate::waiter::{InterruptHandle, Interrupted, InterruptibleWaiter, TokioWaiter, Waiter};
}
