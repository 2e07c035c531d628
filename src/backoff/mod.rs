//! Capped exponential backoff: policy, per-sequence state, and the pause.
//!
//! The split follows "pure core, imperative shell":
//!
//! - **Pure core**: [`ExponentialBackoff`] is configuration and
//!   [`BackoffState`] is arithmetic: [`BackoffState::next_delay`] computes
//!   the next pause without ever suspending.
//! - **Imperative shell**: [`ExponentialBackoff::back_off`] performs the
//!   pause by delegating to the policy's [`Waiter`](crate::waiter::Waiter).
//!
//! # Quick Start
//!
//! ```rust
//! use slackwater::ExponentialBackoff;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let policy = ExponentialBackoff::new()
//!     .with_initial_interval(Duration::from_millis(1))
//!     .with_max_interval(Duration::from_millis(4));
//!
//! // One state per retry sequence; one back_off per attempt.
//! let state = policy.start();
//! policy.back_off(&state).await.unwrap(); // pauses 1ms
//! policy.back_off(&state).await.unwrap(); // pauses 2ms
//! policy.back_off(&state).await.unwrap(); // pauses 4ms
//! policy.back_off(&state).await.unwrap(); // pauses 4ms (capped)
//! # });
//! ```
//!
//! # Growth and saturation
//!
//! Delays follow `initial`, `initial × m`, `initial × m²`, … until the
//! stored interval exceeds the cap; from then on every call returns the cap
//! and the stored interval is frozen, so very long retry sequences never
//! push the arithmetic toward overflow. Deliberately *not* provided here:
//! jitter, attempt limits, and retryability decisions. Those belong to the
//! surrounding orchestration.
//!
//! # Errors
//!
//! The only failure is [`BackoffInterrupted`], raised when the waiter's
//! pause is cut short externally.

mod error;
mod policy;
mod state;

pub use error::BackoffInterrupted;
pub use policy::ExponentialBackoff;
pub use state::BackoffState;
