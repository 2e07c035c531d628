//! Backoff policy configuration and the pause operation.

use std::sync::Arc;
use std::time::Duration;

use crate::backoff::error::BackoffInterrupted;
use crate::backoff::state::{whole_millis, BackoffState};
use crate::waiter::{TokioWaiter, Waiter};

/// Policy that grows the pause between retries exponentially, up to a cap.
///
/// A policy is long-lived configuration shared across many retry sequences.
/// For each new sequence the orchestrator calls [`start`](Self::start) to
/// get a fresh [`BackoffState`], then [`back_off`](Self::back_off) once per
/// attempt with that state. The state snapshots the configuration at
/// creation, so reconfiguring a policy never disturbs sequences already in
/// progress.
///
/// Out-of-range configuration is clamped silently at write time rather than
/// rejected: intervals have a floor of one millisecond and the multiplier a
/// floor of `1.0`. Durations are kept at millisecond resolution.
///
/// # Example
///
/// ```rust
/// use slackwater::ExponentialBackoff;
/// use std::time::Duration;
///
/// let policy = ExponentialBackoff::new()
///     .with_initial_interval(Duration::from_millis(50))
///     .with_multiplier(3.0)
///     .with_max_interval(Duration::from_secs(10));
///
/// let state = policy.start();
/// assert_eq!(state.next_delay(), Duration::from_millis(50));
/// assert_eq!(state.next_delay(), Duration::from_millis(150));
/// assert_eq!(state.next_delay(), Duration::from_millis(450));
/// ```
#[derive(Clone)]
pub struct ExponentialBackoff {
    initial_interval: Duration,
    multiplier: f64,
    max_interval: Duration,
    waiter: Arc<dyn Waiter>,
}

impl ExponentialBackoff {
    /// The default initial interval: 100 milliseconds.
    ///
    /// Together with the default multiplier this gives a useful spread of
    /// pauses over the first handful of retries.
    pub const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_millis(100);

    /// The default growth factor: 2.0 (a 100% increase per backoff).
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// The default delay cap: 30 seconds.
    pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_millis(30_000);

    /// Create a policy with the default configuration and a [`TokioWaiter`].
    pub fn new() -> Self {
        Self {
            initial_interval: Self::DEFAULT_INITIAL_INTERVAL,
            multiplier: Self::DEFAULT_MULTIPLIER,
            max_interval: Self::DEFAULT_MAX_INTERVAL,
            waiter: Arc::new(TokioWaiter),
        }
    }

    /// Set the initial interval. Values under one millisecond clamp to 1 ms.
    pub fn set_initial_interval(&mut self, initial_interval: Duration) {
        self.initial_interval = clamp_interval(initial_interval);
    }

    /// Set the growth factor. Values at or below `1.0` (and NaN) clamp to
    /// `1.0`. Hint: values much above `1.0` make the backoff grow very long
    /// very fast.
    pub fn set_multiplier(&mut self, multiplier: f64) {
        self.multiplier = clamp_multiplier(multiplier);
    }

    /// Set the delay cap. Values under one millisecond clamp to 1 ms. Keeps
    /// pauses bounded when backing off many times or with a large
    /// multiplier.
    pub fn set_max_interval(&mut self, max_interval: Duration) {
        self.max_interval = clamp_interval(max_interval);
    }

    /// Install a different waiter capability.
    pub fn set_waiter<W>(&mut self, waiter: W)
    where
        W: Waiter + 'static,
    {
        self.waiter = Arc::new(waiter);
    }

    /// Builder form of [`set_initial_interval`](Self::set_initial_interval).
    pub fn with_initial_interval(mut self, initial_interval: Duration) -> Self {
        self.set_initial_interval(initial_interval);
        self
    }

    /// Builder form of [`set_multiplier`](Self::set_multiplier).
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.set_multiplier(multiplier);
        self
    }

    /// Builder form of [`set_max_interval`](Self::set_max_interval).
    pub fn with_max_interval(mut self, max_interval: Duration) -> Self {
        self.set_max_interval(max_interval);
        self
    }

    /// Builder form of [`set_waiter`](Self::set_waiter).
    ///
    /// Policies are plain values: to substitute a waiter (say, a test
    /// double) without touching a shared instance, clone first and override
    /// the copy. The original and any states derived from it are unaffected.
    ///
    /// ```rust
    /// use slackwater::testing::InstantWaiter;
    /// use slackwater::ExponentialBackoff;
    ///
    /// let shared = ExponentialBackoff::new();
    /// let for_tests = shared.clone().with_waiter(InstantWaiter);
    /// assert_eq!(for_tests.initial_interval(), shared.initial_interval());
    /// ```
    pub fn with_waiter<W>(mut self, waiter: W) -> Self
    where
        W: Waiter + 'static,
    {
        self.set_waiter(waiter);
        self
    }

    /// The initial interval in effect.
    pub fn initial_interval(&self) -> Duration {
        self.initial_interval
    }

    /// The growth factor in effect.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The delay cap in effect.
    pub fn max_interval(&self) -> Duration {
        self.max_interval
    }

    /// Begin a new retry sequence.
    ///
    /// The returned state is seeded with the policy's current configuration
    /// by value; it belongs to the sequence that created it and is discarded
    /// when the sequence ends.
    pub fn start(&self) -> BackoffState {
        BackoffState::new(self.initial_interval, self.multiplier, self.max_interval)
    }

    /// Pause for the current backoff interval of `state`.
    ///
    /// Reads-and-advances the state, then suspends on the waiter for the
    /// delay read. If the waiter is interrupted mid-pause this fails with
    /// [`BackoffInterrupted`] wrapping the interruption; the failure
    /// propagates as-is. The advance happens before the pause, so an
    /// interrupted attempt still counts toward the growth sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slackwater::testing::RecordingWaiter;
    /// use slackwater::ExponentialBackoff;
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let waiter = RecordingWaiter::new();
    /// let policy = ExponentialBackoff::new().with_waiter(waiter.clone());
    ///
    /// let state = policy.start();
    /// policy.back_off(&state).await.unwrap();
    /// policy.back_off(&state).await.unwrap();
    ///
    /// assert_eq!(
    ///     waiter.pauses(),
    ///     vec![Duration::from_millis(100), Duration::from_millis(200)],
    /// );
    /// # });
    /// ```
    pub async fn back_off(&self, state: &BackoffState) -> Result<(), BackoffInterrupted> {
        let delay = state.next_delay();
        #[cfg(feature = "tracing")]
        tracing::debug!(delay_ms = delay.as_millis() as u64, "backing off");
        self.waiter
            .pause(delay)
            .await
            .map_err(|cause| BackoffInterrupted::new(delay, cause))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExponentialBackoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExponentialBackoff")
            .field("initial_interval", &self.initial_interval)
            .field("multiplier", &self.multiplier)
            .field("max_interval", &self.max_interval)
            .field("waiter", &"<waiter>")
            .finish()
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    Duration::from_millis(whole_millis(interval).max(1))
}

fn clamp_multiplier(multiplier: f64) -> f64 {
    // NaN compares false and falls through to the floor.
    if multiplier > 1.0 {
        multiplier
    } else {
        1.0
    }
}
