//! Per-retry-sequence backoff state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Mutable state for one retry sequence.
///
/// Created by [`ExponentialBackoff::start`](crate::ExponentialBackoff::start)
/// and shared by every attempt in the sequence. The growth parameters are
/// copied from the policy at creation, so later policy reconfiguration never
/// reaches into a sequence already in flight.
///
/// A state may be shared across threads or tasks racing the same sequence:
/// [`next_delay`](Self::next_delay) is a single lock-free read-modify-write,
/// so concurrent callers each observe a distinct step of the growth sequence
/// and no advance is ever lost or applied twice.
///
/// # Example
///
/// ```rust
/// use slackwater::ExponentialBackoff;
/// use std::time::Duration;
///
/// let state = ExponentialBackoff::new().start();
/// assert_eq!(state.next_delay(), Duration::from_millis(100));
/// assert_eq!(state.next_delay(), Duration::from_millis(200));
/// assert_eq!(state.next_delay(), Duration::from_millis(400));
/// ```
#[derive(Debug)]
pub struct BackoffState {
    interval_ms: AtomicU64,
    multiplier: f64,
    max_interval_ms: u64,
}

impl BackoffState {
    pub(crate) fn new(initial_interval: Duration, multiplier: f64, max_interval: Duration) -> Self {
        Self {
            interval_ms: AtomicU64::new(whole_millis(initial_interval)),
            multiplier,
            max_interval_ms: whole_millis(max_interval),
        }
    }

    /// Return the delay to use now and advance the interval for next time.
    ///
    /// Delays grow geometrically (`initial`, `initial * m`, `initial * m^2`,
    /// ...) until the stored interval exceeds the cap. The call that crosses
    /// the cap returns the cap and leaves the stored interval untouched
    /// (strictly-greater comparison), so growth stops instead of multiplying
    /// an ever-larger value that is clamped on the way out. Every subsequent
    /// call returns the cap. If the seeded interval already exceeds the cap,
    /// every call returns the cap from the start.
    ///
    /// Never blocks; the read-modify-write is one indivisible CAS loop.
    pub fn next_delay(&self) -> Duration {
        let advanced = self
            .interval_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current <= self.max_interval_ms).then(|| grow(current, self.multiplier))
            });

        match advanced {
            Ok(previous) => Duration::from_millis(previous),
            // Stored interval is past the cap: saturated, frozen.
            Err(_) => Duration::from_millis(self.max_interval_ms),
        }
    }

    /// The stored interval as of this call.
    ///
    /// This is the value the *next* [`next_delay`](Self::next_delay) will
    /// read; once the sequence saturates it may exceed
    /// [`max_interval`](Self::max_interval) and stays frozen there.
    pub fn current_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.load(Ordering::Acquire))
    }

    /// The growth factor this sequence was seeded with.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The delay cap this sequence was seeded with.
    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }
}

/// Next interval after one growth step, saturating instead of wrapping.
fn grow(interval_ms: u64, multiplier: f64) -> u64 {
    let next = interval_ms as f64 * multiplier;
    if next.is_finite() && next < u64::MAX as f64 {
        next as u64
    } else {
        u64::MAX
    }
}

pub(crate) fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
