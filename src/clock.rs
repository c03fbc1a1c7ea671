use crate::Instant;
use crate::prelude::*;
use chrono::Utc;

/// A source of the current moment.
///
/// Production code uses [`SystemClock`]; tests can substitute a
/// [`FixedClock`] to pin "now" to a deterministic instant instead of
/// depending on wall-clock time at test-run time.
pub trait Clock {
    /// Returns the current moment according to this clock.
    fn now(&self) -> Instant;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_epoch_millis(Utc::now().timestamp_millis())
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct FixedClock(Instant);

impl FixedClock {
    /// Creates a clock that always reports `instant`
    pub const fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
