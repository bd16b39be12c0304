//! Time sources for expiry decisions.

use std::cell::Cell;
use std::time::{Duration, SystemTime};

/// A source of the current time.
///
/// The store never reads the system clock directly; it asks its
/// injected `Clock`, so tests can drive expiry deterministically.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> SystemTime;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock that only moves when told to.
///
/// Starts at [`SystemTime::UNIX_EPOCH`] unless constructed with
/// [`starting_at`](ManualClock::starting_at). Single-threaded by
/// design, like the store itself.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Cell<SystemTime>,
}

impl ManualClock {
    /// A clock frozen at the Unix epoch.
    pub fn new() -> Self {
        Self::starting_at(SystemTime::UNIX_EPOCH)
    }

    /// A clock frozen at `start`.
    pub fn starting_at(start: SystemTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_only_on_demand() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);
        clock.advance(Duration::from_secs(30));
        assert_eq!(clock.now(), start + Duration::from_secs(30));
    }
}
