//! Clock module - monotonic time source for the session countdown
//!
//! The session never reads wall time directly; it asks a [`Clock`] for
//! milliseconds since some fixed origin. The terminal build uses
//! [`MonotonicClock`], tests and headless runs drive a [`ManualClock`].

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond source
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin; never decreases
    fn now_ms(&self) -> u64;
}

/// Real time, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock
///
/// Interior mutability lets a test advance time while the session holds
/// the clock.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs.saturating_mul(1000));
    }

    /// Jump to `ms`; earlier values are ignored to keep the clock monotonic
    pub fn set(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.advance(50);
        clock.advance_secs(2);
        assert_eq!(clock.now_ms(), 2150);
    }

    #[test]
    fn manual_clock_never_goes_back() {
        let clock = ManualClock::new(1000);
        clock.set(10);
        assert_eq!(clock.now_ms(), 1000);
        clock.set(4000);
        assert_eq!(clock.now_ms(), 4000);
    }

    #[test]
    fn borrowed_clock_reads_through() {
        let clock = ManualClock::new(7);
        let borrowed: &ManualClock = &clock;
        clock.advance(3);
        assert_eq!(Clock::now_ms(&borrowed), 10);
    }

    #[test]
    fn monotonic_clock_is_monotonic() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
