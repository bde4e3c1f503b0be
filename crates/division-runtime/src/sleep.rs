//! Host sleep primitives used to simulate one frame of idle time

use std::time::Duration;

/// Blocks the calling thread for (roughly) a requested duration.
///
/// Implementations differ in granularity. None of them can fail or be
/// interrupted; the observed sleep may be longer or shorter than requested.
pub trait TickSleeper {
    fn sleep(&self, target: Duration);
}

/// Sleeps in whole milliseconds, truncating the sub-millisecond remainder.
///
/// This is the granularity of the Win32 `Sleep` call: a 1/60 s request
/// becomes a 16 ms sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct MillisecondSleeper;

impl TickSleeper for MillisecondSleeper {
    fn sleep(&self, target: Duration) {
        std::thread::sleep(Duration::from_millis(target.as_millis() as u64));
    }
}

/// Sleeps for the full requested duration at nanosecond resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreciseSleeper;

impl TickSleeper for PreciseSleeper {
    fn sleep(&self, target: Duration) {
        std::thread::sleep(target);
    }
}

/// Degraded fallback that only sleeps in whole seconds, truncating.
///
/// Sub-second targets collapse to a zero-length sleep, so a measured tick
/// is just the clock overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeSecondSleeper;

impl TickSleeper for WholeSecondSleeper {
    fn sleep(&self, target: Duration) {
        let secs = target.as_secs();
        if secs > 0 {
            std::thread::sleep(Duration::from_secs(secs));
        }
    }
}

/// The sleeper for the host this crate was compiled for
#[cfg(windows)]
pub type PlatformSleeper = MillisecondSleeper;

#[cfg(unix)]
pub type PlatformSleeper = PreciseSleeper;

#[cfg(not(any(windows, unix)))]
pub type PlatformSleeper = WholeSecondSleeper;

impl<S: TickSleeper + ?Sized> TickSleeper for &S {
    fn sleep(&self, target: Duration) {
        (**self).sleep(target)
    }
}

impl<S: TickSleeper + ?Sized> TickSleeper for Box<S> {
    fn sleep(&self, target: Duration) {
        (**self).sleep(target)
    }
}
