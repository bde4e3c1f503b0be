//! Update-rate profiler
//!
//! Estimates how long the host actually takes to sleep for one 60 Hz tick.
//! The overshoot above the nominal 16.67 ms is scheduler latency that every
//! frame pays, which tells you whether the engine can sustain 60 updates per
//! second on this machine.
//!
//! All measurements block the calling thread and keep no state between calls.

use crate::config::PacingConfig;
use crate::sleep::{PlatformSleeper, TickSleeper};
use instant::Instant;
use std::time::Duration;

/// Fixed cadence used by [`measure_one_tick`]
pub const TICK_RATE_HZ: u32 = 60;
/// Number of ticks averaged by [`measure_average_tick`]
pub const AVERAGE_SAMPLES: u32 = 60;

/// Nominal length of one tick at [`TICK_RATE_HZ`]
pub fn target_tick() -> Duration {
    Duration::from_secs(1) / TICK_RATE_HZ
}

/// Sleep for one 1/60 s tick with the platform sleeper and return the
/// elapsed time.
pub fn measure_one_tick() -> Duration {
    measure_one_tick_with(&PlatformSleeper::default(), target_tick())
}

/// Average of [`AVERAGE_SAMPLES`] sequential [`measure_one_tick`] calls.
///
/// Blocks for roughly one second.
pub fn measure_average_tick() -> Duration {
    let average = measure_average_tick_from(measure_one_tick);
    log::debug!(
        "average tick over {} samples: {:.3} ms",
        AVERAGE_SAMPLES,
        average.as_secs_f64() * 1000.0
    );
    average
}

/// Time one sleep of `target` on the given sleeper.
pub fn measure_one_tick_with<S: TickSleeper + ?Sized>(sleeper: &S, target: Duration) -> Duration {
    let start = Instant::now();
    sleeper.sleep(target);
    start.elapsed()
}

/// Pull exactly [`AVERAGE_SAMPLES`] durations from `source`, one after
/// another, and return their mean.
pub fn measure_average_tick_from<F>(source: F) -> Duration
where
    F: FnMut() -> Duration,
{
    let samples = collect_samples(source, AVERAGE_SAMPLES);
    average_of(&samples)
}

/// Arithmetic mean of `samples`. Zero for an empty slice.
///
/// Every sample carries equal weight; a single slow tick shifts the mean by
/// 1/n of its excess.
pub fn average_of(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = samples.iter().sum();
    match u32::try_from(samples.len()) {
        Ok(count) => total / count,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / samples.len() as f64),
    }
}

fn collect_samples<F>(mut source: F, count: u32) -> Vec<Duration>
where
    F: FnMut() -> Duration,
{
    (0..count).map(|_| source()).collect()
}

/// Summary of one profiling run
#[derive(Debug, Clone, PartialEq)]
pub struct PacingReport {
    /// Nominal tick length that was requested
    pub target: Duration,
    /// Number of ticks measured
    pub samples: usize,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl PacingReport {
    /// Build a report from raw samples
    pub fn from_samples(target: Duration, samples: &[Duration]) -> Self {
        Self {
            target,
            samples: samples.len(),
            average: average_of(samples),
            min: samples.iter().min().copied().unwrap_or_default(),
            max: samples.iter().max().copied().unwrap_or_default(),
        }
    }

    /// Update rate implied by the average tick, in Hz
    pub fn achievable_hz(&self) -> f64 {
        let secs = self.average.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            f64::INFINITY
        }
    }

    /// How far the average tick ran past the target
    pub fn overshoot(&self) -> Duration {
        self.average.saturating_sub(self.target)
    }

    /// Whether the average tick fits within one frame at `hz`
    pub fn sustains(&self, hz: f64) -> bool {
        self.average.as_secs_f64() <= 1.0 / hz
    }
}

/// Profiler with a configurable cadence and sample count.
///
/// The free functions in this module are fixed at 60 Hz and 60 samples;
/// this type runs the same measurement against a [`PacingConfig`].
pub struct UpdateRateProfiler<S: TickSleeper = PlatformSleeper> {
    config: PacingConfig,
    sleeper: S,
}

impl Default for UpdateRateProfiler {
    fn default() -> Self {
        Self::new(PacingConfig::default())
    }
}

impl UpdateRateProfiler {
    /// Profiler using the host's platform sleeper
    pub fn new(config: PacingConfig) -> Self {
        Self::with_sleeper(config, PlatformSleeper::default())
    }
}

impl<S: TickSleeper> UpdateRateProfiler<S> {
    pub fn with_sleeper(config: PacingConfig, sleeper: S) -> Self {
        Self { config, sleeper }
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Time one sleep of `1 / target_hz`
    pub fn measure_one_tick(&self) -> Duration {
        measure_one_tick_with(&self.sleeper, self.config.target_tick())
    }

    /// Average of `samples` sequential ticks
    pub fn measure_average_tick(&self) -> Duration {
        self.report().average
    }

    /// Measure `samples` ticks and summarise them
    pub fn report(&self) -> PacingReport {
        let samples = collect_samples(|| self.measure_one_tick(), self.config.samples);
        let report = PacingReport::from_samples(self.config.target_tick(), &samples);

        log::debug!(
            "pacing: {} samples, avg {:.3} ms, min {:.3} ms, max {:.3} ms",
            report.samples,
            report.average.as_secs_f64() * 1000.0,
            report.min.as_secs_f64() * 1000.0,
            report.max.as_secs_f64() * 1000.0
        );
        if !report.sustains(self.config.target_hz) {
            log::warn!(
                "host cannot sustain {} Hz: average tick {:.3} ms (~{:.1} Hz achievable)",
                self.config.target_hz,
                report.average.as_secs_f64() * 1000.0,
                report.achievable_hz()
            );
        }

        report
    }
}
