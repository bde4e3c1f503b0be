//! Division Runtime - Frame pacing and behaviour dispatch
//!
//! Provides the per-frame runtime building blocks:
//! - `measure_one_tick` / `measure_average_tick` — sample how long the host
//!   takes to sleep for one 60 Hz tick
//! - `UpdateRateProfiler` / `PacingReport` — the same measurement at a
//!   configurable cadence, with a summary
//! - `TickSleeper` — platform sleep primitive, injectable for tests
//! - `PacingConfig` — profiler settings loaded from TOML
//! - `BehaviourSet` — an entity's behaviours, updated once per frame

mod behaviour_set;
mod config;
mod profiler;
mod sleep;

pub use behaviour_set::BehaviourSet;
pub use config::{PacingConfig, DEFAULT_SAMPLES, DEFAULT_TARGET_HZ};
pub use profiler::{
    average_of, measure_average_tick, measure_average_tick_from, measure_one_tick,
    measure_one_tick_with, target_tick, PacingReport, UpdateRateProfiler, AVERAGE_SAMPLES,
    TICK_RATE_HZ,
};
pub use sleep::{
    MillisecondSleeper, PlatformSleeper, PreciseSleeper, TickSleeper, WholeSecondSleeper,
};
