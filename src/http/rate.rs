use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize};

const MICROS_PER_SEC: u64 = 1_000_000;
/// Floor for the tick so absurd rates still yield a valid timer period.
const MIN_TICK: Duration = Duration::from_micros(1);

/// Time between bursts: `burst / rate` seconds, truncated to whole microseconds.
#[must_use]
pub fn tick_interval(rate: PositiveU64, burst: PositiveUsize) -> Duration {
    let burst = u64::try_from(burst.get()).unwrap_or(u64::MAX);
    let micros = burst
        .saturating_mul(MICROS_PER_SEC)
        .checked_div(rate.get())
        .unwrap_or(0);
    Duration::from_micros(micros).max(MIN_TICK)
}

/// How the driver paces a run: `burst` requests every `interval` until `duration` elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstPlan {
    pub burst: PositiveUsize,
    pub interval: Duration,
    pub duration: Duration,
}

impl BurstPlan {
    #[must_use]
    pub fn new(rate: PositiveU64, burst: PositiveUsize, duration: Duration) -> Self {
        Self {
            burst,
            interval: tick_interval(rate, burst),
            duration,
        }
    }
}
