use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use super::executor::RequestExecutor;
use super::rate::BurstPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// What the driver launched. `spawned` is the number of executor tasks,
/// finished or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveStats {
    pub ticks: u64,
    pub spawned: u64,
}

/// Fires `burst` detached requests per tick until the run deadline passes.
///
/// Requests are never joined or cancelled. When the target is slow, requests
/// from earlier ticks are still running when later ticks fire, so concurrency
/// grows past `burst` without any cap.
pub struct Driver {
    plan: BurstPlan,
    executor: RequestExecutor,
    state: DriverState,
}

impl Driver {
    #[must_use]
    pub const fn new(plan: BurstPlan, executor: RequestExecutor) -> Self {
        Self {
            plan,
            executor,
            state: DriverState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    #[must_use]
    pub const fn plan(&self) -> &BurstPlan {
        &self.plan
    }

    /// Runs the schedule: burst, wait for the next tick, then stop once the
    /// elapsed time has reached the run duration.
    ///
    /// Returns as soon as the deadline is observed; spawned requests keep
    /// running on their own.
    pub async fn run(&mut self) -> DriveStats {
        self.state = DriverState::Running;
        let BurstPlan {
            burst,
            interval,
            duration,
        } = self.plan;
        info!(
            "Loading: {} requests every {:?} for {:?}",
            burst.get(),
            interval,
            duration
        );

        let start = Instant::now();
        let deadline = start.checked_add(duration);
        let first_tick = start.checked_add(interval).unwrap_or(start);
        let mut period = interval_at(first_tick, interval);
        period.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut stats = DriveStats::default();
        loop {
            debug!("Fire a burst ({} in flight)", self.executor.in_flight());
            for _ in 0..burst.get() {
                drop(self.executor.spawn());
                stats.spawned = stats.spawned.saturating_add(1);
            }
            stats.ticks = stats.ticks.saturating_add(1);

            period.tick().await;

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }
        }

        self.state = DriverState::Stopped;
        info!(
            "Stopped after {} bursts, {} requests spawned",
            stats.ticks, stats.spawned
        );
        stats
    }
}
