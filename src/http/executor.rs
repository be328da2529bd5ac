use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::metrics::{CounterStore, FailureKind, Outcome};

use super::transport::Transport;

/// Runs single requests and records each outcome in the shared [`CounterStore`].
///
/// Cloning is cheap; clones share the transport, the counters, and the
/// in-flight gauge.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    counters: Arc<CounterStore>,
    request_timeout: Duration,
    in_flight: Arc<InFlight>,
}

/// Count of spawned requests whose outcome is not recorded yet.
#[derive(Default)]
struct InFlight {
    count: AtomicU64,
    idle: Notify,
}

impl RequestExecutor {
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        counters: Arc<CounterStore>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            counters,
            request_timeout,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Performs one request and bumps exactly one label by exactly one.
    ///
    /// No retries: a failure or a missed deadline lands in `total` and the
    /// call returns.
    pub async fn execute(&self) -> Outcome {
        trace!("New request");
        let outcome = match timeout(self.request_timeout, self.transport.get()).await {
            Ok(Ok(status)) => Outcome::Status(status),
            Ok(Err(kind)) => Outcome::Failed(kind),
            Err(_elapsed) => Outcome::Failed(FailureKind::Timeout),
        };

        match outcome {
            Outcome::Status(status) => trace!("Response: {} ({})", status, outcome.label()),
            Outcome::Failed(kind) => debug!("No response: {}", kind),
        }

        self.counters.increment(outcome.label(), 1);
        outcome
    }

    /// Spawns [`Self::execute`] as its own task. The request counts as in
    /// flight from this call until its outcome has been recorded.
    pub fn spawn(&self) -> JoinHandle<Outcome> {
        let guard = InFlightGuard::enter(&self.in_flight);
        let executor = self.clone();
        tokio::spawn(async move {
            let _guard = guard;
            executor.execute().await
        })
    }

    #[must_use]
    pub fn in_flight(&self) -> u64 {
        self.in_flight.count.load(Ordering::Acquire)
    }

    /// Waits until no spawned request is outstanding.
    ///
    /// Every request is bounded by the timeout, so this returns at most one
    /// timeout after the last spawn.
    pub async fn wait_idle(&self) {
        loop {
            let idle = self.in_flight.idle.notified();
            tokio::pin!(idle);
            // Register before reading the count so a drop to zero in between
            // is not missed.
            idle.as_mut().enable();
            if self.in_flight() == 0 {
                return;
            }
            idle.await;
        }
    }

    #[must_use]
    pub const fn counters(&self) -> &Arc<CounterStore> {
        &self.counters
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

struct InFlightGuard {
    gauge: Arc<InFlight>,
}

impl InFlightGuard {
    fn enter(gauge: &Arc<InFlight>) -> Self {
        gauge.count.fetch_add(1, Ordering::AcqRel);
        Self {
            gauge: Arc::clone(gauge),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.gauge.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.gauge.idle.notify_waiters();
        }
    }
}
