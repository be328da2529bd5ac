use std::sync::Arc;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::http::{BurstPlan, DriveStats, Driver, HttpTransport, RequestExecutor, Transport};
use crate::metrics::CounterStore;

use super::summary::print_summary;

/// Final state of a run, handed to the reporter.
#[derive(Debug)]
pub struct RunReport {
    pub stats: DriveStats,
    pub counters: Arc<CounterStore>,
    /// Requests still outstanding when the counters were read.
    pub unfinished: u64,
}

/// Runs the load against the configured HTTP target and prints the summary.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the summary
/// cannot be written.
pub async fn run_local(config: &RunConfig) -> AppResult<()> {
    let transport = HttpTransport::new(config.url.clone(), config.request_timeout)?;
    info!("Target: {}", transport.url());
    let report = run_with_transport(config, Arc::new(transport)).await;
    print_summary(&report, config.output_format)
}

/// Drives the run through `transport`, then settles before reading counters.
///
/// By default settling is a fixed grace sleep, which may under-count
/// requests that outlive it. With `wait_ongoing_requests_after_deadline`
/// it waits for the in-flight gauge to reach zero instead.
pub async fn run_with_transport(config: &RunConfig, transport: Arc<dyn Transport>) -> RunReport {
    let counters = Arc::new(CounterStore::new());
    let executor = RequestExecutor::new(transport, Arc::clone(&counters), config.request_timeout);
    let plan = BurstPlan::new(config.rate, config.burst, config.target_duration);
    let mut driver = Driver::new(plan, executor.clone());

    let stats = driver.run().await;

    if config.wait_ongoing_requests_after_deadline {
        info!(
            "Waiting for {} in-flight requests to finish",
            executor.in_flight()
        );
        executor.wait_idle().await;
    } else {
        sleep(config.grace).await;
    }

    let unfinished = executor.in_flight();
    if unfinished > 0 {
        warn!(
            "{} requests were still in flight after the grace period; counts may be low.",
            unfinished
        );
    }

    RunReport {
        stats,
        counters,
        unfinished,
    }
}
