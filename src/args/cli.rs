use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_BURST, DEFAULT_DURATION, DEFAULT_RATE, DEFAULT_TIMEOUT, DEFAULT_URL};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Burst-scheduled HTTP load generator - fires fixed-size concurrent GET bursts at a target rate and tallies outcomes by status class."
)]
pub struct LoadArgs {
    /// Target URL (http:// is assumed when no scheme is given)
    #[arg(long, short, default_value = DEFAULT_URL)]
    pub url: String,

    /// Target request rate (requests per second)
    #[arg(long, short = 'r', default_value = DEFAULT_RATE, value_parser = parse_positive_u64)]
    pub rate: PositiveU64,

    /// Requests fired concurrently on every tick
    #[arg(long, short = 'b', default_value = DEFAULT_BURST, value_parser = parse_positive_usize)]
    pub burst: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Duration of the run (supports ms/s/m/h)
    #[arg(
        long = "duration",
        short = 't',
        default_value = DEFAULT_DURATION,
        value_parser = parse_duration_arg
    )]
    pub target_duration: Duration,

    /// Wait after the deadline before reporting (defaults to twice the timeout)
    #[arg(long = "grace", value_parser = parse_duration_arg)]
    pub grace: Option<Duration>,

    /// After the deadline, wait until every in-flight request has finished instead of sleeping the grace period
    #[arg(long = "wait-ongoing-requests-after-deadline")]
    pub wait_ongoing_requests_after_deadline: bool,

    /// Summary format printed to stdout
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./burstload.toml or ./burstload.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by BURSTLOAD_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
