use std::time::Duration;

use url::Url;

use crate::args::{LoadArgs, OutputFormat, PositiveU64, PositiveUsize};
use crate::error::AppResult;
use crate::http::normalize_target_url;

/// Fully resolved settings for one run. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    pub rate: PositiveU64,
    pub burst: PositiveUsize,
    pub request_timeout: Duration,
    pub target_duration: Duration,
    pub grace: Duration,
    pub wait_ongoing_requests_after_deadline: bool,
    pub output_format: OutputFormat,
}

impl RunConfig {
    /// Resolves CLI (and already merged config file) values.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL is empty, unparsable, or not http(s).
    pub fn from_args(args: &LoadArgs) -> AppResult<Self> {
        let url = normalize_target_url(&args.url)?;
        let grace = args
            .grace
            .unwrap_or_else(|| default_grace(args.request_timeout));
        Ok(Self {
            url,
            rate: args.rate,
            burst: args.burst,
            request_timeout: args.request_timeout,
            target_duration: args.target_duration,
            grace,
            wait_ongoing_requests_after_deadline: args.wait_ongoing_requests_after_deadline,
            output_format: args.output_format,
        })
    }
}

/// Twice the request timeout, so requests fired on the last tick can land.
#[must_use]
pub(crate) fn default_grace(request_timeout: Duration) -> Duration {
    request_timeout.saturating_mul(2)
}
