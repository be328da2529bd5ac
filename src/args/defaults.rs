pub(crate) const DEFAULT_USER_AGENT: &str = concat!("burstload/", env!("CARGO_PKG_VERSION"));

/// Target used when neither the CLI nor a config file names one.
pub(crate) const DEFAULT_URL: &str = "localhost:8080/time";

pub(super) const DEFAULT_RATE: &str = "200";
pub(super) const DEFAULT_BURST: &str = "30";
pub(super) const DEFAULT_TIMEOUT: &str = "400ms";
pub(super) const DEFAULT_DURATION: &str = "20s";
