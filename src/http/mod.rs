//! Request execution and burst scheduling.
mod driver;
mod executor;
mod rate;
mod target;
mod transport;


pub use driver::{DriveStats, Driver, DriverState};
pub use executor::RequestExecutor;
pub use rate::{BurstPlan, tick_interval};
pub use target::normalize_target_url;
pub use transport::{HttpTransport, Transport};
