//! Run orchestration and the final report.
mod runner;
mod summary;


pub use runner::{RunReport, run_local, run_with_transport};
pub use summary::{JsonSummary, print_summary, summary_lines};
