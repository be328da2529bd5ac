use std::fmt;

use super::labels::{TOTAL, status_label};

/// Why a request produced no status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => f.write_str("timeout"),
            FailureKind::Transport => f.write_str("transport error"),
        }
    }
}

/// Result of a single request. Each outcome lands in exactly one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Status(u16),
    Failed(FailureKind),
}

impl Outcome {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Status(status) => status_label(status),
            Outcome::Failed(_) => TOTAL,
        }
    }
}
