//! Outcome classification and the shared counter store.
mod counters;
mod labels;
mod types;


pub use counters::CounterStore;
pub use labels::{
    ALL_LABELS, CLASS_1XX, CLASS_2XX, CLASS_3XX, CLASS_4XX, CLASS_5XX, ERRORS, SUMMARY_ORDER,
    TOTAL, status_label,
};
pub use types::{FailureKind, Outcome};
