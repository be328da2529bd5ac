/// Connection failures and timeouts. Not a grand total.
pub const TOTAL: &str = "total";
pub const CLASS_1XX: &str = "1xx";
pub const CLASS_2XX: &str = "2xx";
pub const CLASS_3XX: &str = "3xx";
pub const CLASS_4XX: &str = "4xx";
pub const CLASS_5XX: &str = "5xx";
/// Statuses whose leading digit falls outside 1-5.
pub const ERRORS: &str = "errors";

/// Labels printed by the text summary, in order.
pub const SUMMARY_ORDER: [&str; 6] = [TOTAL, CLASS_1XX, CLASS_2XX, CLASS_3XX, CLASS_4XX, CLASS_5XX];

/// Every label an outcome can land in.
pub const ALL_LABELS: [&str; 7] = [
    TOTAL, CLASS_1XX, CLASS_2XX, CLASS_3XX, CLASS_4XX, CLASS_5XX, ERRORS,
];

/// Maps a status code to its class bucket using `status / 100`.
///
/// Anything whose class is not 1-5 (`99`, `600`, ...) goes to [`ERRORS`].
#[must_use]
pub const fn status_label(status: u16) -> &'static str {
    match status.checked_div(100) {
        Some(1) => CLASS_1XX,
        Some(2) => CLASS_2XX,
        Some(3) => CLASS_3XX,
        Some(4) => CLASS_4XX,
        Some(5) => CLASS_5XX,
        Some(_) | None => ERRORS,
    }
}
