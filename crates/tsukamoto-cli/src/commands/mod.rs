pub mod accuracy;
pub mod assess;
pub mod batch;
pub mod init;
pub mod rules;

/// Format a score with the configured number of decimals.
pub(crate) fn fmt_score(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}
