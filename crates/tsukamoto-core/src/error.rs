//! Engine and dataset error types.
//!
//! `EngineError` covers the two ways an assessment can fail: inputs that
//! violate a metric's documented domain, and inputs that fall in a gap of
//! the rule table so that no rule fires. `DatasetError` describes a CSV row
//! that could not be turned into a student record.

use thiserror::Error;

use crate::model::Metric;

/// Errors that can occur while assessing a set of academic inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Every rule had a firing strength of zero.
    #[error("no rule activated: all firing strengths are zero")]
    NoRuleActivated,

    /// An input lies outside its metric's domain, or is not finite.
    #[error("{metric} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        metric: Metric,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl EngineError {
    /// Returns `true` if the caller supplied invalid inputs.
    pub fn is_input_error(&self) -> bool {
        matches!(self, EngineError::OutOfRange { .. })
    }
}

/// A rejected row of a student dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The row could not be decoded (missing column, non-numeric value).
    #[error("row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// The performance label is not one of the known categories.
    #[error("row {row}: unknown performance label '{label}'")]
    UnknownLabel { row: usize, label: String },
}

impl DatasetError {
    /// 1-based data row the error refers to.
    pub fn row(&self) -> usize {
        match self {
            DatasetError::Malformed { row, .. } | DatasetError::UnknownLabel { row, .. } => *row,
        }
    }
}
