//! Input range checks for the hardened assessment boundary.

use crate::error::EngineError;
use crate::model::{AcademicInputs, Metric};

/// Check a single metric value against its domain. NaN and infinities fail.
pub fn validate_metric(metric: Metric, value: f64) -> Result<(), EngineError> {
    let (min, max) = metric.domain();
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::OutOfRange {
            metric,
            value,
            min,
            max,
        })
    }
}

/// Check all five inputs, failing on the first metric out of range.
pub fn validate_inputs(inputs: &AcademicInputs) -> Result<(), EngineError> {
    for metric in Metric::ALL {
        validate_metric(metric, inputs.get(metric))?;
    }
    Ok(())
}
