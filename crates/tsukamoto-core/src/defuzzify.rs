//! Defuzzification: weighted-average crisp output to a performance category.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::fuzzify::fuzzify_all;
use crate::inference::{infer_profile, InferenceResult};
use crate::model::{AcademicInputs, FuzzyProfile, Performance};
use crate::validate::validate_inputs;

/// Inclusive upper bound of each category, evaluated top-down.
/// Anything above the last bound is [`Performance::Excellent`].
pub const CATEGORY_BOUNDARIES: [(f64, Performance); 4] = [
    (40.0, Performance::Poor),
    (60.0, Performance::NeedsImprovement),
    (80.0, Performance::Satisfactory),
    (95.0, Performance::Good),
];

/// Bucket a crisp score into its category.
pub fn categorize(crisp: f64) -> Performance {
    CATEGORY_BOUNDARIES
        .iter()
        .find(|(upper, _)| crisp <= *upper)
        .map(|(_, category)| *category)
        .unwrap_or(Performance::Excellent)
}

/// Final decision for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub category: Performance,
    pub crisp_value: f64,
    pub inputs: AcademicInputs,
    /// Membership triples the decision was derived from.
    pub membership: FuzzyProfile,
    /// Full inference trace.
    pub inference: InferenceResult,
}

/// Run the full pipeline without range checks.
///
/// Fails with [`EngineError::NoRuleActivated`] when no rule fires.
pub fn defuzzify(inputs: &AcademicInputs) -> Result<Assessment, EngineError> {
    let membership = fuzzify_all(inputs);
    let inference = infer_profile(&membership);

    if !inference.fired() {
        return Err(EngineError::NoRuleActivated);
    }

    Ok(Assessment {
        category: categorize(inference.crisp_output),
        crisp_value: inference.crisp_output,
        inputs: *inputs,
        membership,
        inference,
    })
}

/// Five-argument form of [`defuzzify`] returning only `(category, crisp value)`.
pub fn tsukamoto_defuzzify(
    gpa: f64,
    cca: f64,
    attendance: f64,
    midterm: f64,
    final_exam: f64,
) -> Result<(Performance, f64), EngineError> {
    let assessment = defuzzify(&AcademicInputs::new(gpa, cca, attendance, midterm, final_exam))?;
    Ok((assessment.category, assessment.crisp_value))
}

/// Validate input ranges, then run the full pipeline.
pub fn assess(inputs: &AcademicInputs) -> Result<Assessment, EngineError> {
    validate_inputs(inputs)?;
    defuzzify(inputs)
}
