//! Batch assessment of many student records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::StudentRecord;
use crate::defuzzify::{assess, defuzzify};
use crate::model::{AcademicInputs, Performance};

/// Outcome for a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub row: usize,
    pub student_id: Option<String>,
    pub inputs: AcademicInputs,
    pub category: Option<Performance>,
    pub crisp_value: Option<f64>,
    pub expected: Option<Performance>,
    /// Error message when the record could not be assessed.
    pub error: Option<String>,
}

impl RecordOutcome {
    pub fn is_ok(&self) -> bool {
        self.category.is_some()
    }
}

/// Per-category counts over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub assessed: usize,
    pub failed: usize,
    pub per_category: BTreeMap<Performance, usize>,
    /// Mean crisp value over assessed records.
    pub mean_crisp: Option<f64>,
}

/// Result of assessing a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
    pub summary: BatchSummary,
}

/// Assess every record. With `validate` set, out-of-range inputs are
/// reported as failures instead of being fuzzified.
pub fn assess_records(records: &[StudentRecord], validate: bool) -> BatchReport {
    let outcomes: Vec<RecordOutcome> = records
        .iter()
        .map(|record| {
            let result = if validate {
                assess(&record.inputs)
            } else {
                defuzzify(&record.inputs)
            };

            let (category, crisp_value, error) = match result {
                Ok(a) => (Some(a.category), Some(a.crisp_value), None),
                Err(e) => {
                    tracing::debug!("{} not assessed: {e}", record.display_id());
                    (None, None, Some(e.to_string()))
                }
            };

            RecordOutcome {
                row: record.row,
                student_id: record.student_id.clone(),
                inputs: record.inputs,
                category,
                crisp_value,
                expected: record.label,
                error,
            }
        })
        .collect();

    let summary = summarize(&outcomes);
    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} records could not be assessed",
            summary.failed,
            summary.total
        );
    }

    BatchReport { outcomes, summary }
}

fn summarize(outcomes: &[RecordOutcome]) -> BatchSummary {
    let mut per_category = BTreeMap::new();
    let mut crisp_sum = 0.0;
    let mut assessed = 0usize;

    for outcome in outcomes {
        if let (Some(category), Some(crisp)) = (outcome.category, outcome.crisp_value) {
            *per_category.entry(category).or_insert(0) += 1;
            crisp_sum += crisp;
            assessed += 1;
        }
    }

    BatchSummary {
        total: outcomes.len(),
        assessed,
        failed: outcomes.len() - assessed,
        per_category,
        mean_crisp: (assessed > 0).then(|| crisp_sum / assessed as f64),
    }
}
