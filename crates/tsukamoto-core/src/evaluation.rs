//! Accuracy evaluation against labelled datasets.
//!
//! Compares the engine's category with the expected label of each record and
//! produces overall accuracy, a per-class classification report and a
//! confusion matrix. Reports persist as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::batch::assess_records;
use crate::dataset::StudentRecord;
use crate::model::Performance;

/// Prediction for one labelled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub row: usize,
    pub student_id: Option<String>,
    pub expected: Performance,
    pub predicted: Performance,
    pub crisp_value: f64,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.expected == self.predicted
    }
}

/// Precision, recall and F1 for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: Performance,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of records whose expected label is this category.
    pub support: usize,
}

/// Rows are expected labels, columns are predicted labels, both in
/// [`Performance::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub counts: [[usize; 5]; 5],
}

impl ConfusionMatrix {
    pub fn record(&mut self, expected: Performance, predicted: Performance) {
        self.counts[expected as usize][predicted as usize] += 1;
    }

    pub fn get(&self, expected: Performance, predicted: Performance) -> usize {
        self.counts[expected as usize][predicted as usize]
    }

    fn true_positives(&self, label: Performance) -> usize {
        self.get(label, label)
    }

    fn predicted_total(&self, label: Performance) -> usize {
        self.counts.iter().map(|row| row[label as usize]).sum()
    }

    fn expected_total(&self, label: Performance) -> usize {
        self.counts[label as usize].iter().sum()
    }
}

/// A complete accuracy report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Where the records came from (usually a file path).
    pub source: String,
    pub total_records: usize,
    /// Labelled records that were assessed.
    pub evaluated: usize,
    /// Records without a label.
    pub unlabelled: usize,
    /// Labelled records the engine could not assess.
    pub failed: usize,
    /// Fraction of evaluated records predicted correctly.
    pub accuracy: f64,
    pub macro_f1: f64,
    pub per_class: Vec<ClassMetrics>,
    pub confusion: ConfusionMatrix,
    pub predictions: Vec<Prediction>,
}

impl AccuracyReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AccuracyReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Predictions whose category differs from the label.
    pub fn misclassified(&self) -> impl Iterator<Item = &Prediction> {
        self.predictions.iter().filter(|p| !p.is_correct())
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-class metrics from a confusion matrix. Classes with no predictions
/// get a precision of 0.
pub fn class_metrics(confusion: &ConfusionMatrix) -> Vec<ClassMetrics> {
    Performance::ALL
        .iter()
        .map(|&label| {
            let tp = confusion.true_positives(label);
            let precision = ratio(tp, confusion.predicted_total(label));
            let recall = ratio(tp, confusion.expected_total(label));
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            ClassMetrics {
                label,
                precision,
                recall,
                f1,
                support: confusion.expected_total(label),
            }
        })
        .collect()
}

/// Assess every labelled record and compare against its label.
pub fn evaluate(records: &[StudentRecord], validate: bool, source: &str) -> AccuracyReport {
    let labelled: Vec<StudentRecord> = records
        .iter()
        .filter(|r| r.label.is_some())
        .cloned()
        .collect();
    let unlabelled = records.len() - labelled.len();

    let batch = assess_records(&labelled, validate);

    let mut confusion = ConfusionMatrix::default();
    let mut predictions = Vec::new();
    for outcome in &batch.outcomes {
        if let (Some(expected), Some(predicted), Some(crisp_value)) =
            (outcome.expected, outcome.category, outcome.crisp_value)
        {
            confusion.record(expected, predicted);
            predictions.push(Prediction {
                row: outcome.row,
                student_id: outcome.student_id.clone(),
                expected,
                predicted,
                crisp_value,
            });
        }
    }

    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    let per_class = class_metrics(&confusion);
    let present: Vec<&ClassMetrics> = per_class.iter().filter(|m| m.support > 0).collect();
    let macro_f1 = if present.is_empty() {
        0.0
    } else {
        present.iter().map(|m| m.f1).sum::<f64>() / present.len() as f64
    };

    tracing::info!(
        "evaluated {} labelled records: {correct} correct",
        predictions.len()
    );

    AccuracyReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        source: source.to_string(),
        total_records: records.len(),
        evaluated: predictions.len(),
        unlabelled,
        failed: batch.summary.failed,
        accuracy: ratio(correct, predictions.len()),
        macro_f1,
        per_class,
        confusion,
        predictions,
    }
}
