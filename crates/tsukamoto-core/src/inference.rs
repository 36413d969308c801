//! Tsukamoto inference.
//!
//! Each rule fires with the minimum of its five antecedent degrees. A rule
//! that fires contributes its consequent's representative crisp value,
//! weighted by that strength. The crisp output is the weighted average
//! over all rules that fired.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzify::fuzzify_all;
use crate::model::{AcademicInputs, FuzzyProfile, Metric, Performance};
use crate::rules::{rules, Rule};

/// Contribution of one activated rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleOutput {
    /// Index of the rule in the rule base.
    pub rule_index: usize,
    /// Minimum of the rule's antecedent degrees.
    pub firing_strength: f64,
    /// Representative value of the consequent.
    pub crisp_value: f64,
    /// `firing_strength * crisp_value`.
    pub weighted_value: f64,
    /// Consequent label.
    pub performance: Performance,
}

/// Result of running every rule against one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub weighted_sum: f64,
    pub total_weight: f64,
    /// `weighted_sum / total_weight`, or 0 when no rule fired.
    pub crisp_output: f64,
    /// Activated rules in rule-base order.
    pub rule_outputs: Vec<RuleOutput>,
}

impl InferenceResult {
    /// Whether at least one rule fired.
    ///
    /// A `crisp_output` of 0 alone is ambiguous, so callers must check this.
    pub fn fired(&self) -> bool {
        self.total_weight > 0.0
    }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total weight: {:.6}", self.total_weight)?;
        writeln!(f, "Weighted sum: {:.6}", self.weighted_sum)?;
        writeln!(f, "Crisp output: {:.6}", self.crisp_output)?;
        if self.rule_outputs.is_empty() {
            return writeln!(f, "No active rules");
        }
        writeln!(f, "Active rules:")?;
        for out in &self.rule_outputs {
            writeln!(
                f,
                "  Rule {:>2} -> {:<17} strength {:.6}  value {:.1}  weighted {:.6}",
                out.rule_index,
                out.performance.as_str(),
                out.firing_strength,
                out.crisp_value,
                out.weighted_value
            )?;
        }
        Ok(())
    }
}

/// Firing strength of a rule: fuzzy AND via the minimum operator.
pub fn firing_strength(rule: &Rule, profile: &FuzzyProfile) -> f64 {
    Metric::ALL
        .iter()
        .map(|&metric| profile.get(metric).degree(rule.antecedent(metric)))
        .fold(f64::INFINITY, f64::min)
}

/// Run Tsukamoto inference over an already fuzzified profile.
pub fn infer_profile(profile: &FuzzyProfile) -> InferenceResult {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut rule_outputs = Vec::new();

    for (rule_index, rule) in rules().iter().enumerate() {
        let strength = firing_strength(rule, profile);
        if strength <= 0.0 {
            continue;
        }

        let crisp_value = rule.performance.crisp_value();
        let weighted_value = strength * crisp_value;
        weighted_sum += weighted_value;
        total_weight += strength;

        rule_outputs.push(RuleOutput {
            rule_index,
            firing_strength: strength,
            crisp_value,
            weighted_value,
            performance: rule.performance,
        });
    }

    let crisp_output = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    InferenceResult {
        weighted_sum,
        total_weight,
        crisp_output,
        rule_outputs,
    }
}

/// Fuzzify the inputs and run Tsukamoto inference.
pub fn infer(inputs: &AcademicInputs) -> InferenceResult {
    infer_profile(&fuzzify_all(inputs))
}

/// Five-argument form of [`infer`].
pub fn tsukamoto_inference(
    gpa: f64,
    cca: f64,
    attendance: f64,
    midterm: f64,
    final_exam: f64,
) -> InferenceResult {
    infer(&AcademicInputs::new(gpa, cca, attendance, midterm, final_exam))
}
