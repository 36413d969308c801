//! The `tsukamoto assess` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use tsukamoto_core::inference::InferenceResult;
use tsukamoto_core::model::{FuzzyProfile, Metric};
use tsukamoto_core::{assess, defuzzify, AcademicInputs, Assessment, Performance};

use super::fmt_score;
use crate::config::load_config_from;

pub struct AssessArgs {
    pub gpa: f64,
    pub cca: f64,
    pub attendance: f64,
    pub midterm: f64,
    pub final_exam: f64,
    pub trace: bool,
    pub membership: bool,
    pub no_validate: bool,
    pub format: Option<String>,
}

/// JSON view of an assessment; trace and membership only when requested.
#[derive(Serialize)]
struct AssessmentView<'a> {
    category: Performance,
    crisp_value: f64,
    inputs: &'a AcademicInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    fuzzy_membership: Option<&'a FuzzyProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inference: Option<&'a InferenceResult>,
}

pub fn execute(args: AssessArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let inputs = AcademicInputs::new(
        args.gpa,
        args.cca,
        args.attendance,
        args.midterm,
        args.final_exam,
    );

    let assessment = if config.validate_inputs && !args.no_validate {
        assess(&inputs)?
    } else {
        defuzzify(&inputs)?
    };

    let show_membership = args.membership || config.show_membership;

    match config.format(args.format.as_deref()) {
        "json" => {
            let view = AssessmentView {
                category: assessment.category,
                crisp_value: assessment.crisp_value,
                inputs: &assessment.inputs,
                fuzzy_membership: show_membership.then_some(&assessment.membership),
                inference: args.trace.then_some(&assessment.inference),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        _ => print_text(&assessment, show_membership, args.trace, config.precision),
    }

    Ok(())
}

fn print_text(assessment: &Assessment, membership: bool, trace: bool, precision: usize) {
    println!("Category:    {}", assessment.category);
    println!(
        "Crisp value: {}",
        fmt_score(assessment.crisp_value, precision)
    );

    if membership {
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Value", "Low", "Medium", "High"]);
        for metric in Metric::ALL {
            let triple = assessment.membership.get(metric);
            table.add_row(vec![
                Cell::new(metric),
                Cell::new(assessment.inputs.get(metric)),
                Cell::new(format!("{:.4}", triple.low)),
                Cell::new(format!("{:.4}", triple.medium)),
                Cell::new(format!("{:.4}", triple.high)),
            ]);
        }
        println!("\n{table}");
    }

    if trace {
        println!("\n{}", assessment.inference);
    }
}
