//! The `tsukamoto batch` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tsukamoto_core::batch::{assess_records, BatchReport};
use tsukamoto_core::dataset::load_csv;

use super::fmt_score;
use crate::config::load_config_from;

pub fn execute(input: PathBuf, format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let dataset = load_csv(&input, config.attendance_scale)?;

    for rejected in &dataset.rejected {
        eprintln!("  WARNING: {rejected}");
    }

    let report = assess_records(&dataset.records, config.validate_inputs);

    match config.format(format.as_deref()) {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report, config.precision),
    }

    Ok(())
}

fn print_text(report: &BatchReport, precision: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        "Student",
        "GPA",
        "CCA",
        "Attendance",
        "Midterm",
        "Final",
        "Category",
        "Score",
    ]);

    for outcome in &report.outcomes {
        let id = outcome
            .student_id
            .clone()
            .unwrap_or_else(|| format!("row {}", outcome.row));
        let (category, score) = match (outcome.category, outcome.crisp_value) {
            (Some(category), Some(crisp)) => {
                (category.to_string(), fmt_score(crisp, precision))
            }
            _ => (
                format!("ERROR: {}", outcome.error.as_deref().unwrap_or("unknown")),
                "-".to_string(),
            ),
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(outcome.inputs.gpa),
            Cell::new(outcome.inputs.cca),
            Cell::new(outcome.inputs.attendance),
            Cell::new(outcome.inputs.midterm),
            Cell::new(outcome.inputs.final_exam),
            Cell::new(category),
            Cell::new(score),
        ]);
    }

    println!("{table}");

    let summary = &report.summary;
    println!(
        "\n{} records: {} assessed, {} failed",
        summary.total, summary.assessed, summary.failed
    );
    for (category, count) in &summary.per_category {
        println!("  {category}: {count}");
    }
    if let Some(mean) = summary.mean_crisp {
        println!("Mean score: {}", fmt_score(mean, precision));
    }
}
