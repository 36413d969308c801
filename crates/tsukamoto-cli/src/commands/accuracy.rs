//! The `tsukamoto accuracy` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tsukamoto_core::dataset::load_csv;
use tsukamoto_core::evaluation::{evaluate, AccuracyReport};
use tsukamoto_core::Performance;

use crate::config::load_config_from;

pub fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    show_misclassified: bool,
    min_accuracy: Option<f64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if let Some(min) = min_accuracy {
        anyhow::ensure!(
            (0.0..=1.0).contains(&min),
            "min-accuracy must be between 0.0 and 1.0"
        );
    }

    let config = load_config_from(config_path.as_deref())?;
    let dataset = load_csv(&input, config.attendance_scale)?;
    anyhow::ensure!(
        dataset.labelled_count() > 0,
        "no labelled records in {} (expected a Performance column)",
        input.display()
    );

    for rejected in &dataset.rejected {
        eprintln!("  WARNING: {rejected}");
    }

    let report = evaluate(
        &dataset.records,
        config.validate_inputs,
        &input.display().to_string(),
    );

    print_summary(&report);
    if show_misclassified {
        print_misclassified(&report);
    }

    if let Some(path) = &output {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    if let Some(min) = min_accuracy {
        if report.accuracy < min {
            eprintln!(
                "Accuracy {:.1}% is below the required {:.1}%",
                report.accuracy * 100.0,
                min * 100.0
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_summary(report: &AccuracyReport) {
    let correct = report.predictions.iter().filter(|p| p.is_correct()).count();
    println!(
        "Accuracy: {:.1}% ({correct}/{})",
        report.accuracy * 100.0,
        report.evaluated
    );
    println!("Macro F1: {:.3}", report.macro_f1);
    if report.unlabelled > 0 {
        println!("Unlabelled records skipped: {}", report.unlabelled);
    }
    if report.failed > 0 {
        println!("Records not assessed: {}", report.failed);
    }

    let mut classes = Table::new();
    classes.set_header(vec!["Category", "Precision", "Recall", "F1", "Support"]);
    for m in &report.per_class {
        classes.add_row(vec![
            Cell::new(m.label),
            Cell::new(format!("{:.3}", m.precision)),
            Cell::new(format!("{:.3}", m.recall)),
            Cell::new(format!("{:.3}", m.f1)),
            Cell::new(m.support),
        ]);
    }
    println!("\n{classes}");

    let mut confusion = Table::new();
    let mut header = vec![Cell::new("Actual \\ Predicted")];
    header.extend(Performance::ALL.iter().map(Cell::new));
    confusion.set_header(header);
    for expected in Performance::ALL {
        let mut row = vec![Cell::new(expected)];
        row.extend(
            Performance::ALL
                .iter()
                .map(|&predicted| Cell::new(report.confusion.get(expected, predicted))),
        );
        confusion.add_row(row);
    }
    println!("\n{confusion}");
}

fn print_misclassified(report: &AccuracyReport) {
    let mut wrong = report.misclassified().peekable();
    if wrong.peek().is_none() {
        println!("\nNo misclassified records.");
        return;
    }

    println!("\nMisclassified:");
    for p in wrong {
        let id = p
            .student_id
            .clone()
            .unwrap_or_else(|| format!("row {}", p.row));
        println!(
            "  {id}: expected {}, predicted {} ({:.2})",
            p.expected, p.predicted, p.crisp_value
        );
    }
}
