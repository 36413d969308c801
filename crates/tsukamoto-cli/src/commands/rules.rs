//! The `tsukamoto rules` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tsukamoto_core::rules::rules;
use tsukamoto_core::Performance;

pub fn execute(consequent: Option<String>) -> Result<()> {
    let filter = consequent
        .as_deref()
        .map(|s| s.parse::<Performance>().map_err(|e| anyhow::anyhow!("{}", e)))
        .transpose()?;

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "GPA",
        "CCA",
        "Attendance",
        "Midterm",
        "Final",
        "Performance",
        "Value",
    ]);

    let mut shown = 0usize;
    for (index, rule) in rules().iter().enumerate() {
        if filter.is_some_and(|p| p != rule.performance) {
            continue;
        }
        shown += 1;
        table.add_row(vec![
            Cell::new(index),
            Cell::new(rule.gpa),
            Cell::new(rule.cca),
            Cell::new(rule.attendance),
            Cell::new(rule.midterm),
            Cell::new(rule.final_exam),
            Cell::new(rule.performance),
            Cell::new(rule.performance.crisp_value()),
        ]);
    }

    println!("{table}");
    println!("{shown} of {} rules", rules().len());

    Ok(())
}
