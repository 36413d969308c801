//! The static rule base.
//!
//! A hand-authored expert table mapping combinations of linguistic levels
//! to a performance label. It is compiled in and never changes at runtime.
//! Order only matters for the rule indices reported in inference traces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Level, Metric, Performance};

/// A single `IF ... AND ... THEN ...` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub gpa: Level,
    pub cca: Level,
    pub attendance: Level,
    pub midterm: Level,
    pub final_exam: Level,
    pub performance: Performance,
}

impl Rule {
    /// Antecedent level required for a metric.
    pub fn antecedent(&self, metric: Metric) -> Level {
        match metric {
            Metric::Gpa => self.gpa,
            Metric::CoreCourseAverage => self.cca,
            Metric::AttendanceRate => self.attendance,
            Metric::MidtermExamScore => self.midterm,
            Metric::FinalExamScore => self.final_exam,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF gpa is {} AND cca is {} AND attendance is {} AND midterm is {} AND final_exam is {} THEN {}",
            self.gpa, self.cca, self.attendance, self.midterm, self.final_exam, self.performance
        )
    }
}

const fn rule(levels: [Level; 5], performance: Performance) -> Rule {
    Rule {
        gpa: levels[0],
        cca: levels[1],
        attendance: levels[2],
        midterm: levels[3],
        final_exam: levels[4],
        performance,
    }
}

use Level::{High as H, Low as L, Medium as M};
use Performance::*;

/// Antecedent order: gpa, cca, attendance, midterm, final_exam.
static RULES: [Rule; 58] = [
    rule([L, L, L, L, L], Poor),
    rule([L, L, L, L, M], Poor),
    rule([L, L, L, M, L], Poor),
    rule([L, L, M, L, L], Poor),
    rule([L, M, L, L, L], Poor),
    rule([M, L, L, L, L], Poor),

    rule([M, M, M, L, M], NeedsImprovement),
    rule([M, M, M, M, L], NeedsImprovement),
    rule([M, M, L, M, M], NeedsImprovement),
    rule([M, L, M, M, M], NeedsImprovement),
    rule([L, M, M, M, M], NeedsImprovement),
    rule([L, L, M, M, M], NeedsImprovement),
    rule([L, M, L, M, M], NeedsImprovement),
    rule([L, M, M, L, M], NeedsImprovement),
    rule([L, M, M, M, L], NeedsImprovement),
    rule([M, L, L, M, M], NeedsImprovement),
    rule([M, L, M, L, M], NeedsImprovement),
    rule([M, L, M, M, L], NeedsImprovement),
    rule([M, M, L, L, M], NeedsImprovement),
    rule([M, M, L, M, L], NeedsImprovement),
    rule([M, M, M, L, L], NeedsImprovement),
    rule([L, L, H, M, M], NeedsImprovement),
    rule([L, M, L, L, M], NeedsImprovement),
    rule([M, L, L, L, M], NeedsImprovement),

    rule([M, M, M, M, M], Satisfactory),
    rule([H, M, M, M, M], Satisfactory),
    rule([M, H, M, M, M], Satisfactory),
    rule([M, M, H, M, M], Satisfactory),
    rule([M, M, M, H, M], Satisfactory),
    rule([M, M, M, M, H], Satisfactory),
    rule([H, H, M, M, M], Satisfactory),
    rule([H, M, H, M, M], Satisfactory),
    rule([H, M, M, H, M], Satisfactory),
    rule([H, M, M, M, H], Satisfactory),
    rule([M, H, H, M, M], Satisfactory),
    rule([M, H, M, H, M], Satisfactory),
    rule([M, H, M, M, H], Satisfactory),
    rule([M, M, H, H, M], Satisfactory),
    rule([M, M, H, M, H], Satisfactory),
    rule([M, M, M, H, H], Satisfactory),

    rule([H, H, H, M, M], Good),
    rule([H, H, M, H, M], Good),
    rule([H, H, M, M, H], Good),
    rule([H, M, H, H, M], Good),
    rule([H, M, H, M, H], Good),
    rule([H, M, M, H, H], Good),
    rule([M, H, H, H, M], Good),
    rule([M, H, H, M, H], Good),
    rule([M, H, M, H, H], Good),
    rule([M, M, H, H, H], Good),
    rule([H, H, H, H, M], Good),
    rule([H, H, H, M, H], Good),
    rule([H, H, M, H, H], Good),
    rule([H, M, H, H, H], Good),
    rule([M, H, H, H, H], Good),

    rule([H, H, H, H, H], Excellent),
    rule([H, M, H, H, H], Excellent),
    rule([H, H, M, H, H], Excellent),
];

/// The ordered rule base.
pub fn rules() -> &'static [Rule] {
    &RULES
}
