//! Core data model types for tsukamoto.
//!
//! These are the fundamental types the engine uses to represent metrics,
//! linguistic levels, performance labels and membership degrees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five academic metrics fed into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Gpa,
    CoreCourseAverage,
    AttendanceRate,
    MidtermExamScore,
    FinalExamScore,
}

impl Metric {
    /// All metrics in engine order.
    pub const ALL: [Metric; 5] = [
        Metric::Gpa,
        Metric::CoreCourseAverage,
        Metric::AttendanceRate,
        Metric::MidtermExamScore,
        Metric::FinalExamScore,
    ];

    /// Inclusive `(min, max)` domain of valid values.
    pub fn domain(self) -> (f64, f64) {
        match self {
            Metric::Gpa => (0.0, 4.0),
            Metric::AttendanceRate => (0.0, 1.0),
            Metric::CoreCourseAverage | Metric::MidtermExamScore | Metric::FinalExamScore => {
                (0.0, 100.0)
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Gpa => write!(f, "gpa"),
            Metric::CoreCourseAverage => write!(f, "cca"),
            Metric::AttendanceRate => write!(f, "attendance"),
            Metric::MidtermExamScore => write!(f, "midterm"),
            Metric::FinalExamScore => write!(f, "final_exam"),
        }
    }
}

/// Linguistic value of a fuzzified metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Performance category produced by the engine.
///
/// Variants are ordered from worst to best, so `Poor < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Performance {
    Poor,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Satisfactory,
    Good,
    Excellent,
}

impl Performance {
    /// All labels, worst first.
    pub const ALL: [Performance; 5] = [
        Performance::Poor,
        Performance::NeedsImprovement,
        Performance::Satisfactory,
        Performance::Good,
        Performance::Excellent,
    ];

    /// Representative crisp value used as the consequent of a Tsukamoto rule.
    pub fn crisp_value(self) -> f64 {
        match self {
            Performance::Poor => 20.0,
            Performance::NeedsImprovement => 50.0,
            Performance::Satisfactory => 70.0,
            Performance::Good => 85.0,
            Performance::Excellent => 95.0,
        }
    }

    /// Human-readable label, as reported to callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Performance::Poor => "Poor",
            Performance::NeedsImprovement => "Needs Improvement",
            Performance::Satisfactory => "Satisfactory",
            Performance::Good => "Good",
            Performance::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Performance {
    type Err = String;

    /// Lenient parse used for labelled datasets. Accepts display names,
    /// snake/kebab case and the Indonesian labels found in source datasets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "poor" | "kurang" => Ok(Performance::Poor),
            "needs improvement" | "needsimprovement" | "perlu perbaikan" => {
                Ok(Performance::NeedsImprovement)
            }
            "satisfactory" | "memuaskan" => Ok(Performance::Satisfactory),
            "good" | "baik" => Ok(Performance::Good),
            "excellent" | "sangat baik" => Ok(Performance::Excellent),
            _ => Err(format!("unknown performance label: {}", s.trim())),
        }
    }
}

/// The five crisp inputs for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcademicInputs {
    /// Grade point average, 0–4.
    pub gpa: f64,
    /// Core course average, 0–100.
    pub cca: f64,
    /// Attendance rate as a fraction, 0–1.
    pub attendance: f64,
    /// Midterm exam score, 0–100.
    pub midterm: f64,
    /// Final exam score, 0–100.
    pub final_exam: f64,
}

impl AcademicInputs {
    pub fn new(gpa: f64, cca: f64, attendance: f64, midterm: f64, final_exam: f64) -> Self {
        Self {
            gpa,
            cca,
            attendance,
            midterm,
            final_exam,
        }
    }

    /// Value of a single metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Gpa => self.gpa,
            Metric::CoreCourseAverage => self.cca,
            Metric::AttendanceRate => self.attendance,
            Metric::MidtermExamScore => self.midterm,
            Metric::FinalExamScore => self.final_exam,
        }
    }
}

/// Membership degrees of one crisp value in the Low/Medium/High sets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MembershipTriple {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl MembershipTriple {
    pub fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Degree for a linguistic level.
    pub fn degree(&self, level: Level) -> f64 {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }
}

/// Membership triples for all five metrics of one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyProfile {
    pub gpa: MembershipTriple,
    pub cca: MembershipTriple,
    pub attendance: MembershipTriple,
    pub midterm: MembershipTriple,
    pub final_exam: MembershipTriple,
}

impl FuzzyProfile {
    /// Triple for a single metric.
    pub fn get(&self, metric: Metric) -> &MembershipTriple {
        match metric {
            Metric::Gpa => &self.gpa,
            Metric::CoreCourseAverage => &self.cca,
            Metric::AttendanceRate => &self.attendance,
            Metric::MidtermExamScore => &self.midterm,
            Metric::FinalExamScore => &self.final_exam,
        }
    }
}
