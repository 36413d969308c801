//! CSV student dataset loader.
//!
//! Reads academic records exported from the student information system.
//! Headers follow the export format (`GPA`, `Core Course Average`,
//! `Attendance Rate`, `Midterm Exam Scores`, `Final Exam Scores`) with
//! snake_case aliases. An optional `Performance` column carries the expected
//! label for accuracy evaluation. Extra columns are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::model::{AcademicInputs, Performance};

/// One row as it appears in the CSV file.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Student ID", alias = "student_id", alias = "id", default)]
    student_id: Option<String>,
    #[serde(rename = "GPA", alias = "gpa")]
    gpa: f64,
    #[serde(rename = "Core Course Average", alias = "core_course_average", alias = "cca")]
    cca: f64,
    #[serde(rename = "Attendance Rate", alias = "attendance_rate", alias = "attendance")]
    attendance: f64,
    #[serde(
        rename = "Midterm Exam Scores",
        alias = "midterm_exam_score",
        alias = "midterm"
    )]
    midterm: f64,
    #[serde(
        rename = "Final Exam Scores",
        alias = "final_exam_score",
        alias = "final_exam"
    )]
    final_exam: f64,
    #[serde(
        rename = "Performance",
        alias = "performance",
        alias = "Category",
        alias = "category",
        alias = "Label",
        alias = "label",
        default
    )]
    performance: Option<String>,
}

/// A student's academic record, optionally labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 1-based data row in the source file.
    pub row: usize,
    pub student_id: Option<String>,
    pub inputs: AcademicInputs,
    /// Expected category, when the dataset is labelled.
    pub label: Option<Performance>,
}

impl StudentRecord {
    /// Display identifier: the student ID, or `row N` when absent.
    pub fn display_id(&self) -> String {
        self.student_id
            .clone()
            .unwrap_or_else(|| format!("row {}", self.row))
    }
}

/// How the attendance column is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceScale {
    /// 0–1, the engine's native scale.
    #[default]
    Fraction,
    /// 0–100, converted by dividing by 100.
    Percent,
}

impl AttendanceScale {
    pub fn to_fraction(self, value: f64) -> f64 {
        match self {
            AttendanceScale::Fraction => value,
            AttendanceScale::Percent => value / 100.0,
        }
    }
}

/// Records parsed from a dataset, plus the rows that were rejected.
#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<StudentRecord>,
    pub rejected: Vec<DatasetError>,
}

impl Dataset {
    /// Number of records carrying a label.
    pub fn labelled_count(&self) -> usize {
        self.records.iter().filter(|r| r.label.is_some()).count()
    }
}

/// Load a CSV dataset from disk.
pub fn load_csv(path: &Path, scale: AttendanceScale) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;

    let dataset = parse_csv_str(&content, scale)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))?;

    tracing::info!(
        "loaded {} records from {} ({} rejected)",
        dataset.records.len(),
        path.display(),
        dataset.rejected.len()
    );
    Ok(dataset)
}

/// Parse CSV content into a dataset (useful for testing).
///
/// A malformed header fails the whole parse; malformed rows are collected in
/// [`Dataset::rejected`].
pub fn parse_csv_str(content: &str, scale: AttendanceScale) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    reader.headers().context("failed to read CSV header")?;

    let mut dataset = Dataset::default();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        let parsed = match result {
            Ok(parsed) => parsed,
            Err(source) => {
                tracing::debug!("skipping row {row}: {source}");
                dataset.rejected.push(DatasetError::Malformed { row, source });
                continue;
            }
        };

        let label = match parsed.performance.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<Performance>() {
                Ok(label) => Some(label),
                Err(_) => {
                    tracing::debug!("skipping row {row}: unknown label '{raw}'");
                    dataset.rejected.push(DatasetError::UnknownLabel {
                        row,
                        label: raw.to_string(),
                    });
                    continue;
                }
            },
        };

        dataset.records.push(StudentRecord {
            row,
            student_id: parsed.student_id.filter(|id| !id.is_empty()),
            inputs: AcademicInputs::new(
                parsed.gpa,
                parsed.cca,
                scale.to_fraction(parsed.attendance),
                parsed.midterm,
                parsed.final_exam,
            ),
            label,
        });
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT_CSV: &str = "\
Student ID,University ID,GPA,Core Course Average,Attendance Rate,Final Exam Scores,Midterm Exam Scores,Project/Assignment Scores,Performance
1001,1,3.5,85,0.95,90,85,88,Excellent
1002,1,1.0,30,0.3,30,30,40,Poor
1003,1,2.5,65,0.75,70,65,70,Satisfactory
";

    #[test]
    fn parse_export_format() {
        let dataset = parse_csv_str(EXPORT_CSV, AttendanceScale::Fraction).unwrap();
        assert!(dataset.rejected.is_empty());
        assert_eq!(dataset.records.len(), 3);

        let first = &dataset.records[0];
        assert_eq!(first.row, 1);
        assert_eq!(first.student_id.as_deref(), Some("1001"));
        assert_eq!(first.inputs, AcademicInputs::new(3.5, 85.0, 0.95, 85.0, 90.0));
        assert_eq!(first.label, Some(Performance::Excellent));
        assert_eq!(dataset.labelled_count(), 3);
    }

    #[test]
    fn parse_snake_case_headers_without_labels() {
        let csv = "gpa,cca,attendance,midterm,final_exam\n2.0,60,0.7,60,65\n";
        let dataset = parse_csv_str(csv, AttendanceScale::Fraction).unwrap();
        assert_eq!(dataset.records.len(), 1);
        let record = &dataset.records[0];
        assert_eq!(record.student_id, None);
        assert_eq!(record.label, None);
        assert_eq!(record.display_id(), "row 1");
    }

    #[test]
    fn percent_attendance_is_scaled() {
        let csv = "gpa,cca,attendance,midterm,final_exam\n3.0,70,85,70,75\n";
        let dataset = parse_csv_str(csv, AttendanceScale::Percent).unwrap();
        assert!((dataset.records[0].inputs.attendance - 0.85).abs() < 1e-12);
    }

    #[test]
    fn bad_rows_are_rejected_not_fatal() {
        let csv = "\
gpa,cca,attendance,midterm,final_exam,performance
3.0,70,0.8,70,75,Good
abc,70,0.8,70,75,Good
3.1,72,0.9,71,77,Average
2.9,66,0.85,69,74,
";
        let dataset = parse_csv_str(csv, AttendanceScale::Fraction).unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.rejected.len(), 2);
        assert_eq!(dataset.rejected[0].row(), 2);
        assert!(matches!(dataset.rejected[0], DatasetError::Malformed { .. }));
        assert!(matches!(
            &dataset.rejected[1],
            DatasetError::UnknownLabel { row: 3, label } if label == "Average"
        ));
        assert_eq!(dataset.records[1].label, None);
        assert_eq!(dataset.records[1].row, 4);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, EXPORT_CSV).unwrap();

        let dataset = load_csv(&path, AttendanceScale::Fraction).unwrap();
        assert_eq!(dataset.records.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_csv(Path::new("does-not-exist.csv"), AttendanceScale::Fraction);
        assert!(result.is_err());
    }
}
