//! The `tsukamoto init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("tsukamoto.toml").exists() {
        println!("tsukamoto.toml already exists, skipping.");
    } else {
        std::fs::write("tsukamoto.toml", SAMPLE_CONFIG)?;
        println!("Created tsukamoto.toml");
    }

    std::fs::create_dir_all("data")?;
    let sample_path = std::path::Path::new("data/sample.csv");
    if sample_path.exists() {
        println!("data/sample.csv already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_DATASET)?;
        println!("Created data/sample.csv");
    }

    println!("\nNext steps:");
    println!("  1. Run: tsukamoto assess --gpa 3.1 --cca 72 --attendance 0.85 --midterm 70 --final-exam 78");
    println!("  2. Run: tsukamoto batch --input data/sample.csv");
    println!("  3. Run: tsukamoto accuracy --input data/sample.csv --show-misclassified");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# tsukamoto configuration

# Reject inputs outside GPA 0-4, attendance 0-1, scores 0-100.
validate_inputs = true

# Decimal places for scores in text output.
precision = 2

# "text" or "json"
default_format = "text"

show_membership = false

# Attendance column scale in datasets: "fraction" (0-1) or "percent" (0-100).
attendance_scale = "fraction"
"#;

const SAMPLE_DATASET: &str = "\
Student ID,GPA,Core Course Average,Attendance Rate,Midterm Exam Scores,Final Exam Scores,Performance
1001,3.5,85,0.95,85,90,Good
1002,1.0,30,0.30,30,30,Poor
1003,2.5,65,0.75,65,70,Satisfactory
1004,2.0,60,0.70,60,65,Needs Improvement
1005,3.0,72,0.82,73,80,Satisfactory
1006,3.8,92,0.98,88,95,Excellent
";
