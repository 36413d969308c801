//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LABELLED_CSV: &str = "\
Student ID,GPA,Core Course Average,Attendance Rate,Midterm Exam Scores,Final Exam Scores,Performance
1001,3.5,85,0.95,85,90,Good
1002,1.0,30,0.30,30,30,Poor
1003,2.5,65,0.75,65,70,Satisfactory
1004,2.0,60,0.70,60,65,Needs Improvement
1005,3.0,72,0.82,73,80,Satisfactory
1006,3.8,92,0.98,88,95,Excellent
";

/// Runs the binary in an isolated directory so no user config is picked up.
fn tsukamoto(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tsukamoto").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("TSUKAMOTO_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn assess_args(values: [&str; 5]) -> Vec<String> {
    let names = ["--gpa", "--cca", "--attendance", "--midterm", "--final-exam"];
    let mut args = vec!["assess".to_string()];
    for (name, value) in names.iter().zip(values) {
        args.push(name.to_string());
        args.push(value.to_string());
    }
    args
}

#[test]
fn assess_all_high() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["3.5", "85", "0.95", "85", "90"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Category:    Good"))
        .stdout(predicate::str::contains("Crisp value: 95.00"));
}

#[test]
fn assess_medium_peak_with_trace() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["2.5", "65", "0.75", "65", "70"]))
        .arg("--trace")
        .assert()
        .success()
        .stdout(predicate::str::contains("Satisfactory"))
        .stdout(predicate::str::contains("Rule 24 -> Satisfactory"));
}

#[test]
fn assess_membership_table() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["2.0", "60", "0.70", "60", "65"]))
        .arg("--membership")
        .assert()
        .success()
        .stdout(predicate::str::contains("Needs Improvement"))
        .stdout(predicate::str::contains("0.5000"));
}

#[test]
fn assess_json_output() {
    let dir = TempDir::new().unwrap();
    let output = tsukamoto(&dir)
        .args(assess_args(["2.0", "60", "0.70", "60", "65"]))
        .args(["--format", "json", "--trace"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["category"], "Needs Improvement");
    let crisp = json["crisp_value"].as_f64().unwrap();
    assert!((crisp - 630.0 / 11.0).abs() < 1e-9);
    assert_eq!(json["inference"]["rule_outputs"].as_array().unwrap().len(), 2);
    assert!(json.get("fuzzy_membership").is_none());
}

#[test]
fn assess_no_rule_activated_fails() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["1.0", "85", "0.95", "85", "90"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rule activated"));
}

#[test]
fn assess_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["3.0", "70", "1.5", "70", "70"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("attendance value 1.5 is out of range"));
}

#[test]
fn assess_out_of_range_allowed_without_validation() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(assess_args(["4.5", "85", "0.95", "85", "90"]))
        .arg("--no-validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"));
}

#[test]
fn config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tsukamoto.toml"),
        "default_format = \"json\"\nvalidate_inputs = false\n",
    )
    .unwrap();

    tsukamoto(&dir)
        .args(assess_args(["4.5", "85", "0.95", "85", "90"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"Good\""));
}

#[test]
fn rules_lists_whole_table() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("58 of 58 rules"));
}

#[test]
fn rules_filter_by_consequent() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(["rules", "--consequent", "excellent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 58 rules"));

    tsukamoto(&dir)
        .args(["rules", "--consequent", "average"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown performance label"));
}

#[test]
fn batch_text_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("students.csv"), LABELLED_CSV).unwrap();

    tsukamoto(&dir)
        .args(["batch", "--input", "students.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1004"))
        .stdout(predicate::str::contains("6 records: 6 assessed, 0 failed"));
}

#[test]
fn batch_json_reports_failures() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("students.csv"),
        "gpa,cca,attendance,midterm,final_exam\n2.5,65,0.75,65,70\n1.0,85,0.95,85,90\n",
    )
    .unwrap();

    let output = tsukamoto(&dir)
        .args(["batch", "--input", "students.csv", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["assessed"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["outcomes"][0]["category"], "Satisfactory");
    assert!(json["outcomes"][1]["error"]
        .as_str()
        .unwrap()
        .contains("no rule activated"));
}

#[test]
fn batch_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    tsukamoto(&dir)
        .args(["batch", "--input", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn accuracy_report() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("labelled.csv"), LABELLED_CSV).unwrap();

    tsukamoto(&dir)
        .args([
            "accuracy",
            "--input",
            "labelled.csv",
            "--output",
            "out/report.json",
            "--show-misclassified",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accuracy: 83.3% (5/6)"))
        .stdout(predicate::str::contains("1006: expected Excellent, predicted Good"));

    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("out/report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["evaluated"], 6);
    assert_eq!(report["predictions"].as_array().unwrap().len(), 6);
}

#[test]
fn accuracy_below_threshold_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("labelled.csv"), LABELLED_CSV).unwrap();

    tsukamoto(&dir)
        .args(["accuracy", "--input", "labelled.csv", "--min-accuracy", "0.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the required"));
}

#[test]
fn accuracy_requires_labels() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("plain.csv"),
        "gpa,cca,attendance,midterm,final_exam\n2.5,65,0.75,65,70\n",
    )
    .unwrap();

    tsukamoto(&dir)
        .args(["accuracy", "--input", "plain.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no labelled records"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    tsukamoto(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tsukamoto.toml"))
        .stdout(predicate::str::contains("Created data/sample.csv"));

    assert!(dir.path().join("tsukamoto.toml").exists());
    assert!(dir.path().join("data/sample.csv").exists());

    // Generated files work with the other commands.
    tsukamoto(&dir)
        .args(["accuracy", "--input", "data/sample.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/6"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    tsukamoto(&dir).arg("init").assert().success();

    tsukamoto(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
