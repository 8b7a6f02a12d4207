#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

const INTAKE: &str = r#"{
  "client": {
    "name": "Priya Natarajan",
    "company": "Natarajan Design",
    "email": "priya@natarajandesign.example",
    "phone": "+1 555 0188"
  },
  "requirements": {
    "title": "My Cool App",
    "problemToSolve": "Client feedback is scattered across email",
    "description": "A feedback portal for design clients",
    "targetUsers": "Design clients",
    "goals": "One place for every revision request",
    "coreFeatures": ["Comment threads", "Version gallery"],
    "dataFields": ["Project name", "Revision number"],
    "adminAccess": "Studio staff only",
    "fileUploads": "Mockups as PNG",
    "uiPreferences": {
      "designInspiration": "Figma",
      "themeMode": "Dark",
      "animations": "Subtle",
      "mustHaveComponents": ["Gallery", "Activity feed"]
    },
    "technicalDetails": {
      "hosting": "Vercel",
      "database": "PostgreSQL",
      "adminDashboard": true,
      "payments": false
    },
    "timeline": {
      "deadline": "August 2026",
      "budget": "$12,000",
      "mvpFirst": true
    },
    "phases": [
      { "name": "UI/UX Design", "duration": "2 weeks" },
      { "name": "Development", "duration": "5 weeks" }
    ]
  }
}"#;

fn intake_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write intake");
    file
}

#[test]
fn render_prints_the_document_to_stdout() {
    let intake = intake_file(INTAKE);
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("capitolato"));
    let assert = cmd.arg("render").arg(intake.path()).assert().success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("My Cool App"));
    assert!(output.contains("Priya Natarajan"));
}

#[test]
fn export_writes_the_report_into_the_output_directory() {
    let intake = intake_file(INTAKE);
    let output_dir = tempfile::tempdir().expect("tempdir");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("capitolato"));
    cmd.arg("export")
        .arg("--export-output-dir")
        .arg(output_dir.path())
        .arg(intake.path())
        .assert()
        .success();

    let report_path = output_dir
        .path()
        .join("My_Cool_App_Requirements_Report.html");
    let html = std::fs::read_to_string(report_path).expect("report file written");
    assert!(html.contains("My Cool App"));
    assert!(html.contains("MVP First, then scale"));
}

#[test]
fn malformed_intake_fails_fast() {
    let intake = intake_file("not an intake payload");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("capitolato"));
    cmd.arg("render")
        .arg(intake.path())
        .assert()
        .failure()
        .stdout(contains("invalid intake file"));
}

#[test]
fn missing_intake_file_fails_fast() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("capitolato"));
    cmd.arg("render")
        .arg("/nonexistent/intake.json")
        .assert()
        .failure();
}
