use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

fn dump(name: &str, email: &str, phone: &str) -> serde_json::Value {
    json!({
        "name": name,
        "pages": [{
            "number": 1,
            "annotations": [
                { "name": "Correo", "value": email, "type": "Tx" }
            ],
            "tokens": [
                { "text": "Nombre:", "x": 50, "y": 700 },
                { "text": "Ana Maria Lopez", "x": 120, "y": 700 },
                { "text": "Teléfono:", "x": 50, "y": 680 },
                { "text": phone, "x": 130, "y": 680 }
            ]
        }]
    })
}

/// A command isolated from any user configuration file.
fn fieldmatch(dir: &Path) -> Command {
    let config = write_json(dir, "config.json", json!({}));
    let mut cmd = Command::cargo_bin("fieldmatch").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_extract_json() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "a.json", dump("a.pdf", "Ana@Example.com", "+1 555-1234"));

    fieldmatch(dir.path())
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\""))
        .stdout(predicate::str::contains("ana@example.com"))
        .stdout(predicate::str::contains("\"telefono\""));
}

#[test]
fn test_compare_matching_documents() {
    let dir = TempDir::new().unwrap();
    let a = write_json(dir.path(), "a.json", dump("a.pdf", "Ana@Example.com", "+1 555-1234"));
    let b = write_json(dir.path(), "b.json", dump("b.pdf", "ana@example.com", "5551234"));

    fieldmatch(dir.path())
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matchPercentage\": 100"));
}

#[test]
fn test_compare_csv() {
    let dir = TempDir::new().unwrap();
    let a = write_json(dir.path(), "a.json", dump("a.pdf", "ana@example.com", "555 1234"));
    let b = write_json(dir.path(), "b.json", dump("b.pdf", "ana.lopez@example.com", "555 1234"));

    fieldmatch(dir.path())
        .args(["compare", "--format", "csv"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("field,status,label,value1,value2,severity"))
        .stdout(predicate::str::contains("email,difference"));
}

#[test]
fn test_compare_strict_fails_on_difference() {
    let dir = TempDir::new().unwrap();
    let a = write_json(dir.path(), "a.json", dump("a.pdf", "ana@example.com", "555 1234"));
    let b = write_json(dir.path(), "b.json", dump("b.pdf", "luis@example.com", "555 1234"));

    fieldmatch(dir.path())
        .args(["compare", "--strict"])
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Documents differ"));
}

#[test]
fn test_compare_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let a = write_json(dir.path(), "a.json", dump("a.pdf", "ana@example.com", "555 1234"));
    let b = write_json(dir.path(), "b.json", dump("b.pdf", "ana@example.com", "555 1234"));
    let out = dir.path().join("report.json");

    fieldmatch(dir.path())
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(report["file1"], "a.pdf");
    assert_eq!(report["summary"]["totalComparisons"], 3);
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();

    fieldmatch(dir.path())
        .arg("extract")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_unreadable_page_fails_document() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        dir.path(),
        "gap.json",
        json!({ "name": "gap.pdf", "pages": [{ "number": 1 }, { "number": 3 }] }),
    );

    fieldmatch(dir.path())
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read page 2 of gap.pdf"));
}

#[test]
fn test_compare_text_output() {
    let dir = TempDir::new().unwrap();
    let a = write_json(dir.path(), "a.json", dump("a.pdf", "ana@example.com", "555 1234"));
    let b = write_json(dir.path(), "b.json", dump("b.pdf", "ana.lopez@example.com", "555 1234"));

    fieldmatch(dir.path())
        .args(["compare", "--format", "text"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Differences:"))
        .stdout(predicate::str::contains("ana.lopez@example.com"));
}

#[test]
fn test_extract_text_output() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "a.json", dump("a.pdf", "ana@example.com", "555 1234"));

    fieldmatch(dir.path())
        .args(["extract", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 fields (1 form, 2 text)"));
}

#[test]
fn test_config_uses_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = write_json(
        dir.path(),
        "custom.json",
        json!({ "comparison": { "date_order": "day_first" } }),
    );

    Command::cargo_bin("fieldmatch")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "comparison.date_order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day_first"));

    Command::cargo_bin("fieldmatch")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.search_radius", "50"])
        .assert()
        .success();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["extraction"]["search_radius"], 50.0);
    assert_eq!(saved["comparison"]["date_order"], "day_first");
}
