//! CLI integration tests
//!
//! Run the `lineage` binary against JSON fixtures written to a temp dir.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn lineage(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lineage"))
        .args(["--log-format", "json"])
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

const VALID_PERSON: &str = r#"{
    "birthDate": "1950-04-12",
    "residences": [{ "location": "Leeds", "startDate": "1950-04-13" }],
    "occupations": [{ "location": "Clerk", "startDate": "1972-09-01" }]
}"#;

#[test]
fn test_validate_valid_person() {
    let dir = TempDir::new().unwrap();
    let person = write(&dir, "person.json", VALID_PERSON);

    let output = lineage(&["validate", person.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "valid");
}

#[test]
fn test_validate_reports_issues_and_fails() {
    let dir = TempDir::new().unwrap();
    let person = write(
        &dir,
        "person.json",
        r#"{
            "birthDate": "1950-04-12",
            "residences": [
                { "location": "Leeds", "startDate": "1950-04-13" },
                { "location": "York", "startDate": "1970-01-01" }
            ],
            "occupations": [{ "location": "Clerk", "startDate": "1972-09-01" }]
        }"#,
    );

    let output = lineage(&["validate", person.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("residences[0]: Previous entry must have an end date (residence 1)."),
        "Unexpected output: {}",
        stdout
    );
}

#[test]
fn test_validate_with_config_and_passing() {
    let dir = TempDir::new().unwrap();
    let person = write(
        &dir,
        "person.json",
        r#"{
            "birthDate": "1950-04-12",
            "residences": [{ "location": "Leeds", "startDate": "1950-04-13" }],
            "occupations": [{ "location": "Clerk", "startDate": "1972-09-01" }],
            "relationship": { "kind": "spouse", "counterpart": 8, "establishedDate": "1960-01-01" }
        }"#,
    );
    let passing = write(
        &dir,
        "passing.json",
        r#"{ "dateOfPassing": "2020-03-01", "causes": ["Age"],
             "burialPlaces": [{ "location": "St Mary's", "startDate": "2020-03-01" }] }"#,
    );
    let config = write(&dir, "lineage.toml", "min_spouse_age_years = 16\n");

    let output = lineage(&[
        "validate",
        person.to_str().unwrap(),
        "--passing",
        passing.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("at least 16 years after birth date"));
    assert!(!stdout.contains("burialPlaces"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let person = write(&dir, "person.json", VALID_PERSON);
    let config = write(&dir, "lineage.toml", "min_spouse_age_years = 0\n");

    let output = lineage(&[
        "validate",
        person.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_CONFIG"), "Stderr: {}", stderr);
}

#[test]
fn test_describe_achievement_entry() {
    let dir = TempDir::new().unwrap();
    let entry = write(
        &dir,
        "entry.json",
        r#"{
            "entityType": "Achievement",
            "entityId": "31",
            "action": "Create",
            "newSnapshot": "{\"familyMemberName\":\"Ruben Hunter\",\"title\":\"MSc\",\"achieveDate\":\"2025-05-15\",\"description\":null}",
            "timestamp": "2025-05-16T09:00:00Z"
        }"#,
    );

    let output = lineage(&["describe", entry.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Achievement recorded.");
    assert_eq!(lines[1].trim(), "Family Member (added): Ruben Hunter");
    assert_eq!(lines[3].trim(), "Achievement Date (added): May 15, 2025");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_describe_entry_with_numeric_entity_id() {
    let dir = TempDir::new().unwrap();
    let entry = write(
        &dir,
        "entry.json",
        r#"{
            "entityType": "FamilyMember",
            "entityId": 12,
            "action": "Delete",
            "oldSnapshot": { "name": "Edith Hunter" },
            "timestamp": "2025-05-16T09:00:00Z"
        }"#,
    );

    let output = lineage(&["describe", entry.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Family member removed.");
    assert_eq!(lines[1].trim(), "Name (removed): Edith Hunter");
}

#[test]
fn test_describe_relationship_with_names_json() {
    let dir = TempDir::new().unwrap();
    let entry = write(
        &dir,
        "entry.json",
        r#"{
            "entityType": "Relationship",
            "action": "Create",
            "newSnapshot": { "familyMember1Id": 4, "familyMember2Id": 5, "startDate": "2001-06-02" },
            "timestamp": "2025-05-16T09:00:00Z"
        }"#,
    );
    let names = write(&dir, "names.json", r#"{ "4": "Ruben Hunter" }"#);

    let output = lineage(&[
        "describe",
        entry.to_str().unwrap(),
        "--names",
        names.to_str().unwrap(),
        "--json",
    ]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"], "Marriage recorded.");
    assert_eq!(json["changes"][0]["newValue"], "Ruben Hunter");
    assert_eq!(json["changes"][1]["newValue"], "Member #5");
}

#[test]
fn test_describe_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = lineage(&["describe", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}
