//! End-to-end CLI tests.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"
type User {
  id: ID!
  name: String
}

type Query {
  user(id: ID!): User
}
"#;

const RULES_OK: &str = "User:\n- id: required\n- name: optional\n\nQuery:\n- user: any\n";

fn schemasync() -> Command {
    Command::cargo_bin("schemasync").expect("schemasync binary")
}

fn create_temp_project(rules: &str) -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    fs::write(td.path().join("schema.graphql"), SCHEMA).unwrap();
    fs::write(td.path().join("rules.txt"), rules).unwrap();
    td
}

#[test]
fn test_check_consistent_documents() {
    let temp = create_temp_project(RULES_OK);

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema and rules are consistent"));
}

#[test]
fn test_check_reports_issues_with_exit_code_2() {
    let temp = create_temp_project("User:\n- id: required\n\nGhost:\n- boo: required\n");

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Consistency check found issues:"))
        .stdout(predicate::str::contains(
            " - type User: fields missing in rules → name",
        ))
        .stdout(predicate::str::contains(
            " - Type Query defined in schema but missing in rules",
        ))
        .stdout(predicate::str::contains(
            " - Type Ghost defined in rules but not in schema",
        ));
}

#[test]
fn test_check_explicit_paths() {
    let temp = create_temp_project(RULES_OK);
    fs::create_dir_all(temp.path().join("docs")).unwrap();
    fs::rename(
        temp.path().join("rules.txt"),
        temp.path().join("docs").join("validation.txt"),
    )
    .unwrap();

    schemasync()
        .current_dir(temp.path())
        .args(["check", "--rules", "docs/validation.txt"])
        .assert()
        .success();
}

#[test]
fn test_check_invalid_schema_is_tool_error() {
    let temp = create_temp_project(RULES_OK);
    fs::write(temp.path().join("schema.graphql"), "type User {").unwrap();

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse schema"));
}

#[test]
fn test_check_missing_rules_is_tool_error() {
    let temp = create_temp_project(RULES_OK);
    fs::remove_file(temp.path().join("rules.txt")).unwrap();

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rules.txt"));
}

#[test]
fn test_check_json_format() {
    let temp = create_temp_project("User:\n- id: required\n");

    let output = schemasync()
        .current_dir(temp.path())
        .args(["check", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["schema"], "schemasync.check.v1");
    assert_eq!(report["verdict"]["status"], "fail");
    let issues = report["issues"].as_array().unwrap();
    assert_eq!(issues[0]["kind"], "type_missing_in_rules");
    assert_eq!(issues[0]["type_name"], "Query");
    let user = issues
        .iter()
        .find(|i| i["type_name"] == "User")
        .expect("issue for User");
    assert_eq!(user["kind"], "missing_in_rules");
    assert_eq!(user["fields"], serde_json::json!(["name"]));
}

#[test]
fn test_check_empty_schema_is_tool_error() {
    let temp = create_temp_project("");
    fs::write(temp.path().join("schema.graphql"), "  \n").unwrap();

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("consistent").not())
        .stderr(predicate::str::contains("failed to parse schema"));
}

#[test]
fn test_tool_errors_are_reported_with_logging_off() {
    let temp = create_temp_project(RULES_OK);
    fs::write(temp.path().join("schema.graphql"), "type User {").unwrap();

    schemasync()
        .current_dir(temp.path())
        .env("RUST_LOG", "off")
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: failed to parse schema"));
}

#[test]
fn test_check_strict_fails_on_diagnostics() {
    let rules = format!("{RULES_OK}- stray line\n");
    let temp = create_temp_project(&rules);

    schemasync()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules diagnostics:").not());

    schemasync()
        .current_dir(temp.path())
        .args(["check", "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Rules diagnostics:"));
}

#[test]
fn test_check_out_writes_report_files() {
    let temp = create_temp_project(RULES_OK);

    schemasync()
        .current_dir(temp.path())
        .args(["check", "--out", "artifacts/schemasync"])
        .assert()
        .success();

    let out = temp.path().join("artifacts").join("schemasync");
    assert!(out.join("report.json").exists());
    assert!(out.join("report.md").exists());
}

#[test]
fn test_invalid_format_value() {
    let temp = create_temp_project(RULES_OK);

    schemasync()
        .current_dir(temp.path())
        .args(["check", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_generate_without_endpoint_is_error() {
    let temp = create_temp_project(RULES_OK);

    schemasync()
        .current_dir(temp.path())
        .env_remove("SCHEMASYNC_API_KEY")
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing api_url"));
}

#[test]
fn test_generate_missing_explicit_config() {
    let temp = create_temp_project(RULES_OK);

    schemasync()
        .current_dir(temp.path())
        .args(["generate", "--config", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_generate_unreachable_endpoint_is_transport_error() {
    let temp = create_temp_project(RULES_OK);
    fs::write(
        temp.path().join("config.json"),
        r#"{"api_url": "http://127.0.0.1:9/v1/chat/completions", "model": "m", "timeout_secs": 5}"#,
    )
    .unwrap();

    schemasync()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("generation request failed"));

    assert!(!temp.path().join("outputs").exists());
}

#[test]
fn test_generate_require_consistent_blocks() {
    let temp = create_temp_project("User:\n- id: required\n");

    schemasync()
        .current_dir(temp.path())
        .args([
            "generate",
            "--api-url",
            "http://127.0.0.1:9/v1/chat/completions",
            "--model",
            "m",
            "--require-consistent",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Consistency check found issues:"));

    assert!(!temp.path().join("outputs").exists());
}

#[test]
fn test_check_demo_project_is_consistent() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos");

    schemasync()
        .current_dir(&demos)
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema and rules are consistent"));
}
