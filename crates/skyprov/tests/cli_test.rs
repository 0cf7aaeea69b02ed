//! Integration tests for the `skyprov` CLI binary.
//!
//! Everything here runs offline except the Kafka Connect listing tests,
//! which point `--endpoint` at a local mock server.
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `skyprov` binary with env isolation.
///
/// Clears all `SKYPROV_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn skyprov_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("skyprov");
    cmd.env("HOME", "/tmp/skyprov-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/skyprov-cli-test-nonexistent")
        .env_remove("RUST_LOG")
        .env_remove("SKYPROV_PROFILE")
        .env_remove("SKYPROV_REGION")
        .env_remove("SKYPROV_ENDPOINT")
        .env_remove("SKYPROV_OUTPUT")
        .env_remove("SKYPROV_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn write_doc(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let file = dir.join(name);
    let mut f = std::fs::File::create(&file).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    file
}

const SHARED_DOC: &str = r#"{
  "version": "2021.12",
  "core-network-configuration": {
    "asn-ranges": ["64512-65534"],
    "edge-locations": [{ "location": "us-east-1" }]
  },
  "segments": [{ "name": "shared" }, { "name": "prod" }],
  "segment-actions": [
    { "action": "share", "mode": "attachment-route", "segment": "shared", "share-with": ["*"] }
  ]
}"#;

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = skyprov_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    skyprov_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("services")
            .and(predicate::str::contains("policy"))
            .and(predicate::str::contains("endpoint")),
    );
}

#[test]
fn test_version_flag() {
    skyprov_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skyprov"));
}

#[test]
fn test_invalid_output_format() {
    let output = skyprov_cmd()
        .args(["--output", "xml", "services"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    skyprov_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    skyprov_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Registration table ──────────────────────────────────────────────

#[test]
fn test_services_json() {
    let output = skyprov_cmd()
        .args(["services", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(
        entries[0],
        json!({
            "service": "kafkaconnect",
            "kind": "sdk_data_source",
            "type_name": "aws_mskconnect_connector",
            "name": "Connector",
            "tag_identifier": "arn"
        })
    );
    assert!(entries.iter().all(|e| e["tag_identifier"] == "arn"));
}

#[test]
fn test_services_plain_lists_type_names() {
    skyprov_cmd()
        .args(["services", "-o", "plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("aws_mskconnect_custom_plugin")
                .and(predicate::str::contains("aws_mskconnect_worker_configuration")),
        );
}

#[test]
fn test_services_table() {
    skyprov_cmd()
        .arg("services")
        .assert()
        .success()
        .stdout(predicate::str::contains("Service").and(predicate::str::contains("sdk_resource")));
}

// ── Policy documents ────────────────────────────────────────────────

#[test]
fn test_policy_render_wildcard_share() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(dir.path(), "policy.json", SHARED_DOC);

    skyprov_cmd()
        .args(["policy", "render"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""share-with": "*""#)
                .and(predicate::str::contains(r#""vpn-ecmp-support": false"#)),
        );
}

#[test]
fn test_policy_render_compact_is_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(dir.path(), "policy.json", SHARED_DOC);

    let output = skyprov_cmd()
        .args(["policy", "render", "--compact"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert!(stdout.contains(r#""share-with":"*""#), "{stdout}");
}

#[test]
fn test_policy_render_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(
        dir.path(),
        "policy.yaml",
        "version: \"2021.12\"\nsegments:\n  - name: prod\n    isolate-attachments: true\n",
    );

    skyprov_cmd()
        .args(["policy", "render", "--compact"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""segments":[{"name":"prod","isolate-attachments":true,"require-attachment-acceptance":false}]"#,
        ));
}

#[test]
fn test_policy_render_malformed_share() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(
        dir.path(),
        "policy.json",
        r#"{ "segment-actions": [{ "action": "share", "share-with": "prod" }] }"#,
    );

    let output = skyprov_cmd()
        .args(["policy", "render"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_policy_render_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(dir.path(), "policy.txt", SHARED_DOC);

    let output = skyprov_cmd()
        .args(["policy", "render"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains(".json"));
}

#[test]
fn test_policy_validate_clean() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(dir.path(), "policy.json", SHARED_DOC);

    skyprov_cmd()
        .args(["policy", "validate"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn test_policy_validate_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(
        dir.path(),
        "policy.json",
        r#"{
  "segments": [{ "name": "prod" }, { "name": "prod" }],
  "attachment-policies": [
    { "rule-number": 100, "action": { "association-method": "constant", "segment": "prod" } },
    { "rule-number": 100, "action": { "association-method": "constant", "segment": "dev" } }
  ]
}"#,
    );

    let output = skyprov_cmd()
        .args(["policy", "validate", "-o", "plain"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("duplicate segment name 'prod'"), "{stdout}");
    assert!(stdout.contains("duplicate rule number 100"), "{stdout}");
    assert!(stdout.contains("segment 'dev' is not declared"), "{stdout}");
}

#[test]
fn test_policy_validate_share_conflict_is_warning() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(
        dir.path(),
        "policy.json",
        r#"{
  "segments": [{ "name": "prod" }],
  "segment-actions": [
    { "action": "share", "segment": "prod", "share-with": ["*"], "except": ["prod"] }
  ]
}"#,
    );

    let output = skyprov_cmd()
        .args(["policy", "validate", "-o", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let issues: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(issues[0]["severity"], "warning");
    assert_eq!(issues[0]["path"], "segment-actions[0].share-with");
}

// ── Endpoint resolution ─────────────────────────────────────────────

#[test]
fn test_endpoint_default_region() {
    skyprov_cmd()
        .args(["endpoint", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "https://kafkaconnect.us-east-1.amazonaws.com/\n",
        ));
}

#[test]
fn test_endpoint_region_flag() {
    skyprov_cmd()
        .args(["--region", "eu-west-1", "endpoint", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""service": "kafkaconnect""#)
                .and(predicate::str::contains("kafkaconnect.eu-west-1.amazonaws.com")),
        );
}

#[test]
fn test_endpoint_override_from_env() {
    skyprov_cmd()
        .env("SKYPROV_ENDPOINT", "http://localhost:4566")
        .args(["endpoint", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::diff("http://localhost:4566/\n"));
}

#[test]
fn test_endpoint_from_config_profile() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("skyprov");
    std::fs::create_dir_all(&config_dir).unwrap();
    write_doc(
        &config_dir,
        "config.toml",
        "[profiles.local]\nregion = \"ap-south-1\"\nendpoint = \"http://127.0.0.1:9000\"\n",
    );

    skyprov_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["-p", "local", "endpoint"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ap-south-1")
                .and(predicate::str::contains("http://127.0.0.1:9000/")),
        );
}

fn config_home(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("skyprov");
    std::fs::create_dir_all(&config_dir).unwrap();
    write_doc(&config_dir, "config.toml", contents);
    dir
}

#[test]
fn test_services_output_from_config_defaults() {
    let dir = config_home("[defaults]\noutput = \"json\"\n");

    let output = skyprov_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("services")
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 6);
}

#[test]
fn test_output_flag_wins_over_config_defaults() {
    let dir = config_home("[defaults]\noutput = \"json\"\n");

    skyprov_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["services", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("aws_mskconnect_connector"));
}

#[test]
fn test_unknown_output_in_config_is_config_error() {
    let dir = config_home("[defaults]\noutput = \"xml\"\n");

    let output = skyprov_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("services")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("defaults.output"));
}

#[test]
fn test_endpoint_unknown_profile() {
    let output = skyprov_cmd()
        .args(["--profile", "staging", "endpoint"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("staging"));
}

#[test]
fn test_endpoint_invalid_override() {
    let output = skyprov_cmd()
        .args(["--endpoint", "not a url", "endpoint"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

// ── Kafka Connect listings ──────────────────────────────────────────

async fn run_blocking(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kafkaconnect_connectors_plain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/connectors"))
        .and(query_param("connectorNamePrefix", "orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connectors": [{
                "connectorArn": "arn:aws:kafkaconnect:us-east-1:123456789012:connector/orders-sink/abc",
                "connectorName": "orders-sink",
                "connectorState": "RUNNING",
                "kafkaConnectVersion": "2.7.1"
            }]
        })))
        .mount(&server)
        .await;

    let mut cmd = skyprov_cmd();
    cmd.args(["--endpoint", &server.uri()])
        .args(["kafkaconnect", "connectors", "--prefix", "orders", "-o", "plain"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "arn:aws:kafkaconnect:us-east-1:123456789012:connector/orders-sink/abc\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kafkaconnect_tags_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-amzn-ErrorType", "NotFoundException")
                .set_body_json(json!({ "message": "Resource not found" })),
        )
        .mount(&server)
        .await;

    let mut cmd = skyprov_cmd();
    cmd.args(["--endpoint", &server.uri()]).args([
        "kafkaconnect",
        "tags",
        "arn:aws:kafkaconnect:us-east-1:123456789012:custom-plugin/debezium/xyz",
    ]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("custom-plugins"));
}
