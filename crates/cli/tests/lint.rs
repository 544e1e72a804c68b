//! Integration tests for the `scenario-runner lint` subcommand

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, config: serde_json::Value) {
    fs::write(
        dir.path().join(".scenario-runner.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
}

fn lint_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scenario-runner").unwrap();
    cmd.current_dir(dir.path()).arg("lint");
    cmd
}

#[test]
fn empty_lint_command_succeeds_without_running_anything() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{"name": "default", "lint": ""}]
        }),
    );

    lint_cmd(&dir).assert().success();
}

#[cfg(unix)]
#[test]
fn successful_lint_command_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{"name": "default", "lint": "true", "env": {"FOO": "bar"}}]
        }),
    );

    lint_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Lint failed:").not());
}

#[cfg(unix)]
#[test]
fn failing_lint_command_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{"name": "default", "lint": "false"}]
        }),
    );

    lint_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lint failed:"));
}

#[test]
fn deprecated_lint_value_is_rejected_before_spawning() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{"name": "default", "lint": "yamllint"}]
        }),
    );

    lint_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deprecated lint configuration"))
        .stderr(predicate::str::contains("yamllint"));
}

#[test]
fn missing_executable_surfaces_as_lint_failure() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{
                "name": "default",
                "lint": "/nonexistent/linter-binary",
                "via_shell": false
            }]
        }),
    );

    lint_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lint failed:"));
}

#[cfg(unix)]
#[test]
fn scenario_env_overrides_reach_the_linter() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [{
                "name": "default",
                "lint": "test \"$FOO\" = bar",
                "env": {"FOO": "bar"}
            }]
        }),
    );

    lint_cmd(&dir).assert().success();
}

#[cfg(unix)]
#[test]
fn scenario_is_selected_by_name() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        serde_json::json!({
            "scenarios": [
                {"name": "default", "lint": "false"},
                {"name": "clean", "lint": "true"}
            ]
        }),
    );

    lint_cmd(&dir).args(["-s", "clean"]).assert().success();
    lint_cmd(&dir).assert().failure();
}

#[test]
fn unknown_scenario_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, serde_json::json!({"scenarios": []}));

    lint_cmd(&dir)
        .args(["--scenario-name", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'missing' not found"));
}

#[test]
fn missing_configuration_is_fatal() {
    let dir = TempDir::new().unwrap();

    lint_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No scenario-runner configuration"));
}
