//! End-to-end tests for the tasktok binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tasktok(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasktok").unwrap();
    cmd.env("TASKTOK_HOME", home.path())
        .env_remove("TASKTOK_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn format_prints_clock() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["format", "3725"])
        .assert()
        .success()
        .stdout("01:02:05\n");
}

#[test]
fn format_json_has_parts() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["format", "59", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seconds\": 59"))
        .stdout(predicate::str::contains("\"display\": \"00:00:59\""));
}

#[test]
fn presets_lists_builtins() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("25 min Focus"))
        .stdout(predicate::str::contains("1 Hour Focus"));
}

#[test]
fn presets_include_config_entries() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "presets:\n  - name: Deep Work\n    work_minutes: 50\n    break_minutes: 10\n",
    )
    .unwrap();

    tasktok(&home)
        .args(["presets", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 5"))
        .stdout(predicate::str::contains("Deep Work"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
    assert!(home.path().join("config.yaml").exists());

    tasktok(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tasktok(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work_minutes: 25"));
}

#[test]
fn config_path_uses_home_override() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            home.path().join("config.yaml").display().to_string(),
        ));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "timer: [1, 2").unwrap();

    tasktok(&home)
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading configuration"));
}

#[test]
fn run_with_unknown_preset_fails() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["run", "--preset", "marathon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("preset 'marathon'"));
}

#[test]
fn run_rejects_zero_cycles() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["run", "--cycles", "0"])
        .assert()
        .failure();
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    tasktok(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasktok"));
}
