use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RESPONSE: &str = r#"{"data":{"projects":[
    {"slug":"a","title":"Alpha","description":"","createdAt":"2023-01-01","html":true},
    {"slug":"b","title":"Beta","description":"","createdAt":"2024-01-01","css":true}
]}}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("projects.json"), RESPONSE).unwrap();
        Self { dir }
    }

    fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("folio");
        cmd.env("HOME", self.dir.path())
            .arg("--content")
            .arg(self.dir.path().join("projects.json"));
        cmd
    }
}

#[test]
fn ping_reports_core_wiring() {
    Fixture::new()
        .command()
        .arg("ping")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio_core ping=pong"));
}

#[test]
fn list_filters_by_category() {
    Fixture::new()
        .command()
        .args(["list", "--filter", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beta  /projects/b"))
        .stdout(predicate::str::contains("Alpha").not());
}

#[test]
fn list_unknown_filter_is_empty_but_succeeds() {
    Fixture::new()
        .command()
        .args(["list", "--filter", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 2 projects"));
}

#[test]
fn show_prints_project_detail_as_json() {
    let output = Fixture::new()
        .command()
        .args(["--format", "json", "show", "a"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["slug"], "a");
    assert_eq!(value["html"], true);
}

#[test]
fn broken_content_fails_with_error_message() {
    let fixture = Fixture::new();
    fs::write(fixture.dir.path().join("projects.json"), "{oops").unwrap();

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: invalid content payload"));
}

#[test]
fn logging_writes_into_log_dir() {
    let fixture = Fixture::new();
    let log_dir = fixture.dir.path().join("logs");

    fixture
        .command()
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["--log-level", "info", "list"])
        .assert()
        .success();

    let entries = fs::read_dir(&log_dir).unwrap().count();
    assert!(entries > 0, "expected a log file in {}", log_dir.display());
}
