use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn conch() -> Command {
    let mut cmd = Command::cargo_bin("conch").unwrap();
    // Keep host configuration out of the tests.
    cmd.env_remove("CONCH_API");
    cmd.env_remove("CONCH_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    conch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("device"))
        .stdout(predicate::str::contains("hardware"));
}

#[test]
fn version_flag_works() {
    conch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("conch"));
}

#[test]
fn mbo_show_requires_an_input() {
    conch()
        .args(["report", "mbo", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("one of --file or --url is required"));
}

#[test]
fn mbo_show_rejects_both_inputs() {
    conch()
        .args([
            "report",
            "mbo",
            "show",
            "--file",
            "mbo.json",
            "--url",
            "https://example.com/mbo.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn mbo_show_reports_missing_file() {
    conch()
        .args(["report", "mbo", "show", "--file", "/nonexistent/mbo.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn mbo_show_without_endpoint_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{}").unwrap();

    conch()
        .env("HOME", home.path())
        .args(["report", "mbo", "show", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API endpoint configured"));
}

#[test]
fn device_get_without_endpoint_fails_cleanly() {
    let home = TempDir::new().unwrap();

    conch()
        .env("HOME", home.path())
        .args(["device", "get", "SRV001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API endpoint configured"));
}
