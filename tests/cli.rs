use std::io::Write;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn dotver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotver"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn parse_prints_fields_as_json() {
    let output = dotver(&["parse", "1.2.3.4-beta"]);

    assert!(output.status.success());
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        json!({
            "major": 1,
            "minor": 2,
            "revision": 3,
            "build": 4,
            "release": "beta",
            "significantFields": 4,
            "fields": 5,
            "empty": false
        })
    );
}

#[test]
fn parse_without_release_reports_null() {
    let output = dotver(&["parse", "0.0"]);

    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["release"], Value::Null);
    assert_eq!(report["empty"], true);
}

#[test]
fn parse_invalid_version_fails() {
    let output = dotver(&["parse", "1.x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid version '1.x'"));
    assert!(stderr.contains("not a number"));
}

#[test]
fn compare_prints_sign() {
    assert_eq!(stdout(&dotver(&["compare", "2.0", "2.1"])), "-1");
    assert_eq!(stdout(&dotver(&["compare", "2.1", "2.1.0"])), "0");
    assert_eq!(stdout(&dotver(&["compare", "3.0", "2.9.9"])), "1");
}

#[test]
fn format_with_flags() {
    let output = dotver(&[
        "format",
        "1.2.3.4-rc1",
        "--fields",
        "5",
        "--release",
        "--separator",
        "~",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.3.4~rc1");
}

#[test]
fn format_defaults_to_version_state() {
    assert_eq!(stdout(&dotver(&["format", "1.2-rc"])), "1.2_rc");
    assert_eq!(stdout(&dotver(&["format", "1.2-rc", "--no-release"])), "1.2");
}

#[test]
fn format_reads_config_file_and_flags_override_it() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({ "fieldCount": 4, "releaseSeparator": "+" })
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    assert_eq!(
        stdout(&dotver(&["format", "1.2-rc", "--config", path])),
        "1.2.0.0+rc"
    );
    assert_eq!(
        stdout(&dotver(&["format", "1.2-rc", "--config", path, "--fields", "2"])),
        "1.2+rc"
    );
}

#[test]
fn format_with_missing_config_fails() {
    let output = dotver(&["format", "1.2", "--config", "/nonexistent/dotver.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn log_file_receives_json_lines() {
    let dir = tempfile::TempDir::new().unwrap();
    let log = dir.path().join("logs").join("dotver.log");

    let output = Command::new(env!("CARGO_BIN_EXE_dotver"))
        .args(["compare", "1.0", "1.1", "--log-file", log.to_str().unwrap()])
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(output.status.success());
    let content = std::fs::read_to_string(&log).unwrap();
    let line: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(line["level"], "INFO");
}
