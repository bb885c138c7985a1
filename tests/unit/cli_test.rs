//! Command-line tests for individual cpfcheck commands

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A cpfcheck command isolated from the user's config
fn cpfcheck(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("cpfcheck"));
    cmd.env("CPFCHECK_CONFIG", temp.path().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cpfcheck"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate Brazilian CPF identifiers"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp).assert().success().stdout(predicate::str::contains("cpfcheck v"));
}

#[test]
fn test_validate_valid_argument() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .args(["validate", "52998224725"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VALID    529.982.247-25"))
        .stdout(predicate::str::contains("1 valid, 0 invalid"));
}

#[test]
fn test_validate_invalid_argument_fails() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .args(["validate", "12345678900"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("INVALID  12345678900"))
        .stdout(predicate::str::contains("check digit 2 mismatch: expected 9, found 0"))
        .stderr(predicate::str::contains("1 invalid CPF(s)"));
}

#[test]
fn test_validate_json() {
    let temp = TempDir::new().unwrap();
    let output = cpfcheck(&temp)
        .args(["--json", "validate", "529.982.247-25", "11111111111"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid_count"], 1);
    assert_eq!(json["invalid_count"], 1);
    assert_eq!(json["reports"][0]["digits"], "52998224725");
    assert_eq!(json["reports"][1]["reason"], "all digits are identical");
}

#[test]
fn test_format() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .args(["format", "52998224725", "123"])
        .assert()
        .success()
        .stdout("529.982.247-25\n123\n");
}

#[test]
fn test_format_requires_argument() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp).arg("format").assert().failure();
}

#[test]
fn test_digits() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .args(["digits", "529.982.247"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Check digits: 25"))
        .stdout(predicate::str::contains("CPF: 529.982.247-25"));
}

#[test]
fn test_digits_rejects_short_base() {
    let temp = TempDir::new().unwrap();
    cpfcheck(&temp)
        .args(["digits", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 9 digits, found 4"));
}
