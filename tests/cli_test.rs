use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn email_list() -> Command {
    let mut cmd = Command::cargo_bin("email-list").unwrap();
    cmd.env_remove("EMAIL_LIST_OUTPUT_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_human_output_from_stdin() {
    email_list()
        .write_stdin("John (john@example.com), Jane <jane@test.org>, john@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 unique emails"))
        .stdout(predicate::str::contains("1. john@example.com"))
        .stdout(predicate::str::contains("2. jane@test.org"));
}

#[test]
fn test_cli_no_emails_is_success() {
    email_list()
        .write_stdin("hello world, no addresses here")
        .assert()
        .success()
        .stdout(predicate::str::contains("No emails found in the text."));
}

#[test]
fn test_cli_reads_file_and_prints_plain() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "a@b.com A@b.com a@b.com").unwrap();

    email_list()
        .arg(&input)
        .args(["--output-format", "plain"])
        .assert()
        .success()
        .stdout("a@b.com\nA@b.com\n");
}

#[test]
fn test_cli_json_output() {
    email_list()
        .args(["-", "--output-format", "json"])
        .write_stdin("x@y.io")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""emails":["x@y.io"]"#))
        .stdout(predicate::str::contains(r#""count":1"#));
}

#[test]
fn test_cli_export_writes_csv() {
    let dir = TempDir::new().unwrap();

    email_list()
        .arg("--export")
        .arg("--output-dir")
        .arg(dir.path())
        .write_stdin("(john@example.com), jane@test.org;")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let csv = fs::read_to_string(dir.path().join("email_list.csv")).unwrap();
    assert_eq!(csv, "Email Address\njohn@example.com\njane@test.org");
}

#[test]
fn test_cli_export_custom_filename_from_env_dir() {
    let dir = TempDir::new().unwrap();

    email_list()
        .env("EMAIL_LIST_OUTPUT_DIR", dir.path())
        .args(["--export", "--filename", "team.csv"])
        .write_stdin("a@b.com")
        .assert()
        .success();

    assert!(dir.path().join("team.csv").exists());
}

#[test]
fn test_cli_export_skipped_when_empty() {
    let dir = TempDir::new().unwrap();

    email_list()
        .arg("--export")
        .arg("--output-dir")
        .arg(dir.path())
        .write_stdin("nothing here")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to export"));

    assert!(!dir.path().join("email_list.csv").exists());
}

#[test]
fn test_cli_invalid_filename_fails() {
    let dir = TempDir::new().unwrap();

    email_list()
        .arg("--export")
        .arg("--output-dir")
        .arg(dir.path())
        .args(["--filename", "../out.csv"])
        .write_stdin("a@b.com")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid export filename"));
}

#[test]
fn test_cli_missing_input_file() {
    email_list()
        .arg("/definitely/not/here.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_cli_tolerates_invalid_utf8_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mixed.txt");
    fs::write(&input, b"a@b.com \xff c@d.org").unwrap();

    email_list()
        .arg(&input)
        .args(["--output-format", "plain"])
        .assert()
        .success()
        .stdout("a@b.com\nc@d.org\n");
}

#[test]
fn test_cli_tolerates_invalid_utf8_stdin() {
    email_list()
        .args(["--output-format", "plain"])
        .write_stdin(b"\xfe x@y.io".to_vec())
        .assert()
        .success()
        .stdout("x@y.io\n");
}

#[test]
fn test_cli_reports_read_error_once() {
    let output = email_list()
        .arg("/definitely/not/here.txt")
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("Failed to read input file").count(), 1);
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn test_cli_reports_export_error_once() {
    let dir = TempDir::new().unwrap();
    let output = email_list()
        .arg("--export")
        .arg("--output-dir")
        .arg(dir.path())
        .args(["--filename", "../out.csv"])
        .write_stdin("a@b.com")
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr.matches("Invalid export filename").count(), 1);
}
