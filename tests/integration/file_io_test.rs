//! File input and --output handling for the tcv binary

use std::fs;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tcv"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run tcv")
}

#[test]
fn test_reads_existing_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.json");
    fs::write(&input, "{\"key\": [1, 2]}\n").unwrap();

    let output = run(&["json2yaml", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "key:\n- 1\n- 2\n\n");
}

#[test]
fn test_missing_file_is_literal_text() {
    let output = run(&["text", "upper", "no/such/file.txt"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NO/SUCH/FILE.TXT\n");
}

#[test]
fn test_output_file_with_nested_dirs() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("out/nested/result.txt");

    let output = run(&["base64", "encode", "hello", "-o", target.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), "aGVsbG8=");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Output written to"));
    assert!(stdout.contains("result.txt"));
}

#[test]
fn test_quiet_suppresses_confirmation() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("hash.txt");

    let output = run(&[
        "--quiet",
        "hash",
        "sha1",
        "abc",
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn test_stats_go_to_stderr() {
    let output = run(&["--stats", "text", "kebab", "Hello World"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello-world\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Conversion Statistics"));
    assert!(stderr.contains("Operation: text kebab"));
}
