use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn gomojo() -> Command {
    Command::cargo_bin("gomojo").unwrap()
}

#[test]
fn writes_sibling_mojo_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stack.go");
    fs::write(&input, include_str!("fixtures/stack.go")).unwrap();

    gomojo().arg(&input).assert().success();

    let output = fs::read_to_string(dir.path().join("stack.mojo")).unwrap();
    assert_eq!(output, include_str!("fixtures/stack.mojo"));
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("noop.go");
    let output = dir.path().join("noop.mojo");
    fs::write(&input, "func Noop() {\n}\n").unwrap();
    fs::write(&output, "stale").unwrap();

    gomojo().arg(&input).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "fn Noop():\n");
}

#[test]
fn explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("noop.go");
    let output = dir.path().join("custom.mojo");
    fs::write(&input, "func Noop() {\n}").unwrap();

    gomojo()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--keep-final-line")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "fn Noop():\n");
}

#[test]
fn missing_argument_is_usage_error() {
    let assert = gomojo().assert().failure().code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"));
}

#[test]
fn extra_argument_is_usage_error() {
    gomojo().args(["a.go", "b.go"]).assert().failure().code(2);
}

#[test]
fn missing_input_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.go");

    gomojo().arg(&input).assert().failure();

    assert!(!dir.path().join("absent.mojo").exists());
}

#[test]
fn malformed_header_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("swap.go");
    fs::write(&input, "func Swap(a, b int) {\n}\n").unwrap();

    let assert = gomojo().arg(&input).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("malformed parameter"));
    assert!(!dir.path().join("swap.mojo").exists());
}

#[test]
fn unrecognized_header_is_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("closure.go");
    fs::write(&input, "\tf := func(x int) {\n\t}\n").unwrap();

    let assert = gomojo()
        .env_remove("RUST_LOG")
        .arg(&input)
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("unrecognized function header"));
    assert!(stderr.contains("f := func(x int) {"));
}
