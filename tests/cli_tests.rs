// tests/cli_tests.rs - End-to-end tests for the conlog binary
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::Builder;

fn conlog() -> Command {
    Command::cargo_bin("conlog").unwrap()
}

#[test]
fn test_plain_info_to_stdout() {
    conlog()
        .args(["--no-color", "--no-timestamps", "info", "a", "b"])
        .assert()
        .success()
        .stdout("[INFO] - a b\n")
        .stderr("");
}

#[test]
fn test_debug_to_stdout_warn_error_to_stderr() {
    conlog()
        .args(["--no-color", "--no-timestamps", "debug", "x"])
        .assert()
        .success()
        .stdout("[DEBUG] - x\n")
        .stderr("");

    conlog()
        .args(["--no-color", "--no-timestamps", "warn", "careful"])
        .assert()
        .success()
        .stdout("")
        .stderr("[WARN] - careful\n");

    conlog()
        .args(["--no-color", "--no-timestamps", "error", "broken"])
        .assert()
        .success()
        .stdout("")
        .stderr("[ERROR] - broken\n");
}

#[test]
fn test_dashed_message_words() {
    conlog()
        .args(["--no-color", "--no-timestamps", "warn", "-1", "retries", "left"])
        .assert()
        .success()
        .stderr("[WARN] - -1 retries left\n");

    // After LEVEL, flag-looking words are message text too
    conlog()
        .args(["--no-color", "--no-timestamps", "info", "--no-trace", "-x"])
        .assert()
        .success()
        .stdout("[INFO] - --no-trace -x\n");
}

#[test]
fn test_missing_config_with_unknown_extension() {
    conlog()
        .args(["--config", "/nonexistent/conlog.ini", "info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config file format"));
}

#[test]
fn test_colors_on_by_default() {
    conlog()
        .args(["--no-timestamps", "warn", "hot"])
        .assert()
        .success()
        .stderr("\x1b[33m[WARN] - hot\x1b[0m\n");
}

#[test]
fn test_timestamp_prefix() {
    let output = conlog()
        .args(["--no-color", "info", "hello"])
        .output()
        .expect("Failed to execute conlog");

    let result = String::from_utf8(output.stdout).unwrap();
    println!("Timestamped output: {:?}", result);

    assert!(result.starts_with('('));
    assert!(result.ends_with(") - [INFO] - hello\n"));
    assert!(result.contains("AM)") || result.contains("PM)"));
}

#[test]
fn test_error_trace_rendering() {
    conlog()
        .args(["--no-color", "--no-timestamps"])
        .args(["--trace-text", "Error: boom\n at X", "error", "boom"])
        .assert()
        .success()
        .stderr("[ERROR] - Error: boom\n at X\n");

    conlog()
        .args(["--no-color", "--no-timestamps", "--no-trace"])
        .args(["--trace-text", "Error: boom\n at X", "error", "boom"])
        .assert()
        .success()
        .stderr("[ERROR] - boom\n");

    // warn never substitutes the trace
    conlog()
        .args(["--no-color", "--no-timestamps"])
        .args(["--trace-text", "Error: boom\n at X", "warn", "boom"])
        .assert()
        .success()
        .stderr("[WARN] - boom\n");
}

#[test]
fn test_inline_options() {
    conlog()
        .args(["--options", r#"{"colors": false, "timestamps": false}"#])
        .args(["info", "inline"])
        .assert()
        .success()
        .stdout("[INFO] - inline\n");
}

#[test]
fn test_non_boolean_option_rejected() {
    conlog()
        .args(["--options", r#"{"colors": "yes"}"#, "info", "never"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("must be a boolean"));
}

#[test]
fn test_yaml_config_file() {
    let mut config = Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(config, "colors: false").unwrap();
    writeln!(config, "timestamps: false").unwrap();

    conlog()
        .arg("--config")
        .arg(config.path())
        .args(["debug", "from", "yaml"])
        .assert()
        .success()
        .stdout("[DEBUG] - from yaml\n");
}

#[test]
fn test_toml_config_file_type_error() {
    let mut config = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "timestamps = \"no\"").unwrap();

    conlog()
        .arg("--config")
        .arg(config.path())
        .args(["info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timestamps"));
}

#[test]
fn test_unsupported_config_extension() {
    let config = Builder::new().suffix(".ini").tempfile().unwrap();

    conlog()
        .arg("--config")
        .arg(config.path())
        .args(["info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config file format"));
}

#[test]
fn test_clear_without_terminal_prints_nothing() {
    conlog()
        .arg("clear")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}
