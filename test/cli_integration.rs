//! CLI Integration Tests for uemu
//!
//! Runs the built binary end to end and checks its printed output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run the uemu binary inside `dir` (so no stray uemu.toml is picked up).
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uemu"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run uemu")
}

fn run(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    run_in(dir.path(), args)
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "uemu failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// ============================================================================
// Parse
// ============================================================================

#[test]
fn test_parse_u32_max() {
    assert_eq!(stdout_of(&run(&["parse", "u32", "4294967295"])), "4294967295");
}

#[test]
fn test_parse_u64_max() {
    assert_eq!(
        stdout_of(&run(&["parse", "u64", "18446744073709551615"])),
        "18446744073709551615"
    );
}

#[test]
fn test_parse_bool_uses_python_style() {
    assert_eq!(stdout_of(&run(&["parse", "bool", "TRUE"])), "True");
    assert_eq!(stdout_of(&run(&["parse", "bool", "0"])), "False");
}

#[test]
fn test_parse_negative_i32() {
    assert_eq!(stdout_of(&run(&["parse", "i32", "-17"])), "-17");
}

#[test]
fn test_parse_failure_exits_nonzero() {
    let output = run(&["parse", "u32", "-1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "stderr: {}", stderr);
}

#[test]
fn test_parse_char_length() {
    let output = run(&["parse", "char", "ab"]);
    assert!(!output.status.success());
}

#[test]
fn test_parse_json() {
    let text = stdout_of(&run(&["--format", "json", "parse", "u32", "4294967295"]));
    let data: serde_json::Value = serde_json::from_str(&text).expect("invalid JSON");
    assert_eq!(data["target"], "u32");
    assert_eq!(data["bits"], -1);
    assert_eq!(data["value"], "4294967295");
    assert_eq!(data["unsigned"], 4294967295u64);

    let text = stdout_of(&run(&["--format", "json", "parse", "i32", "-1"]));
    let data: serde_json::Value = serde_json::from_str(&text).expect("invalid JSON");
    assert!(data["unsigned"].is_null());
}

// ============================================================================
// Compare / convert
// ============================================================================

#[test]
fn test_cmp() {
    assert_eq!(stdout_of(&run(&["cmp", "u32", "4294967295", "0"])), "greater");
    assert_eq!(stdout_of(&run(&["cmp", "u32", "65535", "2147483648"])), "less");
    assert_eq!(
        stdout_of(&run(&["cmp", "u64", "9223372036854775808", "65535"])),
        "greater"
    );
    assert_eq!(stdout_of(&run(&["cmp", "u64", "7", "7"])), "equal");
}

#[test]
fn test_to_double_and_back() {
    assert_eq!(stdout_of(&run(&["to-double", "4294967295"])), "4294967295.0");
    assert_eq!(
        stdout_of(&run(&["from-double", "4294967295.0"])),
        "4294967295 (bits -1)"
    );
}

#[test]
fn test_from_double_out_of_range() {
    let output = run(&["from-double", "1e20"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("precondition"), "stderr: {}", stderr);
}

#[test]
fn test_not_and_widen() {
    assert_eq!(stdout_of(&run(&["not", "0"])), "-1");
    assert_eq!(stdout_of(&run(&["widen", "4294967295"])), "4294967295");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_legacy_ulong() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("uemu.toml"), "[parse]\nulong = \"unsupported\"\n").unwrap();

    let output = run_in(dir.path(), &["parse", "u64", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported"), "stderr: {}", stderr);

    // u32 parsing is unaffected
    assert_eq!(stdout_of(&run_in(dir.path(), &["parse", "u32", "1"])), "1");
}

#[test]
fn test_config_bool_style() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("uemu.toml"), "[output]\nbool_style = \"lower\"\n").unwrap();
    assert_eq!(
        stdout_of(&run_in(dir.path(), &["parse", "bool", "1"])),
        "true"
    );
}
