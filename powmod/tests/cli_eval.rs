//! CLI tests for `powmod eval`, `powmod session` and `powmod init`.
//!
//! Spawns the powmod binary and verifies exit codes and printed snapshots.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use powmod::exit_codes;

fn powmod(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_powmod"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run powmod")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn eval_computed_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = powmod(
        temp.path(),
        &["eval", "--base", "5", "--exponent", "3", "--modulus", "13"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "5^3 mod 13 = 8\n");
}

#[test]
fn eval_negative_base_is_parenthesized() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = powmod(
        temp.path(),
        &["eval", "--base", "-7", "--exponent", "2", "--mod", "10"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "(\u{2212}7)^2 mod 10 = 9\n");
}

#[test]
fn eval_invalid_parameter_exits_unavailable() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = powmod(
        temp.path(),
        &[
            "eval",
            "--base=2",
            "--exponent=-1",
            "--modulus=5",
            "--json",
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::UNAVAILABLE));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("json");
    assert_eq!(value["base"]["text"], "2");
    assert_eq!(value["exponent"]["text"], "???");
    assert_eq!(value["exponent"]["error"], "must be non-negative");
    assert_eq!(value["modulus"]["text"], "5");
    assert_eq!(value["power"]["text"], "???");
}

#[test]
fn eval_usage_error_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = powmod(temp.path(), &["eval", "--base", "5"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn eval_uses_configured_engine() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("powmod.toml"), "engine = \"native\"\n").expect("config");
    let output = powmod(
        temp.path(),
        &["eval", "--base", "3", "--exponent", "1", "--modulus", "-5"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "3^1 mod -5 = -2\n");
}

#[test]
fn eval_broken_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("powmod.toml"), "engine = [").expect("config");
    let output = powmod(
        temp.path(),
        &["eval", "--base", "3", "--exponent", "1", "--modulus", "5"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("powmod.toml"), "{stderr}");
}

#[test]
fn session_prints_initial_pass_and_one_line_per_change() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_powmod"))
        .current_dir(temp.path())
        .arg("session")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn session");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"base=5\nexponent=3\nmodulus=13\nnonsense\nmodulus=0\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("session output");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "2^10 mod 1000 = 24\n\
         5^10 mod 1000 = 625\n\
         5^3 mod 1000 = 125\n\
         5^3 mod 13 = 8\n\
         5^3 mod ??? = ???\n  modulus: must be nonzero\n"
    );
}

#[test]
fn init_writes_default_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = powmod(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let written = std::fs::read_to_string(temp.path().join("powmod.toml")).expect("config");
    assert!(written.contains("engine = \"binary\""), "{written}");

    std::fs::write(temp.path().join("powmod.toml"), "engine = \"native\"\n").expect("edit");
    let output = powmod(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let kept = std::fs::read_to_string(temp.path().join("powmod.toml")).expect("config");
    assert_eq!(kept, "engine = \"native\"\n");
}
