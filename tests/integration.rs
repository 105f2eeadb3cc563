/// Integration tests for forscan.
/// Each test runs the binary on a source file (or stdin) and checks stdout/stderr/exit code.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const VALID: &str = "for (i = 0; i <= 10; i++) { System.out.println(i); }";

fn forscan_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_forscan"))
}

/// The binary with every FORSCAN_* setting and RUST_LOG cleared.
fn forscan_cmd() -> Command {
    let mut cmd = Command::new(forscan_bin());
    cmd.env_remove("FORSCAN_MAX_INPUT").env_remove("FORSCAN_JSON").env_remove("RUST_LOG");
    cmd
}

fn run_with(args: &[&str], src: &str, envs: &[(&str, &str)]) -> (String, String, i32) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("loop.java");
    std::fs::write(&file, src).unwrap();
    let mut cmd = forscan_cmd();
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let output = cmd.args(args).arg(&file).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

fn run_inline(src: &str) -> (String, String, i32) {
    run_with(&[], src, &[])
}

fn run_stdin(args: &[&str], stdin: &str) -> (String, String, i32) {
    let output = forscan_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
            child.wait_with_output()
        })
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

// ─── Check tests ───

#[test]
fn test_valid_loop() {
    let (stdout, stderr, code) = run_inline(VALID);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("Compilation successful:\n"));
    assert!(stdout.contains("LexToken(FOR,'for',1,0)"));
    assert!(stdout.contains("LexToken(NUMBER,10,1,17)"));
    assert!(stdout.contains("LexToken(PRINT,'System.out.println',1,28)"));
    assert!(stdout.ends_with("for(i = 0; i <= 10; i++) {\nSystem.out.println(i);\n}\n"));
    assert_eq!(stderr, "");
}

#[test]
fn test_multiline_source() {
    let src = "for (i = 1;\n     i <= 3;\n     i++) {\n    System.out.println(i);\n}\n";
    let (stdout, _stderr, code) = run_inline(src);
    assert_eq!(code, 0);
    assert!(stdout.contains("LexToken(RBRACE,'}',5,"));
    assert!(stdout.contains("for(i = 1; i <= 3; i++) {\nSystem.out.println(i);\n}"));
}

#[test]
fn test_wrong_print_call() {
    let (stdout, _stderr, code) = run_inline("for (i = 0; i <= 10; i++) { println(i); }");
    assert_eq!(code, 1);
    assert_eq!(stdout, "Error: Syntax error at 'println' (line 1)\n");
}

#[test]
fn test_missing_brace() {
    let (stdout, _stderr, code) = run_inline("for (i = 0; i <= 10; i++) { System.out.println(i); ");
    assert_eq!(code, 1);
    assert_eq!(stdout, "Error: Syntax error at EOF\n");
}

#[test]
fn test_illegal_character_reported() {
    let (stdout, stderr, code) = run_inline("for (i # 0; i <= 10; i++) { System.out.println(i); }");
    assert_eq!(code, 1);
    assert!(stderr.contains("Illegal character '#' at line 1"));
    assert!(stdout.contains("Syntax error at '0'"));
}

#[test]
fn test_illegal_character_skipped_on_success() {
    let (stdout, stderr, code) = run_inline("for (i = 0 # ; i <= 10; i++) { System.out.println(i); }");
    assert_eq!(code, 0);
    assert_eq!(stderr.matches("Illegal character").count(), 1);
    assert!(stdout.starts_with("Compilation successful:"));
}

#[test]
fn test_rendering_checks_again() {
    let (first, _, code) = run_with(&["--no-tokens"], VALID, &[]);
    assert_eq!(code, 0);
    let rendering = first.trim_start_matches("Compilation successful:\n\n");
    let (second, _, code) = run_with(&["--no-tokens"], rendering, &[]);
    assert_eq!(code, 0);
    assert_eq!(first, second);
}

// ─── Output modes ───

#[test]
fn test_json_output() {
    let (stdout, _stderr, code) = run_with(&["--json"], VALID, &[]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["tokens"].as_array().unwrap().len(), 20);
    assert_eq!(value["tokens"][4]["value"], 0);
    assert_eq!(value["rendering"], "for(i = 0; i <= 10; i++) {\nSystem.out.println(i);\n}");
}

#[test]
fn test_json_from_env() {
    let (stdout, _stderr, code) = run_with(&[], "for (", &[("FORSCAN_JSON", "1")]);
    assert_eq!(code, 1);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["error"], "Syntax error at EOF");
}

#[test]
fn test_tokens_command() {
    let (stdout, _stderr, code) = run_with(&["tokens"], "i++ <= 7", &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "LexToken(ID,'i',1,0)\nLexToken(INCREMENT,'++',1,1)\nLexToken(LE,'<=',1,4)\nLexToken(NUMBER,7,1,7)\n");
}

#[test]
fn test_stdin_input() {
    let (stdout, _stderr, code) = run_stdin(&["-"], VALID);
    assert_eq!(code, 0);
    assert!(stdout.contains("System.out.println(i);"));
}

#[test]
fn test_repl_session() {
    let input = format!("{}\n\nfor (\n\nexit\n", VALID);
    let (stdout, _stderr, code) = run_stdin(&["--no-tokens", "repl"], &input);
    assert_eq!(code, 0);
    assert!(stdout.contains("Compilation successful:"));
    assert!(stdout.contains("Error: Syntax error at EOF"));
}

// ─── Usage and config errors ───

#[test]
fn test_input_limit() {
    let (_stdout, stderr, code) = run_with(&["--max-input", "8"], VALID, &[]);
    assert_eq!(code, 2);
    assert!(stderr.contains("limit is 8"));
}

#[test]
fn test_bad_env_limit() {
    let (_stdout, stderr, code) = run_with(&[], VALID, &[("FORSCAN_MAX_INPUT", "huge")]);
    assert_eq!(code, 2);
    assert!(stderr.contains("FORSCAN_MAX_INPUT"));
}

#[test]
fn test_missing_file() {
    let output = forscan_cmd().arg("/nonexistent/loop.java").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_unknown_command() {
    let (_stdout, stderr, code) = run_with(&["frobnicate"], VALID, &[]);
    assert_eq!(code, 2);
    assert!(stderr.contains("unknown command 'frobnicate'"));
}

#[test]
fn test_unknown_command_is_checked_before_reading() {
    let output = forscan_cmd().args(["frobnicate", "/nonexistent/loop.java"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("unknown command 'frobnicate'"));
    assert!(!stderr.contains("cannot read"));
}

#[test]
fn test_repl_takes_no_file() {
    let output = forscan_cmd().args(["repl", "loop.java"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("repl takes no file"));
    assert!(!stderr.contains("cannot read"));
}

#[test]
fn test_settings_from_environment_are_cleared() {
    // An exported FORSCAN_JSON must not leak into the stdin helpers
    std::env::set_var("FORSCAN_JSON", "1");
    let (stdout, _stderr, code) = run_stdin(&["-"], VALID);
    std::env::remove_var("FORSCAN_JSON");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Compilation successful:"));
}
