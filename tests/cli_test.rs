use std::io::Write;
use std::process::{Command, Stdio};

fn run_binary(stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_detect-missing-tool"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn detect-missing-tool");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
        output.status.success(),
    )
}

#[test]
fn test_structured_stdout_emits_advisory() {
    let (stdout, stderr, success) = run_binary(r#"{"stdout": "zsh: command not found: fzf"}"#);

    assert!(success);
    assert!(stderr.is_empty());
    assert!(stdout.contains("Detected missing tool: 'fzf'"));
    assert!(stdout.contains("Use the cli-tools skill to check if 'fzf' is in the catalog"));
    assert!(stdout.contains("- ripgrep (rg), fd, jq, yq, fzf, bat, eza"));
}

#[test]
fn test_structured_success_emits_nothing() {
    let (stdout, stderr, success) = run_binary(r#"{"stdout": "ls -la"}"#);

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_structured_empty_output_ignores_other_keys() {
    let (stdout, stderr, success) =
        run_binary(r#"{"command": "grep 'not found: x' app.log", "stdout": "", "stderr": ""}"#);

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_raw_text_emits_advisory() {
    let (stdout, _, success) = run_binary("sh: 1: mytool: not found\n");

    assert!(success);
    assert!(stdout.contains("Detected missing tool: 'mytool'"));
}

#[test]
fn test_bare_phrase_emits_unknown_advisory() {
    let (stdout, _, success) = run_binary("command not found");

    assert!(success);
    assert!(stdout.contains("Detected missing tool: 'unknown'"));
}

#[test]
fn test_empty_stdin_emits_nothing() {
    let (stdout, stderr, success) = run_binary("");

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_malformed_json_is_treated_as_raw_text() {
    let (stdout, _, success) = run_binary(r#"{"stdout": "bash: foo: command not found""#);

    assert!(success);
    assert!(stdout.contains("Detected missing tool: 'foo'"));
}

#[test]
fn test_advisory_is_single_block() {
    let (stdout, _, _) = run_binary(r#"{"output": "zsh: command not found: rg"}"#);

    assert_eq!(stdout.matches("<system-reminder>").count(), 1);
    assert!(stdout.ends_with("</system-reminder>\n"));
}
