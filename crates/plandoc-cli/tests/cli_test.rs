//! End-to-end tests for the `plandoc` binary.
//!
//! Each test runs the compiled binary against its own temporary base
//! directory, passed with `--base-dir` so no user config is consulted.

use std::process::{Command, Output};

use plandoc_core::problems::load_problems;
use plandoc_core::state::load_state;
use plandoc_test_utils::TestWorkspace;

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn plandoc(ws: &TestWorkspace, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plandoc"))
        .arg("--base-dir")
        .arg(ws.base())
        .args(args)
        .env_remove("PLANDOC_BASE_DIR")
        .output()
        .expect("failed to run plandoc binary")
}

fn stdout_of(ws: &TestWorkspace, args: &[&str]) -> String {
    let output = plandoc(ws, args);
    assert!(
        output.status.success(),
        "plandoc {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[test]
fn new_then_list() {
    let ws = TestWorkspace::new();

    let out = stdout_of(&ws, &["new", "auth", "--requirement", "Users can log in."]);
    assert!(out.contains("Project created"), "unexpected output: {out}");

    let out = stdout_of(&ws, &["list"]);
    assert!(out.contains("auth"), "unexpected output: {out}");

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&ws, &["list", "--json"]))
        .expect("list --json should print JSON");
    assert_eq!(json[0]["name"], "auth");
    assert_eq!(json[0]["has_state"], true);
}

#[test]
fn new_twice_fails() {
    let ws = TestWorkspace::new();
    stdout_of(&ws, &["new", "auth", "--requirement", "x"]);

    let output = plandoc(&ws, &["new", "auth", "--requirement", "y"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "unexpected stderr: {stderr}");
}

#[test]
fn new_requires_requirement() {
    let ws = TestWorkspace::new();
    let output = plandoc(&ws, &["new", "auth"]);
    assert!(!output.status.success());
}

#[test]
fn checkpoint_and_state_set() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("auth");

    let out = stdout_of(
        &ws,
        &["checkpoint", "auth", "planning", "started", "--timestamp", "2024-01-01"],
    );
    assert_eq!(out.trim(), "- **[2024-01-01]** `planning`: started");

    stdout_of(&ws, &["state", "set", "auth", "summary", "Login flow drafted."]);

    let state = load_state(&project).unwrap();
    assert_eq!(state.summary, "Login flow drafted.");
    assert_eq!(state.checkpoints, "- **[2024-01-01]** `planning`: started");

    let json: serde_json::Value = serde_json::from_str(&stdout_of(
        &ws,
        &["state", "show", "auth", "--section", "summary", "--json"],
    ))
    .unwrap();
    assert_eq!(json["summary"], "Login flow drafted.");
    assert!(json.get("testing").is_none());
}

#[test]
fn problem_add_and_filtered_list() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("auth");

    stdout_of(&ws, &["problem", "add", "auth", "Crash on save"]);
    stdout_of(
        &ws,
        &["problem", "add", "auth", "Slow start", "--status", "resolved", "--severity", "low"],
    );

    assert_eq!(load_problems(&project, None).unwrap().len(), 2);

    let out = stdout_of(&ws, &["problem", "list", "auth", "--status", "resolved"]);
    assert!(out.contains("Slow start"), "unexpected output: {out}");
    assert!(!out.contains("Crash on save"), "unexpected output: {out}");
}

#[test]
fn unknown_project_is_an_error() {
    let ws = TestWorkspace::new();
    let output = plandoc(&ws, &["show", "ghost"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "unexpected stderr: {stderr}");
}

#[test]
fn state_set_unknown_section_fails_without_rewrite() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("auth");
    let before = ws.read(&project.state_path());

    let output = plandoc(&ws, &["state", "set", "auth", "notes", "text"]);
    assert!(!output.status.success());
    assert_eq!(ws.read(&project.state_path()), before);
}
