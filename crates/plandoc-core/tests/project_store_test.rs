//! Integration tests for project creation and discovery.

use plandoc_core::layout::plans_root;
use plandoc_core::project::{create_project, find_projects, read_requirement};
use plandoc_core::state::load_state;
use plandoc_core::problems::load_problems;
use plandoc_core::templates::{render_initial_problems, render_initial_state};
use plandoc_core::{StateDocument, StoreError};
use plandoc_test_utils::TestWorkspace;

// -----------------------------------------------------------------------
// create
// -----------------------------------------------------------------------

#[test]
fn create_writes_three_documents() {
    let ws = TestWorkspace::new();
    let created = create_project(ws.base(), "auth", "Users can log in.").unwrap();

    assert_eq!(created.project_dir, plans_root(ws.base()).join("auth"));
    assert_eq!(created.files.len(), 3);
    for file in &created.files {
        assert!(file.is_file(), "{} should exist", file.display());
    }

    let project = ws.project("auth");
    assert_eq!(
        ws.read(&project.requirement_path()),
        "# auth - Requirement\n\nUsers can log in.\n"
    );
    assert_eq!(ws.read(&project.state_path()), render_initial_state("auth"));
    assert_eq!(ws.read(&project.problems_path()), render_initial_problems("auth"));
}

#[test]
fn create_fails_when_directory_exists() {
    let ws = TestWorkspace::new();
    ws.make_dir_with("auth", &[]);

    let err = create_project(ws.base(), "auth", "again").unwrap_err();
    assert!(
        matches!(err, StoreError::AlreadyExists { .. }),
        "expected AlreadyExists, got: {err}"
    );
}

#[test]
fn create_twice_fails_and_keeps_first_requirement() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("auth");

    assert!(create_project(ws.base(), "auth", "Replaced").is_err());
    assert_eq!(
        read_requirement(&project).unwrap().as_deref(),
        Some("Test requirement.")
    );
}

#[test]
fn create_rejects_invalid_name() {
    let ws = TestWorkspace::new();
    let err = create_project(ws.base(), "../escape", "x").unwrap_err();
    assert!(matches!(err, StoreError::InvalidName(_)), "got: {err}");
    assert!(!plans_root(ws.base()).exists());
}

#[test]
fn fresh_project_loads_placeholders_and_no_problems() {
    let ws = TestWorkspace::new();
    let project = ws.create_project("auth");

    assert_eq!(load_state(&project).unwrap(), StateDocument::placeholder());
    assert!(load_problems(&project, None).unwrap().is_empty());
}

#[test]
fn read_requirement_missing_file_is_none() {
    let ws = TestWorkspace::new();
    ws.make_dir_with("bare", &[("state.md", "## Summary\n")]);
    assert_eq!(read_requirement(&ws.project("bare")).unwrap(), None);
}

#[test]
fn read_requirement_keeps_multiline_body() {
    let ws = TestWorkspace::new();
    create_project(ws.base(), "auth", "Line one.\n\nLine two.").unwrap();
    assert_eq!(
        read_requirement(&ws.project("auth")).unwrap().as_deref(),
        Some("Line one.\n\nLine two.")
    );
}

// -----------------------------------------------------------------------
// find
// -----------------------------------------------------------------------

#[test]
fn find_without_plans_root_is_empty() {
    let ws = TestWorkspace::new();
    assert!(find_projects(ws.base()).unwrap().is_empty());
}

#[test]
fn find_ignores_directory_with_only_problems() {
    let ws = TestWorkspace::new();
    ws.make_dir_with("orphan", &[("problems.md", "# orphan - Problems\n")]);
    assert!(find_projects(ws.base()).unwrap().is_empty());
}

#[test]
fn find_reports_requirement_only_project() {
    let ws = TestWorkspace::new();
    let dir = ws.make_dir_with("req-only", &[("requirement.md", "# req-only - Requirement\n")]);

    let found = find_projects(ws.base()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "req-only");
    assert_eq!(found[0].project_dir, dir);
    assert!(!found[0].has_state);
    assert!(!found[0].has_problems);
}

#[test]
fn find_accepts_state_only_and_skips_plain_files() {
    let ws = TestWorkspace::new();
    ws.make_dir_with("state-only", &[("state.md", "# state-only - State\n")]);
    std::fs::write(plans_root(ws.base()).join("README.md"), "not a project").unwrap();

    let found = find_projects(ws.base()).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].has_state);
}

#[test]
fn find_lists_created_projects_sorted() {
    let ws = TestWorkspace::new();
    ws.create_project("zeta");
    ws.create_project("alpha");

    let names: Vec<String> = find_projects(ws.base())
        .unwrap()
        .into_iter()
        .map(|p| {
            assert!(p.has_state && p.has_problems);
            p.name
        })
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}
