//! CLI handlers for project-level commands.
//!
//! Implements:
//! - `plandoc new <name>`  -- create a project with its three documents
//! - `plandoc list`        -- list projects under the plans root
//! - `plandoc show <name>` -- requirement, state and problem counts

use std::path::Path;

use anyhow::{Context, Result, bail};

use plandoc_core::problems::load_problems;
use plandoc_core::state::load_state;
use plandoc_core::{StateSection, create_project, find_projects, read_requirement};

use crate::resolve::resolve_project;

// -----------------------------------------------------------------------
// plandoc new <name>
// -----------------------------------------------------------------------

pub fn cmd_new(
    base_dir: &Path,
    name: &str,
    requirement: Option<&str>,
    requirement_file: Option<&Path>,
) -> Result<()> {
    let requirement = match (requirement, requirement_file) {
        (Some(text), None) => text.to_owned(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read requirement file: {}", path.display()))?,
        (Some(_), Some(_)) => bail!("pass either --requirement or --requirement-file, not both"),
        (None, None) => bail!("a requirement is required (--requirement or --requirement-file)"),
    };

    let created = create_project(base_dir, name, requirement.trim())
        .with_context(|| format!("failed to create project {name:?}"))?;

    println!("Project created: {}", created.project_dir.display());
    for file in &created.files {
        println!("  {}", file.display());
    }
    Ok(())
}

// -----------------------------------------------------------------------
// plandoc list
// -----------------------------------------------------------------------

pub fn cmd_list(base_dir: &Path, json: bool) -> Result<()> {
    let projects = find_projects(base_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found. Use `plandoc new <name>` to create one.");
        return Ok(());
    }

    let name_w = projects.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);
    println!("{:<name_w$}  STATE  PROBLEMS  PATH", "NAME");
    for project in &projects {
        println!(
            "{:<name_w$}  {:<5}  {:<8}  {}",
            project.name,
            yes_no(project.has_state),
            yes_no(project.has_problems),
            project.project_dir.display(),
        );
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

// -----------------------------------------------------------------------
// plandoc show <name>
// -----------------------------------------------------------------------

pub fn cmd_show(base_dir: &Path, name: &str) -> Result<()> {
    let project = resolve_project(base_dir, name)?;
    let requirement = read_requirement(&project)?;
    let state = load_state(&project)?;
    let problems = load_problems(&project, None)?;

    println!("Project: {}", project.name());
    println!("  Path:         {}", project.path().display());
    let open = problems.iter().filter(|p| p.has_status("open")).count();
    println!("  Problems:     {} ({open} open)", problems.len());

    println!();
    println!("Requirement:");
    match requirement {
        Some(text) if !text.is_empty() => print_indented(&text),
        _ => println!("  (none)"),
    }

    for section in StateSection::ALL {
        println!();
        println!("{}:", section.header());
        let body = state.get(section);
        if body.is_empty() {
            println!("  (empty)");
        } else {
            print_indented(body);
        }
    }
    Ok(())
}

pub(crate) fn print_indented(text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            println!();
        } else {
            println!("  {line}");
        }
    }
}
