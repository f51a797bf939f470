//! CLI handlers for `plandoc problem` subcommands.

use std::path::Path;

use anyhow::Result;

use plandoc_core::NewProblem;
use plandoc_core::problems::{append_problem, load_problems};

use crate::ProblemCommands;
use crate::resolve::resolve_project;

/// Dispatch a `ProblemCommands` variant to the appropriate handler.
pub fn run_problem_command(command: ProblemCommands, base_dir: &Path) -> Result<()> {
    match command {
        ProblemCommands::Add {
            project,
            title,
            description,
            status,
            severity,
        } => {
            let mut problem = NewProblem::new(title);
            if let Some(description) = description {
                problem = problem.description(description);
            }
            if let Some(status) = status {
                problem = problem.status(status);
            }
            if let Some(severity) = severity {
                problem = problem.severity(severity);
            }
            cmd_add(base_dir, &project, &problem)
        }
        ProblemCommands::List {
            project,
            status,
            json,
        } => cmd_list(base_dir, &project, status.as_deref(), json),
    }
}

fn cmd_add(base_dir: &Path, name: &str, problem: &NewProblem) -> Result<()> {
    let project = resolve_project(base_dir, name)?;
    append_problem(&project, problem)?;

    println!(
        "Problem recorded: {} [{} / {}]",
        problem.title,
        problem.effective_status(),
        problem.effective_severity()
    );
    Ok(())
}

fn cmd_list(base_dir: &Path, name: &str, status: Option<&str>, json: bool) -> Result<()> {
    let project = resolve_project(base_dir, name)?;
    let problems = load_problems(&project, status)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&problems)?);
        return Ok(());
    }

    if problems.is_empty() {
        match status {
            Some(s) => println!("No {s} problems in {}.", project.name()),
            None => println!("No problems recorded in {}.", project.name()),
        }
        return Ok(());
    }

    let status_w = problems.iter().map(|p| p.status.len()).max().unwrap_or(6).max(6);
    let severity_w = problems.iter().map(|p| p.severity.len()).max().unwrap_or(8).max(8);

    println!("{:<status_w$}  {:<severity_w$}  TITLE", "STATUS", "SEVERITY");
    for problem in &problems {
        println!(
            "{:<status_w$}  {:<severity_w$}  {}",
            problem.status, problem.severity, problem.title
        );
    }
    Ok(())
}
