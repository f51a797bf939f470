//! CLI handlers for `plandoc state` subcommands and `plandoc checkpoint`.

use std::path::Path;

use anyhow::Result;

use plandoc_core::state::{append_checkpoint, load_state, load_state_sections, save_state};
use plandoc_core::{PartialState, StateSection};

use crate::StateCommands;
use crate::project_cmds::print_indented;
use crate::resolve::resolve_project;

/// Dispatch a `StateCommands` variant to the appropriate handler.
pub fn run_state_command(command: StateCommands, base_dir: &Path) -> Result<()> {
    match command {
        StateCommands::Show {
            project,
            sections,
            json,
        } => cmd_show(base_dir, &project, &sections, json),
        StateCommands::Set {
            project,
            section,
            text,
        } => cmd_set(base_dir, &project, section, &text),
    }
}

fn cmd_show(base_dir: &Path, name: &str, sections: &[StateSection], json: bool) -> Result<()> {
    let project = resolve_project(base_dir, name)?;

    let partial = if sections.is_empty() {
        load_state_sections(&project, &StateSection::ALL)?
    } else {
        load_state_sections(&project, sections)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&partial)?);
        return Ok(());
    }

    for (i, (section, body)) in partial.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", section.header());
        print_indented(body);
    }
    Ok(())
}

fn cmd_set(base_dir: &Path, name: &str, section: StateSection, text: &str) -> Result<()> {
    let project = resolve_project(base_dir, name)?;

    save_state(&project, &PartialState::new().with(section, text.trim()))?;

    println!("Updated {} in {}.", section, project.state_path().display());
    Ok(())
}

/// `plandoc checkpoint <name> <phase> <description>`.
pub fn cmd_checkpoint(
    base_dir: &Path,
    name: &str,
    phase: &str,
    description: &str,
    timestamp: Option<&str>,
) -> Result<()> {
    let project = resolve_project(base_dir, name)?;
    append_checkpoint(&project, phase, description, timestamp)?;

    let state = load_state(&project)?;
    if let Some(line) = state.checkpoints.lines().last() {
        println!("{line}");
    }
    Ok(())
}
