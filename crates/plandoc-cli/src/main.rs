mod config;
mod problem_cmds;
mod project_cmds;
mod resolve;
mod state_cmds;
#[cfg(test)]
mod test_util;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use plandoc_core::StateSection;

use config::PlandocConfig;

#[derive(Parser)]
#[command(name = "plandoc", about = "Track project state and problems in markdown files")]
struct Cli {
    /// Repository root holding docs/plans (overrides PLANDOC_BASE_DIR env var)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a plandoc config file pointing at a base directory
    Init {
        /// Base directory to record (defaults to the current directory)
        path: Option<PathBuf>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create a new project with requirement, state and problems documents
    New {
        /// Project name (becomes the directory name)
        name: String,
        /// Requirement text
        #[arg(long)]
        requirement: Option<String>,
        /// Read the requirement text from a file
        #[arg(long)]
        requirement_file: Option<PathBuf>,
    },
    /// List projects under docs/plans
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a project's requirement, state and problem counts
    Show {
        /// Project name or directory
        project: String,
    },
    /// State document management
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
    /// Append a dated checkpoint to the state document
    Checkpoint {
        /// Project name or directory
        project: String,
        /// Phase name (e.g. planning, implementation, testing)
        phase: String,
        /// What was reached
        description: String,
        /// Date to record instead of today's UTC date
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Problem tracking
    Problem {
        #[command(subcommand)]
        command: ProblemCommands,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StateCommands {
    /// Print state sections
    Show {
        /// Project name or directory
        project: String,
        /// Only show these sections (repeatable)
        #[arg(long = "section")]
        sections: Vec<StateSection>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replace the text of one section
    Set {
        /// Project name or directory
        project: String,
        /// Section: summary, checkpoints, decisions, implementation, testing
        section: StateSection,
        /// New section text
        text: String,
    },
}

#[derive(Subcommand)]
pub enum ProblemCommands {
    /// Record a new problem
    Add {
        /// Project name or directory
        project: String,
        /// Problem title
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Status (default: open)
        #[arg(long)]
        status: Option<String>,
        /// Severity (default: medium)
        #[arg(long)]
        severity: Option<String>,
    },
    /// List recorded problems
    List {
        /// Project name or directory
        project: String,
        /// Only show problems with this status
        #[arg(long)]
        status: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Execute the `plandoc init` command: write config file.
fn cmd_init(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let config_path = config::config_path();

    if config_path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    let base_dir = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let base_dir = base_dir
        .canonicalize()
        .with_context(|| format!("base directory {} does not exist", base_dir.display()))?;

    let cfg = config::ConfigFile {
        projects: config::ProjectsSection {
            base_dir: base_dir.clone(),
        },
    };
    config::save_config(&config_path, &cfg)?;

    println!("Config written to {}", config_path.display());
    println!("  projects.base_dir = {}", base_dir.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_command(cli.command, cli.base_dir.as_deref())
}

/// Dispatch a command. The base directory is only resolved for commands
/// that touch the plans tree.
fn run_command(command: Commands, cli_base_dir: Option<&Path>) -> anyhow::Result<()> {
    let base_dir = || -> anyhow::Result<PathBuf> {
        Ok(PlandocConfig::resolve(cli_base_dir)?.base_dir)
    };

    match command {
        Commands::Init { path, force } => cmd_init(path.as_deref(), force),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "plandoc", &mut std::io::stdout());
            Ok(())
        }
        Commands::New {
            name,
            requirement,
            requirement_file,
        } => project_cmds::cmd_new(
            &base_dir()?,
            &name,
            requirement.as_deref(),
            requirement_file.as_deref(),
        ),
        Commands::List { json } => project_cmds::cmd_list(&base_dir()?, json),
        Commands::Show { project } => project_cmds::cmd_show(&base_dir()?, &project),
        Commands::State { command } => state_cmds::run_state_command(command, &base_dir()?),
        Commands::Checkpoint {
            project,
            phase,
            description,
            timestamp,
        } => state_cmds::cmd_checkpoint(
            &base_dir()?,
            &project,
            &phase,
            &description,
            timestamp.as_deref(),
        ),
        Commands::Problem { command } => {
            problem_cmds::run_problem_command(command, &base_dir()?)
        }
    }
}
