//! Configuration file management for plandoc.
//!
//! Provides a TOML config file at `~/.config/plandoc/config.toml` and a
//! resolution chain for the base directory: CLI flag > env var > config
//! file > current directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured base directory.
pub const BASE_DIR_ENV: &str = "PLANDOC_BASE_DIR";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub projects: ProjectsSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectsSection {
    /// Repository root that holds `docs/plans`.
    pub base_dir: PathBuf,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the plandoc config directory.
///
/// Uses `$XDG_CONFIG_HOME/plandoc` when set, otherwise `~/.config/plandoc`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("plandoc");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("plandoc")
}

/// Return the path to the plandoc config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse a config file. Returns an error if it does not exist.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write a config file, creating parent dirs as needed.
pub fn save_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct PlandocConfig {
    pub base_dir: PathBuf,
}

impl PlandocConfig {
    /// Resolve the base directory using the chain:
    /// `cli_base_dir` > `PLANDOC_BASE_DIR` env > config file > current directory.
    pub fn resolve(cli_base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = if let Some(dir) = cli_base_dir {
            dir.to_path_buf()
        } else if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(dir)
        } else if let Ok(cfg) = load_config(&config_path()) {
            cfg.projects.base_dir
        } else {
            std::env::current_dir().context("failed to get current directory")?
        };

        tracing::debug!(base_dir = %base_dir.display(), "resolved base directory");
        Ok(Self { base_dir })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        crate::test_util::lock_env()
    }

    #[test]
    fn save_and_load_config_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("plandoc").join("config.toml");

        let original = ConfigFile {
            projects: ProjectsSection {
                base_dir: PathBuf::from("/srv/repo"),
            },
        };
        save_config(&path, &original).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.projects.base_dir, original.projects.base_dir);
    }

    #[test]
    fn load_config_reports_path_on_parse_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "projects = 3").unwrap();

        let msg = format!("{:#}", load_config(&path).unwrap_err());
        assert!(msg.contains("failed to parse config file"), "unexpected error: {msg}");
    }

    #[test]
    fn resolve_with_cli_flag_overrides_all() {
        let _lock = lock_env();

        unsafe { std::env::set_var(BASE_DIR_ENV, "/from/env") };
        let config = PlandocConfig::resolve(Some(Path::new("/from/cli"))).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/from/cli"));
        unsafe { std::env::remove_var(BASE_DIR_ENV) };
    }

    #[test]
    fn resolve_with_env_var_overrides_config_file() {
        let _lock = lock_env();

        unsafe { std::env::set_var(BASE_DIR_ENV, "/from/env") };
        let config = PlandocConfig::resolve(None).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/from/env"));
        unsafe { std::env::remove_var(BASE_DIR_ENV) };
    }

    #[test]
    fn resolve_reads_config_file_from_xdg_dir() {
        let _lock = lock_env();

        let tmp = tempfile::TempDir::new().unwrap();
        let orig_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var(BASE_DIR_ENV) };
        unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };

        let cfg = ConfigFile {
            projects: ProjectsSection {
                base_dir: PathBuf::from("/from/file"),
            },
        };
        save_config(&config_path(), &cfg).unwrap();
        let result = PlandocConfig::resolve(None);

        match orig_xdg {
            Some(x) => unsafe { std::env::set_var("XDG_CONFIG_HOME", x) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(result.unwrap().base_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn resolve_falls_back_to_current_dir() {
        let _lock = lock_env();

        let tmp = tempfile::TempDir::new().unwrap();
        let orig_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var(BASE_DIR_ENV) };
        unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };

        let result = PlandocConfig::resolve(None);

        match orig_xdg {
            Some(x) => unsafe { std::env::set_var("XDG_CONFIG_HOME", x) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }

        assert_eq!(result.unwrap().base_dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn config_path_ends_with_expected_filename() {
        let path = config_path();
        assert!(
            path.ends_with("plandoc/config.toml"),
            "unexpected config path: {}",
            path.display()
        );
    }
}
