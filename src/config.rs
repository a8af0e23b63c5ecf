//! Configuration management for the document editor.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project config file loading (`.doc-editor.toml`)
//! - Layering: CLI > project config > built-in defaults

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::file::DEFAULT_OUTPUT;
use crate::storage::BackendKind;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".doc-editor.toml";

/// Command-line arguments for the document editor
#[derive(Debug, Parser)]
#[command(name = "doc-editor")]
#[command(about = "Builds a sample document, saves it and renders it to the console")]
#[command(version)]
pub struct Args {
    /// Persistence backend
    #[arg(long, value_enum, help = "Where to save the document")]
    pub backend: Option<BackendKind>,

    /// Output file for the file backend
    #[arg(long, help = "Output path for the file backend (default: document.txt)")]
    pub output: Option<PathBuf>,

    /// Explicit project config file
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub backend: Option<BackendKind>,
    pub output: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend: BackendKind,
    /// Target of the file backend
    pub output: PathBuf,
    pub log_level: String,
    /// Config file that contributed settings, if any
    pub project_config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: "info".to_string(),
            project_config_path: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let project = match &args.config {
            Some(path) => Some((path.clone(), ProjectConfig::load(path)?)),
            None => match Self::find_project_config() {
                Some(path) => {
                    let project = ProjectConfig::load(&path)?;
                    Some((path, project))
                }
                None => None,
            },
        };

        Ok(Self::merge(args, project))
    }

    /// Apply CLI arguments over an already loaded project config
    pub fn merge(args: Args, project: Option<(PathBuf, ProjectConfig)>) -> Self {
        let defaults = Config::default();
        let (project_config_path, project) = match project {
            Some((path, project)) => (Some(path), project),
            None => (None, ProjectConfig::default()),
        };

        Config {
            backend: args
                .backend
                .or(project.backend)
                .unwrap_or(defaults.backend),
            output: args.output.or(project.output).unwrap_or(defaults.output),
            log_level: args.log_level,
            project_config_path,
        }
    }

    /// Project config in the working directory, then the user config directory
    fn find_project_config() -> Option<PathBuf> {
        let local = PathBuf::from(PROJECT_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        // User global config: ~/.config/doc-editor/config.toml
        let global = dirs::config_dir()?.join("doc-editor").join("config.toml");
        global.is_file().then_some(global)
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["doc-editor"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = Config::merge(args(&[]), None);
        assert_eq!(config.backend, BackendKind::File);
        assert_eq!(config.output, PathBuf::from("document.txt"));
        assert_eq!(config.log_level, "info");
        assert!(!config.has_project_config());
    }

    #[test]
    fn test_cli_overrides_project_config() {
        let project = ProjectConfig {
            backend: Some(BackendKind::Database),
            output: Some(PathBuf::from("from-project.txt")),
        };
        let config = Config::merge(
            args(&["--backend", "file"]),
            Some((PathBuf::from("p.toml"), project)),
        );

        assert_eq!(config.backend, BackendKind::File);
        assert_eq!(config.output, PathBuf::from("from-project.txt"));
        assert_eq!(config.project_config_path, Some(PathBuf::from("p.toml")));
    }

    #[test]
    fn test_parse_project_config() {
        let project = ProjectConfig::parse("backend = \"database\"\noutput = \"out/doc.txt\"\n")
            .expect("parse config");
        assert_eq!(project.backend, Some(BackendKind::Database));
        assert_eq!(project.output, Some(PathBuf::from("out/doc.txt")));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(ProjectConfig::parse("colour = \"blue\"").is_err());
        assert!(ProjectConfig::parse("backend = \"sqlite\"").is_err());
    }
}
