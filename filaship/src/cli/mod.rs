//! The `filaship` command line interface.
//!
//! Filaship scaffolds `docker-compose` stacks out of ready-made service
//! templates and edits existing compose files without losing anything it does
//! not understand.
//!
//! # Examples
//!
//! ```bash
//! # Create docker-compose.yml interactively
//! filaship init
//!
//! # Add services to the existing compose file without questions
//! filaship init --mode add --services redis,mailhog
//!
//! # Show what a compose file declares
//! filaship parse docker-compose.yml
//!
//! # Start the stack in the background
//! filaship up -d
//! ```

mod catalog;
pub mod error;
mod init;
mod internal;
mod output_format;
mod parse;
mod up;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use filaship_base::{CLI_PROGRAM_NAME, PROJECT_SEMVER};
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{
    catalog::CatalogCommands, init::InitCommand, parse::ParseCommand, up::UpCommand,
};
use crate::{config::Config, shadow};

/// `Cli` is the main entry point for the Filaship Command Line Interface.
#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Filaship CLI: scaffold and edit docker-compose stacks.",
    long_about = "Filaship creates docker-compose files from ready-made service templates \
                  (databases, caches, mail catchers, object storage and more), adds services \
                  to existing files while keeping everything else intact, and starts the \
                  resulting stack.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    #[clap(
        long = "config",
        short = 'c',
        env = "FILASHIP_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/filaship/config.yaml or \
                FILASHIP_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "FILASHIP_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display version information")]
    Version,

    /// Generates a shell completion script for the specified shell.
    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    /// Creates a compose file, or adds services to the existing one.
    #[command(
        alias = "i",
        about = "Initialize a Docker Compose project with interactive service selection"
    )]
    Init(InitCommand),

    #[command(alias = "p", about = "Parse a docker-compose file and display information")]
    Parse(ParseCommand),

    #[command(alias = "u", about = "Start the containers of a docker-compose file")]
    Up(UpCommand),

    /// Browses the built-in service templates.
    #[command(about = "Browse the built-in service templates")]
    Catalog {
        #[command(subcommand)]
        commands: CatalogCommands,
    },
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration and applies the command line overrides.
    ///
    /// An explicitly given file must exist. Without one, the first existing
    /// file among the default locations is loaded, and the defaults are used
    /// if there is none.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match self.config_file.clone().or_else(Config::search_config_file_path)
        {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the selected command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the Tokio
    /// runtime cannot be created, or the command fails.
    ///
    /// # Panics
    ///
    /// Panics if writing the version, completions or help to the terminal
    /// fails.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                std::io::stdout()
                    .write_all(format!("Version: {}\n", *PROJECT_SEMVER).as_bytes())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic()?.as_bytes())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();
        tracing::debug!("Loaded configuration {config:?}");

        let fut = async move {
            match self.commands {
                Some(Commands::Init(cmd)) => cmd.run(config).await?,
                Some(Commands::Parse(cmd)) => cmd.run().await?,
                Some(Commands::Up(cmd)) => return cmd.run(config).await,
                Some(Commands::Catalog { commands }) => commands.run().await?,
                _ => {
                    let help = Self::command().render_long_help().ansi().to_string();
                    std::io::stderr()
                        .write_all(help.as_bytes())
                        .expect("Failed to write to stderr");
                    return Ok(-1);
                }
            }

            Ok(0)
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition() { Cli::command().debug_assert(); }

    #[test]
    fn test_parse_init_arguments() {
        let cli = Cli::try_parse_from([
            "filaship",
            "init",
            "--services",
            "redis,mailhog",
            "--mode",
            "add",
            "--project-name",
            "shop",
        ])
        .unwrap();

        assert!(matches!(cli.commands, Some(Commands::Init(_))));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["filaship", "init", "--mode", "merge"]).is_err());
        assert!(Cli::try_parse_from(["filaship", "parse", "a.yml", "--output", "xml"]).is_err());
    }
}
