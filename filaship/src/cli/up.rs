use std::{
    borrow::Cow,
    ffi::OsString,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use clap::Args;
use snafu::{ResultExt, ensure};
use tokio::process::Command;

use crate::{
    cli::{
        error::{self, Error},
        internal::ComposeFile,
    },
    config::Config,
    ui::Spinner,
};

/// Starts the containers of a compose file with the configured orchestrator.
#[derive(Args, Clone)]
pub struct UpCommand {
    #[arg(short, long, help = "Specify an alternate compose file")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Run containers in the background")]
    detached: bool,
}

impl UpCommand {
    /// Runs `<orchestrator> compose -f <file> up`. Attached runs hand the
    /// terminal to the orchestrator and return its exit code.
    ///
    /// # Errors
    ///
    /// Fails when the compose file does not exist, the orchestrator cannot
    /// be started, or a detached run does not succeed.
    pub async fn run(self, config: Config) -> Result<i32, Error> {
        let Self { file, detached } = self;

        let ComposeFile { path, exists } = ComposeFile::locate(file, &config.compose_file);
        ensure!(exists, error::ComposeFileNotFoundSnafu { file_path: path });

        let program = config.orchestrator_program;
        let args = orchestrator_args(&path, detached);
        tracing::info!("Running {}", command_line(&program, &args));

        let mut command = Command::new(&program);
        let _unused = command.args(&args);

        if !detached {
            let status =
                command.status().await.context(error::SpawnOrchestratorSnafu { program })?;
            return Ok(exit_code(status));
        }

        let spinner = Spinner::start("Starting containers...");
        let output = match command.output().await {
            Ok(output) => output,
            Err(source) => {
                spinner.abandon();
                return Err(Error::SpawnOrchestrator { program, source });
            }
        };
        if !output.status.success() {
            spinner.abandon();
            return error::OrchestratorFailedSnafu {
                program,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .fail();
        }

        spinner.finish("Containers started successfully.");
        Ok(0)
    }
}

fn orchestrator_args(file_path: &Path, detached: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> =
        vec!["compose".into(), "-f".into(), file_path.as_os_str().to_os_string(), "up".into()];
    if detached {
        args.push("-d".into());
    }
    args
}

/// Renders the command as it could be typed into a shell.
fn command_line(program: &str, args: &[OsString]) -> String {
    std::iter::once(Cow::Borrowed(program))
        .chain(args.iter().map(|arg| arg.to_string_lossy()))
        .map(shell_escape::escape)
        .collect::<Vec<_>>()
        .join(" ")
}

fn exit_code(status: ExitStatus) -> i32 { status.code().unwrap_or(1) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_args() {
        let attached = orchestrator_args(Path::new("docker-compose.yml"), false);
        let detached = orchestrator_args(Path::new("docker-compose.yml"), true);

        assert_eq!(attached, ["compose", "-f", "docker-compose.yml", "up"]);
        assert_eq!(detached, ["compose", "-f", "docker-compose.yml", "up", "-d"]);
    }

    #[test]
    fn test_command_line_is_shell_escaped() {
        let args = orchestrator_args(Path::new("my stack/docker-compose.yml"), true);

        assert_eq!(
            command_line("docker", &args),
            "docker compose -f 'my stack/docker-compose.yml' up -d"
        );
    }

    #[tokio::test]
    async fn test_missing_compose_file() {
        let dir = tempfile::tempdir().unwrap();
        let command = UpCommand { file: Some(dir.path().join("absent.yml")), detached: true };

        let result = command.run(Config::default()).await;

        assert!(matches!(result, Err(Error::ComposeFileNotFound { .. })));
    }
}
