use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Compose { source: filaship_compose::Error },

    #[snafu(display("{source}"))]
    InvalidProjectName { source: crate::scaffold::ProjectNameError },

    #[snafu(display("Service template '{name}' not found"))]
    TemplateNotFound { name: String },

    #[snafu(display("Compose file {} not found", file_path.display()))]
    ComposeFileNotFound { file_path: PathBuf },

    #[snafu(display("Failed to write compose file {}, error: {source}", file_path.display()))]
    WriteComposeFile { file_path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to read answer from terminal, error: {source}"))]
    ReadAnswer { source: std::io::Error },

    #[snafu(display("Failed to serialize compose document as JSON, error: {source}"))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("Failed to run {program}, error: {source}"))]
    SpawnOrchestrator { program: String, source: std::io::Error },

    #[snafu(display("Failed to start containers with {program}: {message}"))]
    OrchestratorFailed { program: String, message: String },

    #[snafu(display("Failed to create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<filaship_compose::Error> for Error {
    fn from(source: filaship_compose::Error) -> Self { Self::Compose { source } }
}
