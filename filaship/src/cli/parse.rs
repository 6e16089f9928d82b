use std::path::PathBuf;

use clap::Args;
use filaship_compose::ComposeDocument;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{
        error::{self, Error},
        output_format::OutputFormat,
    },
    ui::table::ComposeDocumentExt as _,
};

/// Parses a compose file and prints what it declares.
#[derive(Args, Clone)]
pub struct ParseCommand {
    #[arg(help = "Path to the docker-compose file")]
    file: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = OutputFormat::Table,
        help = "Output format: table (summary), yaml (normalized document) or json"
    )]
    output: OutputFormat,
}

impl ParseCommand {
    /// # Errors
    ///
    /// Fails when the file cannot be parsed or the output cannot be written.
    pub async fn run(self) -> Result<(), Error> {
        let Self { file, output } = self;

        let document = ComposeDocument::load(&file)?;
        tracing::info!(
            "Parsed {} with {} service(s), {} volume(s) and {} network(s)",
            file.display(),
            document.services.len(),
            document.volumes.len(),
            document.networks.len()
        );

        let rendered = render(&document, output)?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await.context(error::WriteStdoutSnafu)?;
        if !rendered.ends_with('\n') {
            stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)?;
        }
        Ok(())
    }
}

fn render(document: &ComposeDocument, output: OutputFormat) -> Result<String, Error> {
    match output {
        OutputFormat::Table => Ok(document.render_summary()),
        OutputFormat::Yaml => Ok(document.to_yaml()?),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&serde_yaml::Value::Mapping(document.to_mapping()))
                .context(error::SerializeJsonSnafu)
        }
    }
}
