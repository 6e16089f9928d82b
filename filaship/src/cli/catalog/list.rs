use clap::Args;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    catalog,
    cli::{Error, error},
    ui::table::ServiceTemplateListExt,
};

/// Prints every service template the wizard offers.
#[derive(Args, Clone)]
pub struct ListCommand {}

impl ListCommand {
    /// # Errors
    ///
    /// This function will return an `Error` if it fails to write to standard
    /// output.
    pub async fn run(self) -> Result<(), Error> {
        tokio::io::stdout()
            .write_all(catalog::templates().render_table().as_bytes())
            .await
            .context(error::WriteStdoutSnafu)?;
        tokio::io::stdout().write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}
