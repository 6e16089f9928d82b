mod list;

use clap::Subcommand;

use crate::cli::{Error, catalog::list::ListCommand};

#[derive(Clone, Subcommand)]
pub enum CatalogCommands {
    #[command(alias = "l", about = "List the available service templates")]
    List(ListCommand),
}

impl CatalogCommands {
    pub async fn run(self) -> Result<(), Error> {
        match self {
            Self::List(cmd) => cmd.run().await,
        }
    }
}
