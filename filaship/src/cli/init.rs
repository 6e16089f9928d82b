//! The `init` wizard: creates a compose file from catalog templates, or adds
//! templates to an existing one.

use std::path::{Path, PathBuf};

use clap::Args;
use filaship_base::PROJECT_NAME_WITH_INITIAL_CAPITAL;
use filaship_compose::ComposeDocument;
use snafu::{OptionExt, ResultExt};

use crate::{
    catalog::{self, ServiceCategory, ServiceTemplate},
    cli::{
        error::{self, Error},
        internal::ComposeFile,
    },
    config::Config,
    scaffold::{self, InitMode, Scaffold},
    ui::{
        Spinner,
        fuzzy_finder::{Choice, ChoiceListExt as _},
        prompt,
    },
};

/// The choice offered in single-selection categories to pick nothing.
const NONE_CHOICE: &str = "none";

#[derive(Args, Clone)]
pub struct InitCommand {
    #[arg(
        short,
        long,
        help = "Compose file to create or extend. Defaults to docker-compose.yml or \
                docker-compose.yaml in the working directory."
    )]
    file: Option<PathBuf>,

    #[arg(short = 'n', long = "project-name", help = "Project name used for the network")]
    project_name: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Comma-separated service templates to add, skipping the interactive selection"
    )]
    services: Vec<String>,

    #[arg(
        short,
        long,
        help = "What to do when the compose file exists: add, recreate or cancel"
    )]
    mode: Option<InitMode>,
}

impl InitCommand {
    /// # Errors
    ///
    /// Fails when a requested template is unknown, the project name is
    /// invalid, the existing file cannot be parsed, or the file cannot be
    /// written.
    pub async fn run(self, config: Config) -> Result<(), Error> {
        let Self { file, project_name, services, mode } = self;

        let requested = services
            .iter()
            .map(|name| catalog::find(name).context(error::TemplateNotFoundSnafu { name }))
            .collect::<Result<Vec<_>, _>>()?;

        // Naming services on the command line turns every question into its default.
        let interactive = requested.is_empty();

        let compose_file = ComposeFile::locate(file, &config.compose_file);
        let mode = if compose_file.exists {
            println!("Docker Compose file {} already exists.", compose_file.path.display());
            match mode {
                Some(mode) => mode,
                None if interactive => ask_mode(),
                None => InitMode::default(),
            }
        } else {
            InitMode::Recreate
        };

        let (mut scaffold, creating) = match mode {
            InitMode::Cancel => {
                println!("Operation cancelled.");
                return Ok(());
            }
            InitMode::Add => {
                let document = ComposeDocument::load(&compose_file.path)?;
                println!("Current services: {}", document.service_names().join(", "));
                (Scaffold::from_existing(document, &config.default_project_name), false)
            }
            InitMode::Recreate => {
                println!("Welcome to {PROJECT_NAME_WITH_INITIAL_CAPITAL}!");
                let project_name = match project_name {
                    Some(name) => name,
                    None if !interactive => config.default_project_name.clone(),
                    None => prompt::ask_text(
                        "What is your project name?",
                        &config.default_project_name,
                        scaffold::validate_project_name,
                    )
                    .await
                    .context(error::ReadAnswerSnafu)?,
                };
                scaffold::validate_project_name(&project_name)
                    .context(error::InvalidProjectNameSnafu)?;
                (Scaffold::new_project(&project_name, &config.compose_version), true)
            }
        };

        let templates = if interactive { select_templates() } else { requested };
        println!("Services join network {}", scaffold.network());
        for template in templates {
            scaffold.add_template(template);
            println!("Added {}", template.description);
        }
        println!("Services: {}", scaffold.document().service_names().join(", "));

        write_document(&compose_file.path, &scaffold.into_document(), creating).await?;

        if creating {
            println!("Docker Compose file created successfully!");
            println!("You can now run: filaship up");
        } else {
            println!("Services added successfully!");
        }
        Ok(())
    }
}

fn ask_mode() -> InitMode {
    let choices = InitMode::ALL
        .into_iter()
        .map(|mode| Choice::new(mode.to_string(), mode.description()))
        .collect::<Vec<_>>();
    choices
        .select("What would you like to do?", false)
        .first()
        .and_then(|value| value.parse().ok())
        .unwrap_or(InitMode::Cancel)
}

/// Asks for the categories to set up, then for the templates of each.
fn select_templates() -> Vec<&'static ServiceTemplate> {
    let choices = catalog::categories()
        .into_iter()
        .map(|category| Choice::new(category.to_string(), category.label()))
        .collect::<Vec<_>>();

    choices
        .select("Which categories of services would you like to add?", true)
        .iter()
        .filter_map(|value| value.parse::<ServiceCategory>().ok())
        .flat_map(select_category_templates)
        .collect()
}

fn select_category_templates(category: ServiceCategory) -> Vec<&'static ServiceTemplate> {
    let mut choices = catalog::templates_in(category)
        .into_iter()
        .map(|template| Choice::new(template.name, template.description))
        .collect::<Vec<_>>();

    let multi = category.allows_multi_selection();
    let prompt = if multi {
        format!("Which {} services would you like to add?", category.label())
    } else {
        choices.insert(0, Choice::new(NONE_CHOICE, "None"));
        format!("Which {} service would you like to use?", category.label())
    };

    choices
        .select(&prompt, multi)
        .iter()
        .filter(|name| name.as_str() != NONE_CHOICE)
        .filter_map(|name| catalog::find(name))
        .collect()
}

async fn write_document(
    file_path: &Path,
    document: &ComposeDocument,
    creating: bool,
) -> Result<(), Error> {
    let spinner = Spinner::start(if creating {
        "Creating Docker Compose file..."
    } else {
        "Updating Docker Compose file..."
    });

    let written: Result<(), Error> = async {
        let yaml = document.to_yaml()?;
        tokio::fs::write(file_path, yaml)
            .await
            .context(error::WriteComposeFileSnafu { file_path: file_path.to_path_buf() })
    }
    .await;
    if let Err(err) = written {
        spinner.abandon();
        return Err(err);
    }

    spinner.finish(format!("Wrote {}", file_path.display()));
    tracing::info!(
        "Wrote {} with {} service(s)",
        file_path.display(),
        document.services.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("docker-compose.yml");
        let mut scaffold = Scaffold::new_project("shop", "3.8");
        scaffold.add_template(catalog::find("postgres").unwrap());

        write_document(&file_path, scaffold.document(), true).await.unwrap();

        let written = ComposeDocument::load(&file_path).unwrap();
        assert_eq!(&written, scaffold.document());
    }

    #[tokio::test]
    async fn test_write_document_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("missing").join("docker-compose.yml");

        let result = write_document(&file_path, &ComposeDocument::default(), true).await;

        assert!(matches!(result, Err(Error::WriteComposeFile { .. })));
    }
}
