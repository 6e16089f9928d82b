//! Building compose documents out of catalog templates.

mod error;
mod init_mode;

use filaship_base::consts;
use filaship_compose::{ComposeDocument, Network};
use serde_yaml::Value;
use snafu::ensure;

pub use self::{error::ProjectNameError, init_mode::InitMode};
use crate::catalog::ServiceTemplate;

const PROJECT_NAME_MIN_LENGTH: usize = 2;

/// Checks that `name` is usable as a project, network and volume prefix:
/// at least two characters out of `[a-z0-9-_]`.
pub fn validate_project_name(name: &str) -> Result<(), ProjectNameError> {
    ensure!(
        name.chars().count() >= PROJECT_NAME_MIN_LENGTH,
        error::TooShortSnafu { min_length: PROJECT_NAME_MIN_LENGTH }
    );
    match name.chars().find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-' | '_')) {
        Some(character) => error::InvalidCharacterSnafu { character }.fail(),
        None => Ok(()),
    }
}

/// A compose document being assembled, together with the network new
/// services are attached to.
#[derive(Debug)]
pub struct Scaffold {
    document: ComposeDocument,
    network: String,
}

impl Scaffold {
    /// Starts an empty document holding a bridge network named after the
    /// project.
    pub fn new_project(project_name: &str, compose_version: &str) -> Self {
        let mut document = ComposeDocument::new(Some(compose_version.to_string()));
        let _unused = document.put_network(Network {
            driver: Some(consts::DEFAULT_NETWORK_DRIVER.to_string()),
            ..Network::new(project_name)
        });
        Self { document, network: project_name.to_string() }
    }

    /// Continues an existing document. New services join its first network;
    /// if it has none, a bridge network called `fallback_network` is added.
    pub fn from_existing(mut document: ComposeDocument, fallback_network: &str) -> Self {
        let first_network = document.network_names().first().map(|name| (*name).to_string());
        let network = first_network.unwrap_or_else(|| {
            let _unused = document.put_network(Network {
                driver: Some(consts::DEFAULT_NETWORK_DRIVER.to_string()),
                ..Network::new(fallback_network)
            });
            fallback_network.to_string()
        });
        Self { document, network }
    }

    pub fn network(&self) -> &str { &self.network }

    pub const fn document(&self) -> &ComposeDocument { &self.document }

    /// Adds the service of `template` with its named volumes, replacing any
    /// service or volume of the same name.
    pub fn add_template(&mut self, template: &ServiceTemplate) {
        let mut service = template.create_service();
        service.networks = vec![self.network.clone()];
        if self.document.put_service(service).is_some() {
            tracing::info!("Replaced existing service {}", template.name);
        }

        for volume in template.create_required_volumes() {
            let _unused = self.document.put_volume(volume);
        }

        self.link_application_service(template.name);
    }

    /// Makes the application service depend on `service_name`.
    fn link_application_service(&mut self, service_name: &str) {
        if service_name == consts::APPLICATION_SERVICE_NAME {
            return;
        }
        let Some(app) = self.document.service_mut(consts::APPLICATION_SERVICE_NAME) else {
            return;
        };
        // Long-form `depends_on` is kept verbatim in `extra`; a typed list
        // would take its place on output.
        match app.extra.get("depends_on") {
            Some(Value::Sequence(names)) if names.is_empty() => {
                let _unused = app.extra.remove("depends_on");
            }
            Some(_) => {
                tracing::warn!(
                    "Service {} declares depends_on in long form, not adding {service_name}",
                    consts::APPLICATION_SERVICE_NAME
                );
                return;
            }
            None => {}
        }
        if !app.depends_on.iter().any(|name| name == service_name) {
            app.depends_on.push(service_name.to_string());
        }
    }

    pub fn into_document(self) -> ComposeDocument { self.document }
}
