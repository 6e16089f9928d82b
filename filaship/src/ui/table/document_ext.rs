use comfy_table::Cell;
use filaship_compose::{ComposeDocument, External};

use crate::ui::table::new_table;

/// Summaries of a parsed compose document.
pub trait ComposeDocumentExt {
    /// Renders the version line, a table of services and a table of the
    /// named resources (volumes, networks, configs, secrets). Empty parts
    /// are left out.
    fn render_summary(&self) -> String;
}

impl ComposeDocumentExt for ComposeDocument {
    fn render_summary(&self) -> String {
        let mut sections = Vec::new();
        if let Some(version) = &self.version {
            sections.push(format!("Version: {version}"));
        }
        if !self.services.is_empty() {
            sections.push(render_services(self));
        }
        let resources = resource_rows(self);
        if !resources.is_empty() {
            sections.push(
                new_table()
                    .set_header(vec!["KIND", "NAME", "DRIVER", "EXTERNAL", "FILE"])
                    .add_rows(resources)
                    .to_string(),
            );
        }
        sections.join("\n\n")
    }
}

fn render_services(document: &ComposeDocument) -> String {
    let rows = document
        .services
        .values()
        .map(|service| {
            [
                Cell::new(&service.name),
                Cell::new(service.image.as_deref().unwrap_or_default()),
                Cell::new(
                    service
                        .build
                        .as_ref()
                        .and_then(|build| build.context.as_deref())
                        .unwrap_or_default(),
                ),
                Cell::new(service.ports.join(", ")),
                Cell::new(service.depends_on.join(", ")),
            ]
        })
        .collect::<Vec<_>>();

    new_table()
        .set_header(vec!["SERVICE", "IMAGE", "BUILD", "PORTS", "DEPENDS ON"])
        .add_rows(rows)
        .to_string()
}

fn resource_rows(document: &ComposeDocument) -> Vec<[Cell; 5]> {
    let volumes = document.volumes.values().map(|volume| {
        resource_row("volume", &volume.name, volume.driver.as_deref(), volume.external.as_ref(), None)
    });
    let networks = document.networks.values().map(|network| {
        resource_row(
            "network",
            &network.name,
            network.driver.as_deref(),
            network.external.as_ref(),
            None,
        )
    });
    let configs = document.configs.values().map(|config| {
        resource_row("config", &config.name, None, config.external.as_ref(), config.file.as_deref())
    });
    let secrets = document.secrets.values().map(|secret| {
        resource_row("secret", &secret.name, None, secret.external.as_ref(), secret.file.as_deref())
    });

    volumes.chain(networks).chain(configs).chain(secrets).collect()
}

fn resource_row(
    kind: &str,
    name: &str,
    driver: Option<&str>,
    external: Option<&External>,
    file: Option<&str>,
) -> [Cell; 5] {
    [
        Cell::new(kind),
        Cell::new(name),
        Cell::new(driver.unwrap_or_default()),
        Cell::new(external.map(ToString::to_string).unwrap_or_default()),
        Cell::new(file.unwrap_or_default()),
    ]
}
