use filaship_base::consts;
use filaship_compose::{Service, Volume};

use crate::catalog::ServiceCategory;

/// A ready-made service definition offered by the wizard.
#[derive(Clone, Copy, Debug)]
pub struct ServiceTemplate {
    /// The service name, also the key under which the service is stored.
    pub name: &'static str,

    pub description: &'static str,

    pub category: ServiceCategory,

    pub image: &'static str,

    pub environment: &'static [&'static str],

    pub ports: &'static [&'static str],

    /// Volume mounts of the service, in `source:target` form.
    pub volumes: &'static [&'static str],

    pub command: &'static [&'static str],

    pub restart: Option<&'static str>,

    /// Named volumes the service mounts and that must be declared at the top
    /// level of the document.
    pub required_volumes: &'static [&'static str],

    /// How an application container reaches the service.
    pub connection_string: Option<&'static str>,
}

impl ServiceTemplate {
    pub fn create_service(&self) -> Service {
        Service {
            image: Some(self.image.to_string()),
            ports: to_strings(self.ports),
            volumes: to_strings(self.volumes),
            environment: to_strings(self.environment),
            command: to_strings(self.command),
            restart: self.restart.map(ToString::to_string),
            ..Service::new(self.name)
        }
    }

    pub fn create_required_volumes(&self) -> Vec<Volume> {
        self.required_volumes
            .iter()
            .map(|name| Volume {
                driver: Some(consts::DEFAULT_VOLUME_DRIVER.to_string()),
                ..Volume::new(*name)
            })
            .collect()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
