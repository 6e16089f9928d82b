use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::{
    Component, Config, Network, Secret, Service, Volume,
    fields::{KeyOrder, SparseMapping},
};

/// A whole compose document.
///
/// Every collection is keyed by component name and keeps insertion order. Use
/// the `put_*` methods to insert components so that a key always matches the
/// name of the component stored under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposeDocument {
    pub version: Option<String>,

    pub services: IndexMap<String, Service>,

    pub networks: IndexMap<String, Network>,

    pub volumes: IndexMap<String, Volume>,

    pub configs: IndexMap<String, Config>,

    pub secrets: IndexMap<String, Secret>,

    /// Top-level keys the document model does not know about.
    pub extra: Mapping,

    pub key_order: KeyOrder,
}

impl ComposeDocument {
    #[must_use]
    pub fn new(version: Option<String>) -> Self { Self { version, ..Self::default() } }

    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> { self.services.get(name) }

    pub fn service_mut(&mut self, name: &str) -> Option<&mut Service> { self.services.get_mut(name) }

    #[must_use]
    pub fn network(&self, name: &str) -> Option<&Network> { self.networks.get(name) }

    #[must_use]
    pub fn volume(&self, name: &str) -> Option<&Volume> { self.volumes.get(name) }

    #[must_use]
    pub fn config(&self, name: &str) -> Option<&Config> { self.configs.get(name) }

    #[must_use]
    pub fn secret(&self, name: &str) -> Option<&Secret> { self.secrets.get(name) }

    #[must_use]
    pub fn has_service(&self, name: &str) -> bool { self.services.contains_key(name) }

    #[must_use]
    pub fn service_names(&self) -> Vec<&str> { names(&self.services) }

    #[must_use]
    pub fn network_names(&self) -> Vec<&str> { names(&self.networks) }

    #[must_use]
    pub fn volume_names(&self) -> Vec<&str> { names(&self.volumes) }

    #[must_use]
    pub fn config_names(&self) -> Vec<&str> { names(&self.configs) }

    #[must_use]
    pub fn secret_names(&self) -> Vec<&str> { names(&self.secrets) }

    /// Inserts `service` under its own name and returns the service it
    /// replaced. A replaced entry keeps its position.
    pub fn put_service(&mut self, service: Service) -> Option<Service> {
        put(&mut self.services, service)
    }

    pub fn put_network(&mut self, network: Network) -> Option<Network> {
        put(&mut self.networks, network)
    }

    pub fn put_volume(&mut self, volume: Volume) -> Option<Volume> { put(&mut self.volumes, volume) }

    pub fn put_config(&mut self, config: Config) -> Option<Config> { put(&mut self.configs, config) }

    pub fn put_secret(&mut self, secret: Secret) -> Option<Secret> { put(&mut self.secrets, secret) }

    /// Assembles the generic mapping of the document.
    ///
    /// Empty collections and a missing version are omitted, and `extra` is
    /// merged in at the top level. Keys keep the order they were read in.
    #[must_use]
    pub fn to_mapping(&self) -> Mapping {
        let Self { version, services, networks, volumes, configs, secrets, extra, key_order } = self;
        SparseMapping::new()
            .string("version", version.as_deref())
            .mapping(Service::COLLECTION, &collection_mapping(services))
            .mapping(Network::COLLECTION, &collection_mapping(networks))
            .mapping(Volume::COLLECTION, &collection_mapping(volumes))
            .mapping(Config::COLLECTION, &collection_mapping(configs))
            .mapping(Secret::COLLECTION, &collection_mapping(secrets))
            .extra(extra)
            .finish_in(key_order)
    }
}

fn names<T>(collection: &IndexMap<String, T>) -> Vec<&str> {
    collection.keys().map(String::as_str).collect()
}

fn put<T: Component>(collection: &mut IndexMap<String, T>, component: T) -> Option<T> {
    collection.insert(component.name().to_string(), component)
}

fn collection_mapping<T: Component>(collection: &IndexMap<String, T>) -> Mapping {
    collection
        .iter()
        .map(|(name, component)| (Value::from(name.as_str()), Value::Mapping(component.to_mapping())))
        .collect()
}
