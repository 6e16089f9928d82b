use serde_yaml::Mapping;

use crate::{
    Component, External,
    fields::{self, KeyOrder, SparseMapping, StringMap},
};

/// A network of the compose document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    pub name: String,

    pub driver: Option<String>,

    pub driver_opts: StringMap,

    pub labels: StringMap,

    pub external: Option<External>,

    pub ipam: Mapping,

    pub extra: Mapping,

    pub key_order: KeyOrder,
}

impl Network {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

impl Component for Network {
    const COLLECTION: &'static str = "networks";

    fn from_mapping(name: &str, data: &Mapping) -> Self {
        let mut network = Self::new(name);
        network.extra = fields::split(data, |key, value| match key {
            "driver" => fields::assign(&mut network.driver, fields::string(value).map(Some)),
            "driver_opts" => fields::assign(&mut network.driver_opts, fields::string_map(value)),
            "labels" => fields::assign(&mut network.labels, fields::string_map(value)),
            "external" => fields::assign(&mut network.external, External::from_value(value).map(Some)),
            "ipam" => fields::assign(&mut network.ipam, fields::mapping(value)),
            _ => false,
        });
        network.key_order = KeyOrder::of(data);
        network
    }

    fn to_mapping(&self) -> Mapping {
        let Self { name: _, driver, driver_opts, labels, external, ipam, extra, key_order } = self;
        SparseMapping::new()
            .string("driver", driver.as_deref())
            .string_map("driver_opts", driver_opts)
            .string_map("labels", labels)
            .value("external", external.as_ref().map(External::to_value))
            .mapping("ipam", ipam)
            .extra(extra)
            .finish_in(key_order)
    }

    fn name(&self) -> &str { &self.name }
}
