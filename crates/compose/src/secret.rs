use serde_yaml::Mapping;

use crate::{
    Component, External,
    fields::{self, KeyOrder, SparseMapping, StringMap},
};

/// A secret of the compose document. Shaped like [`crate::Config`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Secret {
    pub name: String,

    pub file: Option<String>,

    pub external: Option<External>,

    pub labels: StringMap,

    pub extra: Mapping,

    pub key_order: KeyOrder,
}

impl Secret {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

impl Component for Secret {
    const COLLECTION: &'static str = "secrets";

    fn from_mapping(name: &str, data: &Mapping) -> Self {
        let mut secret = Self::new(name);
        secret.extra = fields::split(data, |key, value| match key {
            "file" => fields::assign(&mut secret.file, fields::string(value).map(Some)),
            "external" => fields::assign(&mut secret.external, External::from_value(value).map(Some)),
            "labels" => fields::assign(&mut secret.labels, fields::string_map(value)),
            _ => false,
        });
        secret.key_order = KeyOrder::of(data);
        secret
    }

    fn to_mapping(&self) -> Mapping {
        let Self { name: _, file, external, labels, extra, key_order } = self;
        SparseMapping::new()
            .string("file", file.as_deref())
            .value("external", external.as_ref().map(External::to_value))
            .string_map("labels", labels)
            .extra(extra)
            .finish_in(key_order)
    }

    fn name(&self) -> &str { &self.name }
}
