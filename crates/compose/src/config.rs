use serde_yaml::Mapping;

use crate::{
    Component, External,
    fields::{self, KeyOrder, SparseMapping, StringMap},
};

/// A config of the compose document.
///
/// A `name:` key inside the entry is not interpreted; it stays in `extra`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub name: String,

    pub file: Option<String>,

    pub external: Option<External>,

    pub labels: StringMap,

    pub extra: Mapping,

    pub key_order: KeyOrder,
}

impl Config {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

impl Component for Config {
    const COLLECTION: &'static str = "configs";

    fn from_mapping(name: &str, data: &Mapping) -> Self {
        let mut config = Self::new(name);
        config.extra = fields::split(data, |key, value| match key {
            "file" => fields::assign(&mut config.file, fields::string(value).map(Some)),
            "external" => fields::assign(&mut config.external, External::from_value(value).map(Some)),
            "labels" => fields::assign(&mut config.labels, fields::string_map(value)),
            _ => false,
        });
        config.key_order = KeyOrder::of(data);
        config
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

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(text: &str) -> Mapping { serde_yaml::from_str(text).unwrap() }

    #[test]
    fn test_file_config() {
        let config = Config::from_mapping("nginx_conf", &mapping("file: ./nginx.conf"));

        assert_eq!(config.name, "nginx_conf");
        assert_eq!(config.file.as_deref(), Some("./nginx.conf"));
        assert_eq!(config.to_mapping(), mapping("file: ./nginx.conf"));
    }

    #[test]
    fn test_name_key_is_not_duplicated() {
        let data = mapping("external: true\nname: shared_nginx_conf\n");
        let config = Config::from_mapping("nginx_conf", &data);

        assert_eq!(config.name, "nginx_conf");
        assert_eq!(config.extra, mapping("name: shared_nginx_conf"));
        assert_eq!(config.to_mapping(), data);
    }
}
