use serde_yaml::Mapping;

use crate::{
    Component, External,
    fields::{self, KeyOrder, SparseMapping, StringMap},
};

/// A named volume of the compose document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Volume {
    pub name: String,

    pub driver: Option<String>,

    pub driver_opts: StringMap,

    pub labels: StringMap,

    pub external: Option<External>,

    pub extra: Mapping,

    pub key_order: KeyOrder,
}

impl Volume {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

impl Component for Volume {
    const COLLECTION: &'static str = "volumes";

    fn from_mapping(name: &str, data: &Mapping) -> Self {
        let mut volume = Self::new(name);
        volume.extra = fields::split(data, |key, value| match key {
            "driver" => fields::assign(&mut volume.driver, fields::string(value).map(Some)),
            "driver_opts" => fields::assign(&mut volume.driver_opts, fields::string_map(value)),
            "labels" => fields::assign(&mut volume.labels, fields::string_map(value)),
            "external" => fields::assign(&mut volume.external, External::from_value(value).map(Some)),
            _ => false,
        });
        volume.key_order = KeyOrder::of(data);
        volume
    }

    fn to_mapping(&self) -> Mapping {
        let Self { name: _, driver, driver_opts, labels, external, extra, key_order } = self;
        SparseMapping::new()
            .string("driver", driver.as_deref())
            .string_map("driver_opts", driver_opts)
            .string_map("labels", labels)
            .value("external", external.as_ref().map(External::to_value))
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
    fn test_external_tri_state() {
        let flagged = Volume::from_mapping("data", &mapping("external: true"));
        let named = Volume::from_mapping("data", &mapping("external: shared_data"));
        let disabled = Volume::from_mapping("data", &mapping("external: false"));
        let absent = Volume::from_mapping("data", &Mapping::new());

        assert_eq!(flagged.external, Some(External::Flag(true)));
        assert_eq!(named.external, Some(External::Name("shared_data".to_string())));
        assert_eq!(disabled.external, Some(External::Flag(false)));
        assert_eq!(absent.external, None);

        assert_eq!(flagged.to_mapping(), mapping("external: true"));
        assert_eq!(named.to_mapping(), mapping("external: shared_data"));
        assert_eq!(disabled.to_mapping(), mapping("external: false"));
        assert!(absent.to_mapping().is_empty());
    }

    #[test]
    fn test_legacy_external_mapping_is_preserved() {
        let data = mapping("external:\n  name: legacy_data\n");
        let volume = Volume::from_mapping("data", &data);

        assert_eq!(volume.external, None);
        assert_eq!(volume.to_mapping(), data);
    }

    #[test]
    fn test_driver_options_keep_their_order() {
        let data = mapping("driver: local\ndriver_opts:\n  type: none\n  o: bind\n  device: /srv/data\n");
        let volume = Volume::from_mapping("data", &data);

        assert_eq!(volume.driver_opts.keys().collect::<Vec<_>>(), ["type", "o", "device"]);
        assert_eq!(volume.to_mapping(), data);
    }
}
