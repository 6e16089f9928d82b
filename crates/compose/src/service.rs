use serde_yaml::Mapping;

use crate::{
    BuildConfig, Component,
    fields::{self, KeyOrder, SparseMapping},
};

/// A service of the compose document.
///
/// List fields are only interpreted when they are plain lists of strings.
/// Other spellings, such as `command` given as one string or `depends_on` in
/// its long mapping form, are kept untouched in `extra`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Service {
    pub name: String,

    pub image: Option<String>,

    pub build: Option<BuildConfig>,

    pub ports: Vec<String>,

    pub volumes: Vec<String>,

    /// Variables in `KEY=VALUE` form.
    pub environment: Vec<String>,

    pub depends_on: Vec<String>,

    pub networks: Vec<String>,

    pub labels: Vec<String>,

    pub command: Vec<String>,

    pub restart: Option<String>,

    pub healthcheck: Mapping,

    pub extra: Mapping,

    /// The order keys were read in. Output follows it, so rewriting a file
    /// does not shuffle the keys left in `extra` behind the typed ones.
    pub key_order: KeyOrder,
}

impl Service {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

impl Component for Service {
    const COLLECTION: &'static str = "services";

    fn from_mapping(name: &str, data: &Mapping) -> Self {
        let mut service = Self::new(name);
        service.extra = fields::split(data, |key, value| match key {
            "image" => fields::assign(&mut service.image, fields::string(value).map(Some)),
            "build" => fields::assign(&mut service.build, BuildConfig::parse(value).map(Some)),
            "ports" => fields::assign(&mut service.ports, fields::strings(value)),
            "volumes" => fields::assign(&mut service.volumes, fields::strings(value)),
            "environment" => fields::assign(&mut service.environment, fields::strings(value)),
            "depends_on" => fields::assign(&mut service.depends_on, fields::strings(value)),
            "networks" => fields::assign(&mut service.networks, fields::strings(value)),
            "labels" => fields::assign(&mut service.labels, fields::strings(value)),
            "command" => fields::assign(&mut service.command, fields::strings(value)),
            "restart" => fields::assign(&mut service.restart, fields::string(value).map(Some)),
            "healthcheck" => fields::assign(&mut service.healthcheck, fields::mapping(value)),
            _ => false,
        });
        service.key_order = KeyOrder::of(data);
        service
    }

    fn to_mapping(&self) -> Mapping {
        let Self {
            name: _,
            image,
            build,
            ports,
            volumes,
            environment,
            depends_on,
            networks,
            labels,
            command,
            restart,
            healthcheck,
            extra,
            key_order,
        } = self;

        SparseMapping::new()
            .string("image", image.as_deref())
            .value("build", build.as_ref().map(BuildConfig::serialize))
            .strings("ports", ports)
            .strings("volumes", volumes)
            .strings("environment", environment)
            .strings("depends_on", depends_on)
            .strings("networks", networks)
            .strings("labels", labels)
            .strings("command", command)
            .string("restart", restart.as_deref())
            .mapping("healthcheck", healthcheck)
            .extra(extra)
            .finish_in(key_order)
    }

    fn name(&self) -> &str { &self.name }
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;

    fn mapping(text: &str) -> Mapping { serde_yaml::from_str(text).unwrap() }

    #[test]
    fn test_from_mapping() {
        let service = Service::from_mapping(
            "app",
            &mapping(
                "
                image: php:8.2-fpm
                build:
                  context: .
                  dockerfile: Dockerfile
                ports: ['8080:80']
                environment: [APP_ENV=local]
                depends_on: [mysql]
                command: [php-fpm, --nodaemonize]
                restart: unless-stopped
                healthcheck:
                  test: [CMD, php-fpm-healthcheck]
                ",
            ),
        );

        assert_eq!(service.name, "app");
        assert_eq!(service.image.as_deref(), Some("php:8.2-fpm"));
        assert_eq!(service.build.as_ref().and_then(|b| b.dockerfile.as_deref()), Some("Dockerfile"));
        assert_eq!(service.ports, ["8080:80"]);
        assert_eq!(service.environment, ["APP_ENV=local"]);
        assert_eq!(service.depends_on, ["mysql"]);
        assert_eq!(service.command, ["php-fpm", "--nodaemonize"]);
        assert_eq!(service.restart.as_deref(), Some("unless-stopped"));
        assert!(service.healthcheck.contains_key("test"));
        assert!(service.extra.is_empty());
    }

    #[test]
    fn test_unknown_field_is_preserved() {
        let service = Service::from_mapping("web", &mapping("image: nginx\nfoo: bar\n"));

        assert_eq!(service.extra, mapping("foo: bar"));
        assert_eq!(service.to_mapping(), mapping("image: nginx\nfoo: bar\n"));
    }

    #[test]
    fn test_sparse_emission() {
        let service = Service { image: Some("nginx".to_string()), ..Service::new("web") };
        let emitted = service.to_mapping();

        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted.get("image"), Some(&Value::from("nginx")));
        assert!(!emitted.contains_key("ports"));
        assert!(!emitted.contains_key("name"));
    }

    #[test]
    fn test_uninterpreted_shapes_are_kept_in_extra() {
        let data = mapping(
            "
            command: nginx -g 'daemon off;'
            depends_on:
              db:
                condition: service_healthy
            ports: [3000]
            ",
        );
        let service = Service::from_mapping("web", &data);

        assert!(service.command.is_empty());
        assert!(service.depends_on.is_empty());
        assert!(service.ports.is_empty());
        assert_eq!(service.extra, data);
        assert_eq!(service.to_mapping(), data);
    }

    #[test]
    fn test_tagged_values_are_kept_verbatim() {
        let data = mapping(
            "
            image: nginx
            command: !reset []
            ports: !override ['8080:80']
            healthcheck: !reset {}
            ",
        );
        let service = Service::from_mapping("web", &data);

        assert!(service.command.is_empty());
        assert!(service.ports.is_empty());
        assert!(service.healthcheck.is_empty());
        assert_eq!(service.extra.len(), 3);
        assert_eq!(service.to_mapping(), data);
    }

    #[test]
    fn test_empty_lists_are_kept_verbatim() {
        let data = mapping("image: nginx
command: []
healthcheck: {}
");
        let service = Service::from_mapping("web", &data);

        assert_eq!(service.to_mapping(), data);
    }

    #[test]
    fn test_keys_keep_their_source_order() {
        let mut service = Service::from_mapping(
            "web",
            &mapping(
                "
                image: app
                labels: [tier=web]
                <<: {restart: always}
                environment: {APP_ENV: local}
                ports: ['80:80']
                ",
            ),
        );
        service.networks = vec!["backend".to_string()];

        let keys = service.to_mapping().keys().cloned().collect::<Vec<_>>();

        assert_eq!(
            keys,
            ["image", "labels", "<<", "environment", "ports", "networks"].map(Value::from)
        );
    }

    #[test]
    fn test_bare_build_context_round_trips() {
        let service = Service::from_mapping("app", &mapping("build: ./app\n"));

        assert_eq!(service.build, Some(BuildConfig::from_context("./app")));
        assert_eq!(service.to_mapping(), mapping("build: ./app\n"));
    }
}
