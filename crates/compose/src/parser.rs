use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use snafu::{ResultExt, ensure};

use crate::{
    Component, ComposeDocument, Config, Network, Secret, Service, Volume,
    error::{self, Error},
    fields::{self, KeyOrder},
};

/// Top-level keys the document model interprets.
const KNOWN_KEYS: [&str; 6] = [
    "version",
    Service::COLLECTION,
    Network::COLLECTION,
    Volume::COLLECTION,
    Config::COLLECTION,
    Secret::COLLECTION,
];

impl ComposeDocument {
    /// Reads and parses the compose file at `file_path`.
    ///
    /// # Errors
    ///
    /// Fails when the file does not exist or cannot be read, when its content
    /// is not YAML, or when the YAML does not have the shape of a compose
    /// document.
    pub fn load<P>(file_path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let file_path = file_path.as_ref();
        ensure!(file_path.exists(), error::FileNotFoundSnafu { file_path });

        let content = std::fs::read(file_path).context(error::ReadFileSnafu { file_path })?;
        let value: Value =
            serde_yaml::from_slice(&content).context(error::DecodeFileSnafu { file_path })?;
        let mut document = Self::from_value(&value)?;
        if let Some(version) = numeric_version_text(&value, || serde_yaml::from_slice(&content)) {
            document.version = Some(version);
        }

        tracing::debug!(
            "Parsed {} with {} service(s)",
            file_path.display(),
            document.services.len()
        );
        Ok(document)
    }

    /// Parses a compose document from YAML text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not YAML or does not have the shape of a compose
    /// document.
    pub fn from_yaml_str(text: &str) -> Result<Self, Error> {
        let value: Value = serde_yaml::from_str(text).context(error::DecodeSnafu)?;
        let mut document = Self::from_value(&value)?;
        if let Some(version) = numeric_version_text(&value, || serde_yaml::from_str(text)) {
            document.version = Some(version);
        }
        Ok(document)
    }

    /// Builds a document from an already decoded YAML tree.
    ///
    /// A numeric `version` is taken as the decoder spelled it, so `3.10`
    /// reads as `3.1` here. The text entry points keep the source spelling.
    ///
    /// # Errors
    ///
    /// Fails when the root is not a mapping, or see [`Self::from_mapping`].
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let Value::Mapping(data) = value else {
            return error::InvalidDocumentSnafu { found: fields::kind(value) }.fail();
        };
        Self::from_mapping(data)
    }

    /// Builds a document from its top-level mapping.
    ///
    /// # Errors
    ///
    /// Fails when `version` is not a scalar, when a collection is not a
    /// mapping, when a collection entry is keyed by a non-string, or when an
    /// entry is neither a mapping nor null.
    pub fn from_mapping(data: &Mapping) -> Result<Self, Error> {
        let version = data.get("version").map(parse_version).transpose()?.flatten();

        Ok(Self {
            version,
            services: parse_collection(data)?,
            networks: parse_collection(data)?,
            volumes: parse_collection(data)?,
            configs: parse_collection(data)?,
            secrets: parse_collection(data)?,
            extra: fields::split(data, |key, _| KNOWN_KEYS.contains(&key)),
            key_order: KeyOrder::of(data),
        })
    }
}

fn parse_version(value: &Value) -> Result<Option<String>, Error> {
    match value {
        Value::Null => Ok(None),
        Value::String(version) => Ok(Some(version.clone())),
        Value::Number(version) => Ok(Some(version.to_string())),
        _ => error::TypeMismatchSnafu {
            location: "version",
            expected: "a string",
            found: fields::kind(value),
        }
        .fail(),
    }
}

/// The `version` key read as text, skipping the numeric decoding.
#[derive(Deserialize)]
struct VersionText {
    #[serde(default)]
    version: Option<String>,
}

/// Returns the source spelling of a numeric `version`. Decoding it as a
/// number drops digits (`3.10` becomes `3.1`).
fn numeric_version_text<F>(value: &Value, decode: F) -> Option<String>
where
    F: FnOnce() -> Result<VersionText, serde_yaml::Error>,
{
    matches!(value.get("version"), Some(Value::Number(_))).then(decode)?.ok()?.version
}

fn parse_collection<T: Component>(data: &Mapping) -> Result<IndexMap<String, T>, Error> {
    let entries = match data.get(T::COLLECTION) {
        None | Some(Value::Null) => return Ok(IndexMap::new()),
        Some(Value::Mapping(entries)) => entries,
        Some(value) => {
            return error::TypeMismatchSnafu {
                location: T::COLLECTION,
                expected: "a mapping",
                found: fields::kind(value),
            }
            .fail();
        }
    };

    let empty = Mapping::new();
    let mut collection = IndexMap::with_capacity(entries.len());
    for (name, value) in entries {
        let Value::String(name) = name else {
            return error::InvalidNameSnafu { collection: T::COLLECTION, found: fields::kind(name) }
                .fail();
        };
        let entry = match value {
            Value::Null => &empty,
            Value::Mapping(entry) => entry,
            _ => {
                return error::TypeMismatchSnafu {
                    location: format!("{}.{name}", T::COLLECTION),
                    expected: "a mapping",
                    found: fields::kind(value),
                }
                .fail();
            }
        };
        let _unused = collection.insert(name.to_string(), T::from_mapping(name, entry));
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::External;

    #[test]
    fn test_parse_minimal_document() {
        let document = ComposeDocument::from_yaml_str(
            "
            version: '3.8'
            services:
              web:
                image: nginx:alpine
                ports: ['80:80']
            volumes:
              data:
                external: true
            ",
        )
        .unwrap();

        assert_eq!(document.version.as_deref(), Some("3.8"));
        assert_eq!(document.service_names(), ["web"]);
        let web = document.service("web").unwrap();
        assert_eq!(web.image.as_deref(), Some("nginx:alpine"));
        assert_eq!(web.ports, ["80:80"]);
        assert_eq!(document.volume("data").unwrap().external, Some(External::Flag(true)));
        assert!(document.extra.is_empty());
    }

    #[test]
    fn test_null_entry_is_an_empty_component() {
        let document = ComposeDocument::from_yaml_str("services:\n  worker:\nvolumes:\n  data: ~\n")
            .unwrap();

        assert_eq!(document.service("worker"), Some(&Service::new("worker")));
        assert_eq!(document.volume("data"), Some(&Volume::new("data")));
    }

    #[test]
    fn test_unknown_top_level_keys_are_kept_in_order() {
        let document = ComposeDocument::from_yaml_str(
            "x-logging: {driver: json-file}\nservices: {web: {image: nginx}}\nname: shop\n",
        )
        .unwrap();

        let keys = document.extra.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>();
        assert_eq!(keys, [Value::from("x-logging"), Value::from("name")]);
    }

    #[test]
    fn test_version_coercion() {
        let numeric = ComposeDocument::from_yaml_str("version: 3.8\n").unwrap();
        let null = ComposeDocument::from_yaml_str("version: ~\n").unwrap();
        let missing = ComposeDocument::from_yaml_str("services: {}\n").unwrap();

        assert_eq!(numeric.version.as_deref(), Some("3.8"));
        assert_eq!(null.version, None);
        assert_eq!(missing.version, None);
        assert!(matches!(
            ComposeDocument::from_yaml_str("version: [3]\n"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_numeric_version_keeps_its_spelling() {
        let document = ComposeDocument::from_yaml_str("version: 3.10\nservices: {}\n").unwrap();
        assert_eq!(document.version.as_deref(), Some("3.10"));
        assert!(document.to_yaml().unwrap().contains("version: '3.10'"));

        let major = ComposeDocument::from_yaml_str("version: 3\n").unwrap();
        assert_eq!(major.version.as_deref(), Some("3"));
    }

    #[test]
    fn test_load_keeps_numeric_version_spelling() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"version: 2.10\nservices:\n  web:\n    image: nginx\n").unwrap();

        let document = ComposeDocument::load(file.path()).unwrap();

        assert_eq!(document.version.as_deref(), Some("2.10"));
    }

    #[test]
    fn test_tagged_root_is_not_a_document() {
        assert!(matches!(
            ComposeDocument::from_yaml_str("!compose {services: {}}"),
            Err(Error::InvalidDocument { found: "a tagged value" })
        ));
    }

    #[test]
    fn test_top_level_key_order_is_kept() {
        let text = "x-common: &common\n  restart: always\nservices:\n  web:\n    image: nginx\nversion: '3.8'\n";
        let document = ComposeDocument::from_yaml_str(text).unwrap();

        let mapping = document.to_mapping();
        let keys = mapping.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, [Value::from("x-common"), Value::from("services"), Value::from("version")]);
    }

    #[test]
    fn test_root_must_be_a_mapping() {
        assert!(matches!(
            ComposeDocument::from_yaml_str("just a string"),
            Err(Error::InvalidDocument { found: "a string" })
        ));
        assert!(matches!(
            ComposeDocument::from_yaml_str("- a\n- b\n"),
            Err(Error::InvalidDocument { found: "a sequence" })
        ));
        assert!(matches!(
            ComposeDocument::from_yaml_str(""),
            Err(Error::InvalidDocument { found: "null" })
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            ComposeDocument::from_yaml_str("services: [unterminated"),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_scalar_entry_fails_fast() {
        let err = ComposeDocument::from_yaml_str("services:\n  web: nginx\n").unwrap_err();

        assert!(matches!(
            &err,
            Error::TypeMismatch { location, found: "a string", .. } if location == "services.web"
        ));
    }

    #[test]
    fn test_collection_must_be_a_mapping() {
        assert!(matches!(
            ComposeDocument::from_yaml_str("networks: [front, back]\n"),
            Err(Error::TypeMismatch { found: "a sequence", .. })
        ));
        assert!(ComposeDocument::from_yaml_str("networks:\n").unwrap().networks.is_empty());
    }

    #[test]
    fn test_non_string_entry_name() {
        assert!(matches!(
            ComposeDocument::from_yaml_str("services:\n  8080: {image: nginx}\n"),
            Err(Error::InvalidName { collection: "services", found: "a number" })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"services:\n  db:\n    image: postgres:15\n").unwrap();

        let document = ComposeDocument::load(file.path()).unwrap();

        assert_eq!(document.service("db").and_then(|s| s.image.as_deref()), Some("postgres:15"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("docker-compose.yml");

        assert!(matches!(
            ComposeDocument::load(&file_path),
            Err(Error::FileNotFound { file_path: path }) if path == file_path
        ));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"services: {web: [\n").unwrap();

        assert!(matches!(ComposeDocument::load(file.path()), Err(Error::DecodeFile { .. })));
    }
}
