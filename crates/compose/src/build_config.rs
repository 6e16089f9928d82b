use serde_yaml::{Mapping, Value};

use crate::fields::{self, KeyOrder, SparseMapping, StringMap};

/// The `build` section of a service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildConfig {
    pub context: Option<String>,

    pub dockerfile: Option<String>,

    pub args: StringMap,

    pub labels: StringMap,

    pub target: Option<String>,

    pub cache_from: Vec<String>,

    pub extra: Mapping,

    pub key_order: KeyOrder,
}

/// The two spellings of a `build` field: a bare context path, or a full
/// build section.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildSource {
    Context(String),
    Config(Box<BuildConfig>),
}

impl BuildSource {
    /// Decodes a raw `build` value. Anything but a string or a mapping is not
    /// a build source.
    #[must_use]
    pub fn from_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(context) => Some(Self::Context(context.clone())),
            Value::Mapping(data) => Some(Self::Config(Box::new(BuildConfig::from_mapping(data)))),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Context(context) => Value::from(context.as_str()),
            Self::Config(config) => Value::Mapping(config.to_mapping()),
        }
    }
}

impl From<BuildSource> for BuildConfig {
    fn from(source: BuildSource) -> Self {
        match source {
            BuildSource::Context(context) => Self::from_context(context),
            BuildSource::Config(config) => *config,
        }
    }
}

impl BuildConfig {
    #[must_use]
    pub fn from_context(context: impl Into<String>) -> Self {
        Self { context: Some(context.into()), ..Self::default() }
    }

    /// Resolves a raw `build` value, either `./app` or `{context: ., ...}`.
    #[must_use]
    pub fn parse(raw: &Value) -> Option<Self> { BuildSource::from_value(raw).map(Self::from) }

    /// Encodes the section, collapsing it to the bare context path when the
    /// context is the only field present.
    #[must_use]
    pub fn serialize(&self) -> Value { self.to_source().to_value() }

    #[must_use]
    pub fn to_source(&self) -> BuildSource {
        match &self.context {
            Some(context) if self.to_mapping().len() == 1 => BuildSource::Context(context.clone()),
            _ => BuildSource::Config(Box::new(self.clone())),
        }
    }

    #[must_use]
    pub fn from_mapping(data: &Mapping) -> Self {
        let mut config = Self::default();
        config.extra = fields::split(data, |key, value| match key {
            "context" => fields::assign(&mut config.context, fields::string(value).map(Some)),
            "dockerfile" => fields::assign(&mut config.dockerfile, fields::string(value).map(Some)),
            "args" => fields::assign(&mut config.args, fields::string_map(value)),
            "labels" => fields::assign(&mut config.labels, fields::string_map(value)),
            "target" => fields::assign(&mut config.target, fields::string(value).map(Some)),
            "cache_from" => fields::assign(&mut config.cache_from, fields::strings(value)),
            _ => false,
        });
        config.key_order = KeyOrder::of(data);
        config
    }

    #[must_use]
    pub fn to_mapping(&self) -> Mapping {
        let Self { context, dockerfile, args, labels, target, cache_from, extra, key_order } = self;
        SparseMapping::new()
            .string("context", context.as_deref())
            .string("dockerfile", dockerfile.as_deref())
            .string_map("args", args)
            .string_map("labels", labels)
            .string("target", target.as_deref())
            .strings("cache_from", cache_from)
            .extra(extra)
            .finish_in(key_order)
    }
}
