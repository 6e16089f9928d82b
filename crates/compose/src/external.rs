use std::fmt;

use serde_yaml::Value;

/// The `external` field of networks, volumes, configs and secrets.
///
/// The field is tri-state: absent (`Option::None` on the owning component),
/// a boolean flag, or the name of a resource managed outside the document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum External {
    Flag(bool),
    Name(String),
}

impl External {
    /// Decodes the field, returning `None` for any other shape.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(Self::Flag(*flag)),
            Value::String(name) => Some(Self::Name(name.clone())),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Flag(flag) => Value::Bool(*flag),
            Self::Name(name) => Value::from(name.as_str()),
        }
    }

    /// Whether the resource is managed outside the document.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Name(_) => true,
        }
    }
}

impl From<bool> for External {
    fn from(flag: bool) -> Self { Self::Flag(flag) }
}

impl fmt::Display for External {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(External::from_value(&Value::Bool(true)), Some(External::Flag(true)));
        assert_eq!(External::from_value(&Value::Bool(false)), Some(External::Flag(false)));
        assert_eq!(
            External::from_value(&Value::from("shared")),
            Some(External::Name("shared".to_string()))
        );
        assert_eq!(External::from_value(&Value::Null), None);
    }

    #[test]
    fn test_false_is_kept_distinct_from_absent() {
        let value = External::Flag(false).to_value();
        assert_eq!(value, Value::Bool(false));
        assert!(!External::Flag(false).is_external());
        assert!(External::Name("shared".to_string()).is_external());
    }
}
