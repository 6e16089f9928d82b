//! Helpers shared by the component decoders and encoders.
//!
//! Decoding is lenient but lossless: a decoder returns `None` when a value
//! does not have the expected shape, and the caller keeps the original entry
//! in `extra` instead of interpreting it. Tagged values (`!reset []`,
//! `!override [...]`) and empty collections are never interpreted, since the
//! typed fields could not write them back.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

/// An ordered mapping of string keys to string values, such as `labels` or
/// `driver_opts`.
pub type StringMap = IndexMap<String, String>;

/// Splits `data` into the entries accepted by `accept` and the rest.
///
/// `accept` is called for every string key in document order and returns
/// whether it consumed the entry. Rejected entries, and entries with
/// non-string keys, are returned in their original order.
pub(crate) fn split<F>(data: &Mapping, mut accept: F) -> Mapping
where
    F: FnMut(&str, &Value) -> bool,
{
    let mut extra = Mapping::new();
    for (key, value) in data {
        let accepted = match key {
            Value::String(key) => accept(key, value),
            _ => false,
        };
        if !accepted {
            let _unused = extra.insert(key.clone(), value.clone());
        }
    }
    extra
}

/// Stores `decoded` into `slot` and reports whether there was anything to
/// store.
pub(crate) fn assign<T>(slot: &mut T, decoded: Option<T>) -> bool {
    match decoded {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

pub(crate) fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        _ => None,
    }
}

pub(crate) fn strings(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Sequence(values) if !values.is_empty() => values.iter().map(string).collect(),
        _ => None,
    }
}

pub(crate) fn string_map(value: &Value) -> Option<StringMap> {
    match value {
        Value::Mapping(values) if !values.is_empty() => {
            values.iter().map(|(key, value)| Some((string(key)?, string(value)?))).collect()
        }
        _ => None,
    }
}

pub(crate) fn mapping(value: &Value) -> Option<Mapping> {
    match value {
        Value::Mapping(values) if !values.is_empty() => Some(values.clone()),
        _ => None,
    }
}

/// The order in which the keys of a component appeared in its source.
///
/// It only drives the layout of the output. Comparisons ignore it, so a
/// component read from a file equals the same component built in code.
#[derive(Clone, Debug, Default)]
pub struct KeyOrder(Vec<Value>);

impl KeyOrder {
    pub(crate) fn of(data: &Mapping) -> Self { Self(data.keys().cloned().collect()) }

    /// Lays `mapping` out in the recorded order. Keys the source did not have
    /// follow, in the order they were emitted.
    pub(crate) fn apply(&self, mapping: Mapping) -> Mapping {
        if self.0.is_empty() {
            return mapping;
        }
        let mut ordered = self
            .0
            .iter()
            .filter_map(|key| Some((key.clone(), mapping.get(key)?.clone())))
            .collect::<Mapping>();
        for (key, value) in mapping {
            if !ordered.contains_key(&key) {
                let _unused = ordered.insert(key, value);
            }
        }
        ordered
    }
}

impl PartialEq for KeyOrder {
    fn eq(&self, _other: &Self) -> bool { true }
}

impl Eq for KeyOrder {}

/// Describes the kind of a value for error messages.
pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Builds a mapping that only contains present, non-empty fields.
#[derive(Debug, Default)]
pub(crate) struct SparseMapping(Mapping);

impl SparseMapping {
    pub(crate) fn new() -> Self { Self::default() }

    pub(crate) fn string(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.insert(key, Value::from(value));
        }
        self
    }

    pub(crate) fn strings(mut self, key: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            let values = values.iter().map(|value| Value::from(value.as_str())).collect();
            self.insert(key, Value::Sequence(values));
        }
        self
    }

    pub(crate) fn string_map(mut self, key: &str, values: &StringMap) -> Self {
        if !values.is_empty() {
            let values = values
                .iter()
                .map(|(key, value)| (Value::from(key.as_str()), Value::from(value.as_str())))
                .collect();
            self.insert(key, Value::Mapping(values));
        }
        self
    }

    pub(crate) fn mapping(mut self, key: &str, value: &Mapping) -> Self {
        if !value.is_empty() {
            self.insert(key, Value::Mapping(value.clone()));
        }
        self
    }

    pub(crate) fn value(mut self, key: &str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Splices unrecognized entries in at the top level. Fields already
    /// emitted take precedence over an `extra` entry with the same key.
    pub(crate) fn extra(mut self, extra: &Mapping) -> Self {
        for (key, value) in extra {
            if !self.0.contains_key(key) {
                let _unused = self.0.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Finishes the mapping with its keys in the order they were read.
    pub(crate) fn finish_in(self, order: &KeyOrder) -> Mapping { order.apply(self.0) }

    fn insert(&mut self, key: &str, value: Value) {
        let _unused = self.0.insert(Value::from(key), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value { serde_yaml::from_str(text).unwrap() }

    #[test]
    fn test_strings_rejects_mixed_sequences() {
        assert_eq!(strings(&yaml("[a, b]")), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(strings(&yaml("[a, 3000]")), None);
        assert_eq!(strings(&yaml("a b")), None);
    }

    #[test]
    fn test_tagged_and_empty_values_are_not_interpreted() {
        assert_eq!(string(&yaml("!local nginx")), None);
        assert_eq!(strings(&yaml("!override ['8080:80']")), None);
        assert_eq!(strings(&yaml("[]")), None);
        assert_eq!(string_map(&yaml("!reset {A: x}")), None);
        assert_eq!(mapping(&yaml("!reset {}")), None);
        assert_eq!(mapping(&yaml("{}")), None);
    }

    #[test]
    fn test_key_order() {
        let source = yaml("{image: nginx, environment: {A: x}, ports: ['80:80']}");
        let order = KeyOrder::of(source.as_mapping().unwrap());

        let emitted = SparseMapping::new()
            .string("image", Some("nginx"))
            .strings("ports", &["80:80".to_string()])
            .strings("networks", &["backend".to_string()])
            .extra(yaml("{environment: {A: x}}").as_mapping().unwrap())
            .finish_in(&order);

        let keys = emitted.keys().cloned().collect::<Vec<_>>();
        assert_eq!(
            keys,
            [Value::from("image"), Value::from("environment"), Value::from("ports"), Value::from("networks")]
        );
        assert_eq!(order, KeyOrder::default());
    }

    #[test]
    fn test_string_map_requires_string_values() {
        let decoded = string_map(&yaml("{A: x, B: y}")).unwrap();
        assert_eq!(decoded.get("A").map(String::as_str), Some("x"));
        assert_eq!(decoded.keys().collect::<Vec<_>>(), ["A", "B"]);

        assert_eq!(string_map(&yaml("{A: 1}")), None);
        assert_eq!(string_map(&yaml("[A=x]")), None);
    }

    #[test]
    fn test_split_keeps_rejected_entries_in_order() {
        let data = yaml("{z: 1, keep: 2, a: 3, 7: 4}");
        let mut seen = Vec::new();
        let extra = split(data.as_mapping().unwrap(), |key, _| {
            seen.push(key.to_string());
            key == "keep"
        });

        assert_eq!(seen, ["z", "keep", "a"]);
        let keys = extra.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>();
        assert_eq!(keys, [Value::from("z"), Value::from("a"), yaml("7")]);
    }

    #[test]
    fn test_sparse_mapping_omits_empty_fields() {
        let extra = yaml("{image: ignored, custom: true}");
        let mapping = SparseMapping::new()
            .string("image", Some("nginx"))
            .string("restart", None)
            .strings("ports", &[])
            .string_map("labels", &StringMap::new())
            .mapping("healthcheck", &Mapping::new())
            .value("external", None)
            .extra(extra.as_mapping().unwrap())
            .finish_in(&KeyOrder::default());

        assert_eq!(Value::Mapping(mapping), yaml("{image: nginx, custom: true}"));
    }
}
