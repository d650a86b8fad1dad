//! Command and option value types

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A typed option value: string, number, or boolean.
///
/// Bare option tokens that are neither booleans nor parseable numbers become
/// the not-a-number sentinel (`f64::NAN`), never a string.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
}

/// Structural equality: two NaN sentinels compare equal so that re-parsing
/// identical source yields trees that compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(v) => serializer.serialize_str(v),
            // Non-finite numbers have no JSON representation; emit null so
            // serialization stays deterministic.
            Value::Num(v) if v.is_finite() => serializer.serialize_f64(*v),
            Value::Num(_) => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(v) => write!(f, "\"{}\"", v),
            Value::Num(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// An insertion-ordered `key -> Value` mapping.
///
/// Inserting an existing key overwrites the value but keeps the key's
/// first-occurrence position, so iteration and serialization order is a
/// deterministic function of the source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        ValueMap::default()
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One parsed statement: tag, decoded data payload, typed options.
///
/// The tag is never empty; a statement without a leading tag token parses
/// with the default tag `"format"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub tag: String,
    pub data: String,
    pub options: ValueMap,
}

impl Command {
    pub fn new(tag: &str, data: &str) -> Self {
        Command {
            tag: tag.to_string(),
            data: data.to_string(),
            options: ValueMap::new(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Command('{}', \"{}\", {} options)",
            self.tag,
            self.data,
            self.options.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_insert_overwrites_but_keeps_position() {
        let mut map = ValueMap::new();
        map.insert("a", Value::Num(1.0));
        map.insert("b", Value::Num(2.0));
        map.insert("a", Value::Num(3.0));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::Num(3.0)));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn nan_values_compare_equal() {
        assert_eq!(Value::Num(f64::NAN), Value::Num(f64::NAN));
        assert_ne!(Value::Num(f64::NAN), Value::Num(1.0));
    }

    #[test]
    fn nan_serializes_as_null() {
        let json = serde_json::to_string(&Value::Num(f64::NAN)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn map_serializes_in_insertion_order() {
        let mut map = ValueMap::new();
        map.insert("z", Value::Bool(true));
        map.insert("a", Value::Str("x".to_string()));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":true,"a":"x"}"#);
    }
}
