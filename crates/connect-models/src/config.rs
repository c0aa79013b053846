use std::convert::TryFrom;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration returned by `GET /config` for a platform / version pair.
///
/// The schema is owned by the server, so this is kept as an opaque
/// mapping of keys to json values. Nothing here assumes that any particular
/// key is present; callers that know the schema can use
/// [`Config::deserialize_into`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Config(Map<String, Value>);

impl Config {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the raw value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Gets `key` as a bool, if it is present and a bool.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Gets `key` as an `i64`, if it is present and fits.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Gets `key` as a `u64`, if it is present and fits.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Gets `key` as a `f64`, if it is present and a number.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Gets `key` as a string slice, if it is present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Decodes the config into a type with a known schema.
    ///
    /// Clones the whole map; use [`Config::into_typed`] when the config is
    /// no longer needed.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(Value::Object(self.0.clone()))
    }

    /// Like [`Config::deserialize_into`], consuming the config.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        T::deserialize(Value::Object(self.0))
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Config> for Value {
    fn from(config: Config) -> Self {
        Value::Object(config.0)
    }
}

/// An error returned when converting a json value that is not an object.
#[derive(thiserror::Error, Debug)]
#[error("expected a json object, got {kind}")]
pub struct NotAnObject {
    pub kind: &'static str,
}

impl TryFrom<Value> for Config {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = match value {
            Value::Object(map) => return Ok(Self(map)),
            Value::Null => "null",
            Value::Bool(_) => "a bool",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
        };

        Err(NotAnObject { kind })
    }
}
