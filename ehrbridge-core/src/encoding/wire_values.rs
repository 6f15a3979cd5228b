//! Flat key/value parameter sets.
//!
//! Remote EHR endpoints accept their inputs either as query strings or as
//! `application/x-www-form-urlencoded` bodies, and both are a flat list of
//! string pairs. [`WireValues`] is that list, and [`WireValues::from_record`]
//! is the codec that derives it from a serde-annotated wire struct.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EhrError;

/// Ordered set of wire parameters with unique keys.
///
/// Setting an existing key replaces its value in place, so the first
/// insertion decides the position of a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireValues {
    pairs: Vec<(String, String)>,
}

impl WireValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serialisable wire record into parameters.
    ///
    /// The record's serde field names are the wire names. `null` and empty
    /// string leaves are omitted, booleans become `"true"`/`"false"`, numbers
    /// are rendered in their shortest form and nested objects are merged into
    /// the same flat namespace. Arrays have no flat rendering and are rejected.
    pub fn from_record<T: Serialize + ?Sized>(record: &T) -> Result<Self, EhrError> {
        let value = serde_json::to_value(record)
            .map_err(|e| EhrError::internal(format!("failed to encode wire record: {e}")))?;
        let Value::Object(map) = value else {
            return Err(EhrError::internal(
                "failed to encode wire record: expected an object",
            ));
        };
        let mut values = Self::new();
        values.flatten_into(map)?;
        Ok(values)
    }

    fn flatten_into(&mut self, map: Map<String, Value>) -> Result<(), EhrError> {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    if !s.is_empty() {
                        self.set(key, s);
                    }
                }
                Value::Bool(b) => self.set(key, b.to_string()),
                Value::Number(n) => self.set(key, n.to_string()),
                Value::Object(nested) => self.flatten_into(nested)?,
                Value::Array(_) => {
                    return Err(EhrError::internal(format!(
                        "failed to encode wire record: field {key} is a list"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Insert or replace a value. An empty value removes the key, so blank
    /// fields never reach the wire; see [`insert_raw`](Self::insert_raw).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.pairs.retain(|(k, _)| *k != key);
        } else {
            self.put(key, value);
        }
    }

    /// Set the key only when a non-empty value is present.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Explicitly send `key=` for endpoints whose contract requires the
    /// parameter to be present even when blank.
    pub fn insert_raw(&mut self, key: impl Into<String>) {
        self.put(key.into(), String::new());
    }

    fn put(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Merge `other` into `self`; keys from `other` win, empty markers included.
    pub fn extend(&mut self, other: WireValues) {
        for (k, v) in other.pairs {
            self.put(k, v);
        }
    }

    /// `application/x-www-form-urlencoded` rendering.
    pub fn to_form_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// JSON object whose members are the string pairs.
    pub fn to_json_object(&self) -> Value {
        Value::Object(
            self.pairs
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for WireValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}
