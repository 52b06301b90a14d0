//! Function descriptors available to nodes.
//!
//! The emitter never interprets a descriptor. Node types that emit calls
//! decide which fields they read (a native name, an arity, and so on); the
//! table only guarantees exact-name lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Opaque record describing a callable target-language function.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionDescriptor {
    fields: Map<String, JsonValue>,
}

impl FunctionDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any previous value under the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    /// Get a string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(JsonValue::as_str)
    }

    /// Get an unsigned integer field.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(JsonValue::as_u64)
    }

    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }
}

impl From<Map<String, JsonValue>> for FunctionDescriptor {
    fn from(fields: Map<String, JsonValue>) -> Self {
        Self { fields }
    }
}

/// Name-to-descriptor mapping supplied to the compiler at construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionTable {
    functions: FxHashMap<String, FunctionDescriptor>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON object of `name -> descriptor object`.
    ///
    /// ```
    /// use jsnode_emitter::FunctionTable;
    ///
    /// let table = FunctionTable::from_json(r#"{"max": {"native": "Math.max"}}"#).unwrap();
    /// assert_eq!(table.get("max").and_then(|f| f.get_str("native")), Some("Math.max"));
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add a function, replacing any previous descriptor under the same name.
    pub fn with(mut self, name: impl Into<String>, descriptor: FunctionDescriptor) -> Self {
        self.functions.insert(name.into(), descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate function names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, FunctionDescriptor)> for FunctionTable {
    fn from_iter<I: IntoIterator<Item = (S, FunctionDescriptor)>>(iter: I) -> Self {
        Self {
            functions: iter
                .into_iter()
                .map(|(name, descriptor)| (name.into(), descriptor))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/functions.rs"]
mod tests;
