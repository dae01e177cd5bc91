//! Request parameter set.
//!
//! A [`ParameterSet`] carries every input and output of one allocation
//! request as an ordered string-to-string mapping. One is created fresh per
//! request, filled by normalization and allocation, and discarded once the
//! response has been rendered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;

/// Key under which a user-facing validation message is carried.
pub const ERROR_KEY: &str = "error";

/// Ordered mapping of request/response fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Set `key` to the derived value only when no value is present yet.
    /// User-supplied values are never overwritten.
    pub fn fill<F>(&mut self, key: &str, derive: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce() -> Result<String, Box<dyn Error>>,
    {
        if !self.contains(key) {
            let value = derive()?;
            self.insert(key, value);
        }
        Ok(())
    }

    /// The validation message, empty when the request succeeded.
    pub fn error(&self) -> &str {
        self.get(ERROR_KEY).unwrap_or("")
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.insert(ERROR_KEY, message);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
