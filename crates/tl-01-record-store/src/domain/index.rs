//! # Key Index
//!
//! The ordered list of live keys for one record type, persisted as a JSON
//! array of strings under the type's index key.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyIndex {
    keys: Vec<String>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key` unless already present. Returns whether it was added.
    pub fn append(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Remove the first occurrence of `key`. Returns whether one was found.
    pub fn remove_first(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = KeyIndex::new();
        for key in iter {
            let key = key.into();
            index.append(&key);
        }
        index
    }
}
