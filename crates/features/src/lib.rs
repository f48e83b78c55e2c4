// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Feature maps attached to annotations.
//!
//! A `FeatureMap` is a set of key/value pairs with unique keys. Insertion
//! order is irrelevant: two maps holding the same pairs are equal and hash
//! the same, which is what lets annotations use their features as part of
//! their value identity.
//!
//! The one query-facing capability is subsumption:
//!
//! ```
//! use marginalia_features::{FeatureMap, Value};
//!
//! let mut features = FeatureMap::new();
//! features.insert("kind", "person");
//! features.insert("score", 3);
//!
//! let mut constraints = FeatureMap::new();
//! constraints.insert("kind", "person");
//!
//! assert!(features.subsumes(&constraints));
//! assert!(!constraints.subsumes(&features));
//! assert_eq!(features.get("score"), Some(&Value::Int(3)));
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

/// A feature value.
///
/// Values are totally ordered so that sets of values can themselves be
/// values, and hashable so that feature maps can be hashed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// An explicitly absent value. A key mapped to `Null` is still present.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Set(BTreeSet<Value>),
}

impl Value {
    /// Check if this is the `Null` value.
    pub fn is_null(&self) -> bool {
        return matches!(self, Value::Null);
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        return match self {
            Value::Str(s) => Some(s),
            _ => None,
        };
    }

    /// Get the integer contents, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        return match self {
            Value::Int(i) => Some(*i),
            _ => None,
        };
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => return write!(f, "null"),
            Value::Bool(b) => return write!(f, "{}", b),
            Value::Int(i) => return write!(f, "{}", i),
            Value::Str(s) => return write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                return write!(f, "]");
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                return write!(f, "}}");
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        return Value::Bool(b);
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        return Value::Int(i);
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        return Value::Int(i as i64);
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        return Value::Int(i as i64);
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        return Value::Str(s.to_string());
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        return Value::Str(s);
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        return match value {
            Some(v) => v.into(),
            None => Value::Null,
        };
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        return Value::List(items.into_iter().map(Into::into).collect());
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collect into a `Set`. Use `Value::from(vec)` for an ordered list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Value::Set(iter.into_iter().map(Into::into).collect());
    }
}

/// A map from feature names to values.
///
/// Backed by a `BTreeMap` so that equality and hashing do not depend on the
/// order in which features were inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeatureMap {
    entries: BTreeMap<String, Value>,
}

impl FeatureMap {
    /// Create an empty feature map.
    pub fn new() -> FeatureMap {
        return FeatureMap {
            entries: BTreeMap::new(),
        };
    }

    /// Insert a feature, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        return self.entries.insert(key.into(), value.into());
    }

    /// Get the value of a feature.
    pub fn get(&self, key: &str) -> Option<&Value> {
        return self.entries.get(key);
    }

    /// Remove a feature, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        return self.entries.remove(key);
    }

    /// Check if a feature is present, even if it maps to `Null`.
    pub fn contains_key(&self, key: &str) -> bool {
        return self.entries.contains_key(key);
    }

    /// Check if every one of `keys` is present. Values are ignored.
    pub fn contains_keys<K: AsRef<str>>(&self, keys: &[K]) -> bool {
        return keys.iter().all(|k| self.entries.contains_key(k.as_ref()));
    }

    /// Copy every feature of `other` into this map, overwriting on conflict.
    pub fn extend_from(&mut self, other: &FeatureMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Remove all features.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check if this map holds at least the pairs in `constraints`.
    ///
    /// True iff for every key in `constraints` this map contains the key with
    /// an equal value. An empty constraint map is subsumed by every map.
    pub fn subsumes(&self, constraints: &FeatureMap) -> bool {
        return constraints
            .entries
            .iter()
            .all(|(key, value)| self.entries.get(key) == Some(value));
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    /// Check if the map has no features.
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Iterate over feature names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        return self.entries.keys().map(String::as_str);
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        return self.entries.iter();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FeatureMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        return map;
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for FeatureMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a FeatureMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        return self.entries.iter();
    }
}
