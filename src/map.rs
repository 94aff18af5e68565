//! Ordered map type for record nodes.
//!
//! This module provides [`RecordMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for record fields. Pairs arrive in document
//! order (the order form controls appear in markup), and keeping that order
//! in the output makes serialization and error messages deterministic.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: fields serialize in the order they were built
//! - **Iteration order**: fields are iterated in insertion order
//! - **Compatibility**: easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use formtree::{RecordMap, Value};
//!
//! let mut map = RecordMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from("30"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_leaf()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// An ordered map of string keys to document values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which keeps built documents deterministic with respect to their input
/// pair sequence.
///
/// # Examples
///
/// ```rust
/// use formtree::{RecordMap, Value};
///
/// let mut map = RecordMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMap(IndexMap<String, Value>);

impl RecordMap {
    /// Creates an empty `RecordMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::RecordMap;
    ///
    /// let map = RecordMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        RecordMap(IndexMap::new())
    }

    /// Creates an empty `RecordMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RecordMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::{RecordMap, Value};
    ///
    /// let mut map = RecordMap::new();
    /// assert!(map.insert("key".to_string(), Value::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the entry for the given key for in-place manipulation.
    ///
    /// This is what the tree builder uses to get-or-create child nodes.
    pub fn entry(&mut self, key: String) -> Entry<'_, String, Value> {
        self.0.entry(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Default for RecordMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for RecordMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for RecordMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        RecordMap(IndexMap::from_iter(iter))
    }
}
