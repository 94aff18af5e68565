//! Dynamic document representation.
//!
//! This module provides the [`Value`] enum, the recursive document produced by
//! deserializing a flat sequence of form pairs. A document is one of three
//! kinds:
//!
//! - [`Value::Record`]: an insertion-ordered mapping from segment names to
//!   sub-documents
//! - [`Value::List`]: a dense, zero-based sequence of sub-documents
//! - [`Value::Leaf`]: a raw serialized value, kept as the string the form
//!   control produced
//!
//! Leaves are deliberately opaque: this crate reconstructs structure, and any
//! type coercion (parsing numbers, splitting comma-separated lists) belongs to
//! the caller.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use formtree::Value;
//!
//! // From primitives
//! let leaf = Value::from("hello");
//! let list = Value::from(vec![Value::from("a"), Value::from("b")]);
//!
//! // Using the form! macro
//! use formtree::form;
//! let doc = form!({
//!     "name": "Alice",
//!     "tags": ["rust", "forms"]
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use formtree::Value;
//!
//! let value = Value::from("42");
//! assert!(value.is_leaf());
//! assert_eq!(value.as_leaf(), Some("42"));
//! ```
//!
//! ### Serializing Downstream
//!
//! [`Value`] implements [`serde::Serialize`], so a finished document can be
//! handed to any serde serializer:
//!
//! ```rust
//! use formtree::from_pairs;
//!
//! let doc = from_pairs([("user.name", "Alice")]).unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"{"user":{"name":"Alice"}}"#);
//! ```

use crate::RecordMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed document node.
///
/// Every node in a deserialized document is one of these three kinds. The
/// kind of a node is fixed by the first pair that touches it; a later pair
/// that needs a different kind at the same location is a reportable conflict
/// rather than a silent coercion (see [`Error::KindConflict`]).
///
/// [`Error::KindConflict`]: crate::Error::KindConflict
///
/// # Examples
///
/// ```rust
/// use formtree::{RecordMap, Value};
///
/// let leaf = Value::Leaf("hello".to_string());
/// let list = Value::List(vec![leaf.clone()]);
/// let record = Value::Record(RecordMap::new());
///
/// assert!(leaf.is_leaf());
/// assert!(list.is_list());
/// assert!(record.is_record());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An insertion-ordered map of named sub-documents.
    Record(RecordMap),
    /// A dense, zero-based sequence of sub-documents.
    List(Vec<Value>),
    /// An opaque serialized value.
    Leaf(String),
}

/// The kind tag of a [`Value`] node, used in conflict diagnostics.
///
/// # Examples
///
/// ```rust
/// use formtree::{Kind, Value};
///
/// assert_eq!(Value::from("x").kind(), Kind::Leaf);
/// assert_eq!(Kind::Record.to_string(), "record");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Record,
    List,
    Leaf,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Record => "record",
            Kind::List => "list",
            Kind::Leaf => "leaf",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the [`Kind`] tag of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Record(_) => Kind::Record,
            Value::List(_) => Kind::List,
            Value::Leaf(_) => Kind::Leaf,
        }
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a leaf.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    /// If the value is a record, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordMap> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// If the value is a leaf, returns the serialized text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::Value;
    ///
    /// assert_eq!(Value::from("42").as_leaf(), Some("42"));
    /// assert_eq!(Value::List(vec![]).as_leaf(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a named field on a record.
    ///
    /// Returns `None` if the value is not a record or the key is absent.
    /// Callers distinguish "missing field" (this returns `None`) from
    /// "empty field" (a leaf holding the empty string).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::from_pairs;
    ///
    /// let doc = from_pairs([("a.b", "1")]).unwrap();
    /// let inner = doc.get("a").unwrap();
    /// assert_eq!(inner.get("b").and_then(|v| v.as_leaf()), Some("1"));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(map) => map.get(key),
            _ => None,
        }
    }
}

impl Default for Value {
    /// The default document is an empty record, matching what
    /// [`from_pairs`](crate::from_pairs) returns for empty input.
    fn default() -> Self {
        Value::Record(RecordMap::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Leaf(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Value::List(list) => {
                write!(f, "[")?;
                for (i, element) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Record(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", key.replace('"', "\\\""), value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Leaf(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Record(map) => {
                use serde::ser::SerializeMap;
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    entries.serialize_entry(k, v)?;
                }
                entries.end()
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Leaf(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Leaf(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<RecordMap> for Value {
    fn from(value: RecordMap) -> Self {
        Value::Record(value)
    }
}
