//! Error types for document building.
//!
//! The deserializer is total over any path string: malformed dots and
//! malformed bracket groups degrade to plain names and never abort a call.
//! The one reportable condition is a *kind conflict*, where two pairs
//! disagree about what lives at a location in the document (a key used first
//! as a record and later as a list, a leaf descended through as if it were a
//! record, and so on). The original behavior in this situation was silent
//! coercion; this implementation fails fast instead.
//!
//! ## Examples
//!
//! ```rust
//! use formtree::{from_pairs, Error};
//!
//! // "a" is fixed as a leaf by the first pair, then used as a record.
//! let result = from_pairs([("a", "1"), ("a.b", "2")]);
//!
//! match result {
//!     Err(Error::KindConflict { key, .. }) => assert_eq!(key, "a.b"),
//!     other => panic!("expected a kind conflict, got {:?}", other),
//! }
//! ```

use crate::Kind;
use thiserror::Error;

/// Represents all possible errors that can occur while building a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two pairs disagree about the kind of node at a location.
    ///
    /// `key` is the full path of the pair being inserted, `at` the segment
    /// name where the kinds collided, `expected` the kind that segment needs,
    /// and `found` the kind an earlier pair already fixed there.
    #[error("conflicting kinds for key `{key}` at segment `{at}`: expected {expected}, found {found}")]
    KindConflict {
        key: String,
        at: String,
        expected: Kind,
        found: Kind,
    },
}

impl Error {
    /// Creates a kind-conflict error for the given key and segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::{Error, Kind};
    ///
    /// let err = Error::kind_conflict("a.b", "a", Kind::Record, Kind::Leaf);
    /// assert!(err.to_string().contains("expected record, found leaf"));
    /// ```
    pub fn kind_conflict(key: &str, at: &str, expected: Kind, found: Kind) -> Self {
        Error::KindConflict {
            key: key.to_string(),
            at: at.to_string(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
