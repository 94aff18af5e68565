//! Document deserialization from serialized form pairs.
//!
//! This module provides [`from_pairs`], which reconstructs one nested
//! [`Value`] document from a flat, ordered sequence of `(path, value)` pairs
//! as produced by serializing form controls in document order.
//!
//! ## Overview
//!
//! - **Single pass**: each pair is tokenized and inserted once, in input
//!   order; the whole document is built fresh per call
//! - **Order-sensitive**: auto-index segments (`a[]`) allocate a fresh list
//!   element per occurrence, so two pairs with the identical path string
//!   still produce two distinct elements. Callers must present pairs in a
//!   stable, deterministic order
//! - **Fail fast**: structural kind conflicts abort the call with a
//!   descriptive [`Error::KindConflict`] instead of silently coercing
//!
//! ## Usage
//!
//! ```rust
//! use formtree::from_pairs;
//!
//! let doc = from_pairs([
//!     ("id", "web"),
//!     ("container.docker.image", "nginx"),
//!     ("env[].key", "PORT"),
//!     ("env[].key", "HOST"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     doc.get("container")
//!         .and_then(|c| c.get("docker"))
//!         .and_then(|d| d.get("image"))
//!         .and_then(|v| v.as_leaf()),
//!     Some("nginx")
//! );
//! assert_eq!(doc.get("env").and_then(|v| v.as_list()).map(Vec::len), Some(2));
//! ```

use crate::path::{tokenize, Index, Segment};
use crate::{Error, Kind, RecordMap, Result, Value};

/// Builds one nested document from an ordered sequence of `(path, value)`
/// pairs.
///
/// Pairs are consumed in the given order. Flat paths become nested records,
/// bracketed literal indices place values at fixed list positions (extending
/// the list with empty records as needed), and bracketed empty indices
/// append a fresh list element per occurrence. A repeated plain path
/// overwrites the earlier leaf: last write wins.
///
/// The returned document is always a record at the top level. Empty input
/// yields an empty record, as does a pair whose path contains no segments at
/// all (`""` or only dots): there is nowhere to put such a value, so it is
/// dropped.
///
/// # Examples
///
/// ```rust
/// use formtree::{form, from_pairs};
///
/// let doc = from_pairs([
///     ("a", "1"),
///     ("b.a", "2"),
///     ("b.b", "3"),
/// ])
/// .unwrap();
///
/// assert_eq!(doc, form!({"a": "1", "b": {"a": "2", "b": "3"}}));
/// ```
///
/// # Errors
///
/// Returns [`Error::KindConflict`] when a pair needs a different kind of
/// node at a location than an earlier pair already fixed there.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_pairs<I, K, V>(pairs: I) -> Result<Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut root = RecordMap::new();
    for (key, value) in pairs {
        let key = key.as_ref();
        let segments = tokenize(key);
        insert(&mut root, key, &segments, value.into())?;
    }
    Ok(Value::Record(root))
}

/// Inserts one value at the location the segments describe, mutating `root`.
///
/// Walks every segment but the last to locate the parent record, creating
/// intermediate records and list elements along the way, then assigns the
/// value at the final segment. `key` is the original path string, carried
/// only for error messages.
fn insert(
    root: &mut RecordMap,
    key: &str,
    segments: &[Segment<'_>],
    value: Value,
) -> Result<()> {
    let Some((leaf, intermediate)) = segments.split_last() else {
        return Ok(());
    };

    let mut current = root;
    for segment in intermediate {
        current = descend(current, key, segment)?;
    }
    assign(current, key, leaf, value)
}

/// Resolves one intermediate segment against `current`, returning the record
/// the next segment operates on.
///
/// - Plain: get-or-create `name`, defaulting to an empty record
/// - Explicit index: get-or-create `name` as a list, grow it with empty
///   records until the index exists, step into that element
/// - Auto index: get-or-create `name` as a list, append a fresh empty
///   record unconditionally, step into it
///
/// Every segment addresses its parent by name, so the node an intermediate
/// segment steps into must itself be a record; anything else is a conflict
/// reported against this segment.
fn descend<'v>(
    current: &'v mut RecordMap,
    key: &str,
    segment: &Segment<'_>,
) -> Result<&'v mut RecordMap> {
    let child = match segment.bracket {
        None => current
            .entry(segment.name.to_string())
            .or_insert_with(|| Value::Record(RecordMap::new())),
        Some(Index::Explicit(index)) => {
            let list = get_or_create_list(current, key, segment)?;
            while list.len() <= index {
                list.push(Value::Record(RecordMap::new()));
            }
            &mut list[index]
        }
        Some(Index::Auto) => {
            let list = get_or_create_list(current, key, segment)?;
            // The list's own length is the auto-index cursor: always push,
            // so identical literal paths still allocate distinct elements.
            let fresh = list.len();
            list.push(Value::Record(RecordMap::new()));
            &mut list[fresh]
        }
    };

    match child {
        Value::Record(map) => Ok(map),
        other => Err(Error::kind_conflict(
            key,
            &segment.to_string(),
            Kind::Record,
            other.kind(),
        )),
    }
}

/// Assigns the value at the final segment of a path.
fn assign(current: &mut RecordMap, key: &str, segment: &Segment<'_>, value: Value) -> Result<()> {
    match segment.bracket {
        None => match current.get(segment.name) {
            Some(existing) if !replaceable(existing) => Err(Error::kind_conflict(
                key,
                segment.name,
                Kind::Leaf,
                existing.kind(),
            )),
            _ => {
                current.insert(segment.name.to_string(), value);
                Ok(())
            }
        },
        Some(Index::Explicit(index)) => {
            let list = get_or_create_list(current, key, segment)?;
            while list.len() <= index {
                list.push(Value::Record(RecordMap::new()));
            }
            if replaceable(&list[index]) {
                list[index] = value;
                Ok(())
            } else {
                Err(Error::kind_conflict(
                    key,
                    &segment.to_string(),
                    Kind::Leaf,
                    list[index].kind(),
                ))
            }
        }
        Some(Index::Auto) => {
            let list = get_or_create_list(current, key, segment)?;
            list.push(value);
            Ok(())
        }
    }
}

/// A location may be re-assigned when it holds a leaf (last write wins, the
/// observed behavior for repeated plain paths) or an empty record (the
/// filler used to keep lists dense). Anything already populated is a
/// conflict.
fn replaceable(existing: &Value) -> bool {
    match existing {
        Value::Leaf(_) => true,
        Value::Record(map) => map.is_empty(),
        Value::List(_) => false,
    }
}

/// Gets or creates the list named by a bracketed segment.
fn get_or_create_list<'v>(
    current: &'v mut RecordMap,
    key: &str,
    segment: &Segment<'_>,
) -> Result<&'v mut Vec<Value>> {
    let child = current
        .entry(segment.name.to_string())
        .or_insert_with(|| Value::List(Vec::new()));
    match child {
        Value::List(list) => Ok(list),
        other => Err(Error::kind_conflict(
            key,
            &segment.to_string(),
            Kind::List,
            other.kind(),
        )),
    }
}
