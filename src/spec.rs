//! Path Grammar Specification
//!
//! This module documents the path grammar accepted by
//! [`from_pairs`](crate::from_pairs) and [`tokenize`](crate::path::tokenize).
//!
//! # Overview
//!
//! A path is a string identifying where a value belongs in the output
//! document. It is the name attribute of a form control, following the
//! nesting conventions used by form markup: dot-separated names with
//! optional bracketed indices. The grammar is deliberately small; it is
//! exactly the subset needed to losslessly invert a flat form serialization
//! into a nested document, not a general query language.
//!
//! # Core Syntax
//!
//! ## Segments
//!
//! A path is an ordered sequence of segments separated by `.`:
//!
//! ```text
//! container.docker.image
//! ```
//!
//! **Rules**:
//! - Empty tokens are dropped, so leading, trailing, and repeated dots are
//!   tolerated: `.a.b`, `a.b.`, and `a..b` all mean `a.b`
//! - A path with no segments at all (`""`, `"."`, `"..."`) addresses
//!   nothing; its value is dropped
//! - Segment names are opaque text; any character other than `.` is legal,
//!   including whitespace and unicode
//!
//! ## Explicit indices
//!
//! A segment may end in one bracket group holding a non-negative integer
//! literal, selecting a fixed list position:
//!
//! ```text
//! ports[0]
//! items[2].name
//! ```
//!
//! **Rules**:
//! - Lists are dense and zero-based; setting index `k` on a shorter list
//!   first fills the intermediate slots with empty records
//! - A repeated explicit index overwrites the earlier leaf (last write wins)
//!
//! ## Auto indices
//!
//! An empty bracket group means "append a new list element now":
//!
//! ```text
//! env[].key
//! env[].value
//! ```
//!
//! **Rules**:
//! - Every occurrence allocates a fresh element, in input order, even when
//!   two pairs carry the identical path string; this is what lets repeated
//!   rows of form controls produce one list element per row
//! - Allocation order is input order, never lexical path equality
//!
//! ## Malformed brackets
//!
//! A bracket group that is unterminated, holds non-digit content, or is
//! followed by trailing text does not classify; the whole token is kept as a
//! plain name:
//!
//! ```text
//! a[x]     ->  the record key "a[x]"
//! a[       ->  the record key "a["
//! a[0]b    ->  the record key "a[0]b"
//! ```
//!
//! # Kind discipline
//!
//! The first pair that touches a location fixes its kind (record, list, or
//! leaf). A later pair that needs a different kind at the same location is
//! rejected with [`Error::KindConflict`](crate::Error::KindConflict) rather
//! than coerced. The one sanctioned re-assignment is leaf over leaf (or over
//! an empty filler record) at the identical location: last write wins.
//!
//! # Worked example
//!
//! ```rust
//! use formtree::{form, from_pairs};
//!
//! let doc = from_pairs([
//!     ("id", "web"),
//!     ("cpus", "0.1"),
//!     ("container.docker.image", "nginx"),
//!     ("container.volumes[0].hostPath", "/var/data"),
//!     ("env[].key", "PORT"),
//!     ("env[].key", "HOST"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     doc,
//!     form!({
//!         "id": "web",
//!         "cpus": "0.1",
//!         "container": {
//!             "docker": {"image": "nginx"},
//!             "volumes": [{"hostPath": "/var/data"}]
//!         },
//!         "env": [{"key": "PORT"}, {"key": "HOST"}]
//!     })
//! );
//! ```
