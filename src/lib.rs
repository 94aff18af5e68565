//! # formtree
//!
//! Deserialize a flat, ordered sequence of `(path, value)` pairs — the kind
//! produced by serializing an HTML form in document order — into one nested
//! record/list/leaf document.
//!
//! ## Why?
//!
//! Serializing a form yields a flat list like:
//!
//! ```text
//! id                       = web
//! container.docker.image   = nginx
//! ports[0]                 = 8080
//! ports[1]                 = 8443
//! env[].key                = PORT
//! env[].key                = HOST
//! ```
//!
//! The field names encode structure: dots nest records, `[k]` places a value
//! at a fixed list position, and `[]` appends a fresh list element per
//! occurrence. `formtree` reconstructs the nested document those names
//! describe, exactly inverting the flat serialization.
//!
//! ## Key Features
//!
//! - **Order-faithful**: pairs are consumed in input order, which is what
//!   gives `[]` its append-per-occurrence semantics
//! - **Lenient paths**: stray dots and malformed bracket groups degrade
//!   gracefully instead of aborting the call
//! - **Fail-fast conflicts**: a key used as a record by one pair and a list
//!   by another is a descriptive error, never silent corruption
//! - **Serde Compatible**: the output [`Value`] implements
//!   [`serde::Serialize`], so it flows straight into `serde_json` or any
//!   other serializer
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! formtree = "0.1"
//! ```
//!
//! ### Building a document
//!
//! ```rust
//! use formtree::{form, from_pairs};
//!
//! let doc = from_pairs([
//!     ("id", "web"),
//!     ("container.docker.image", "nginx"),
//!     ("ports[0]", "8080"),
//!     ("ports[1]", "8443"),
//!     ("env[].key", "PORT"),
//!     ("env[].key", "HOST"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     doc,
//!     form!({
//!         "id": "web",
//!         "container": {"docker": {"image": "nginx"}},
//!         "ports": ["8080", "8443"],
//!         "env": [{"key": "PORT"}, {"key": "HOST"}]
//!     })
//! );
//! ```
//!
//! ### Consuming the result
//!
//! Leaves stay opaque strings; coercion (parsing numbers, splitting
//! comma-separated values) is the caller's job:
//!
//! ```rust
//! use formtree::from_pairs;
//!
//! let doc = from_pairs([("instances", "3")]).unwrap();
//! let instances: u32 = doc
//!     .get("instances")
//!     .and_then(|v| v.as_leaf())
//!     .and_then(|s| s.parse().ok())
//!     .unwrap_or(1);
//! assert_eq!(instances, 3);
//! ```
//!
//! ## Path Grammar
//!
//! The full grammar, including the tolerance rules for malformed input, is
//! documented in the [`spec`] module.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All list indexing is bounds-checked or grown first
//! - Proper error propagation with `Result` types
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - reconstructing a nested document from flat pairs
//! - **`form_submission.rs`** - a form-submission handler doing its own
//!   downstream coercion
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod path;
pub mod spec;
pub mod value;

pub use de::from_pairs;
pub use error::{Error, Result};
pub use map::RecordMap;
pub use value::{Kind, Value};
