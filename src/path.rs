//! Path tokenizer.
//!
//! A path is a dot/bracket-encoded string naming a location in the output
//! document, as produced by HTML form markup conventions:
//!
//! ```text
//! container.docker.image          plain nesting
//! ports[0]                        explicit list index
//! env[].key                       auto index: append a fresh element
//! ```
//!
//! [`tokenize`] splits a path into [`Segment`]s. It is pure and total: there
//! is no path string it rejects. Empty tokens produced by leading, trailing,
//! or repeated dots are dropped, so `".a.b"`, `"a.b."`, and `"a..b"` all
//! tokenize identically to `"a.b"`. A malformed bracket group (unterminated,
//! non-digit content, trailing text after `]`) is kept as literal text in the
//! segment name rather than rejected, since form markup treats names as
//! opaque text.

use std::fmt;

/// One dot-delimited unit of a path, optionally carrying a bracketed index.
///
/// Segments borrow from the path they were tokenized from; they only live
/// for the duration of one insertion.
///
/// # Examples
///
/// ```rust
/// use formtree::path::{tokenize, Index};
///
/// let segments = tokenize("env[].key");
/// assert_eq!(segments[0].name, "env");
/// assert_eq!(segments[0].bracket, Some(Index::Auto));
/// assert_eq!(segments[1].name, "key");
/// assert_eq!(segments[1].bracket, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment name, with any malformed bracket text passed through.
    pub name: &'a str,
    /// The trailing bracket group, if the segment carried a well-formed one.
    pub bracket: Option<Index>,
}

impl<'a> Segment<'a> {
    /// Returns `true` if the segment carries no bracket group.
    #[inline]
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.bracket.is_none()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bracket {
            None => write!(f, "{}", self.name),
            Some(Index::Explicit(i)) => write!(f, "{}[{}]", self.name, i),
            Some(Index::Auto) => write!(f, "{}[]", self.name),
        }
    }
}

/// A bracketed index suffix on a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Index {
    /// `[k]` with a non-negative integer literal: a fixed list position.
    Explicit(usize),
    /// `[]`: append a new list element now.
    Auto,
}

/// Splits a path into its segments.
///
/// Splits on `.`, drops empty tokens, and classifies an optional trailing
/// bracket group on each remaining token. The result order matches the
/// textual order of the path.
///
/// # Examples
///
/// ```rust
/// use formtree::path::{tokenize, Index};
///
/// let segments = tokenize("a[0].b");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].bracket, Some(Index::Explicit(0)));
/// assert!(segments[1].is_plain());
///
/// // Malformed dots collapse away
/// assert_eq!(tokenize(".a..b."), tokenize("a.b"));
/// ```
#[must_use]
pub fn tokenize(path: &str) -> Vec<Segment<'_>> {
    path.split('.')
        .filter(|token| !token.is_empty())
        .map(classify)
        .collect()
}

/// Classifies one non-empty token as plain, explicitly indexed, or
/// auto-indexed.
///
/// Only a well-formed trailing group `[` + (digits | empty) + `]` is
/// stripped. Anything else leaves the token untouched as a plain name,
/// including digit runs too large for `usize` (no real form produces them,
/// and an explicit index that large could not be materialized anyway).
fn classify(token: &str) -> Segment<'_> {
    if let Some(body) = token.strip_suffix(']') {
        if let Some(open) = body.rfind('[') {
            let name = &body[..open];
            let digits = &body[open + 1..];

            if digits.is_empty() {
                return Segment {
                    name,
                    bracket: Some(Index::Auto),
                };
            }

            if digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(index) = digits.parse::<usize>() {
                    return Segment {
                        name,
                        bracket: Some(Index::Explicit(index)),
                    };
                }
            }
        }
    }

    Segment {
        name: token,
        bracket: None,
    }
}
