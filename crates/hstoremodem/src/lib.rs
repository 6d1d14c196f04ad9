//! A lazy, position-tracking parser for the PostgreSQL `hstore` text format.
//!
//! An `hstore` column serializes as a flat sequence of `key=>value` pairs,
//! comma separated, with double-quoted and unquoted tokens, backslash
//! escaping inside quotes, and an unquoted case-insensitive `NULL` sentinel
//! for absent values. [`parse`] decodes such a buffer into an ordered
//! sequence of [`Entry`] pairs, one at a time, or fails with a
//! [`ParseError`] carrying the byte offset of the violation.
//!
//! Tokens are borrow-first: a key or value without escape sequences is a
//! plain subslice of the input, and only the first escape forces an owned
//! copy.
//!
//! ```
//! use hstoremodem::parse;
//!
//! let entries: Vec<_> = parse(r#""city"=>"Berlin", "zip"=>NULL"#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(entries[0].key, "city");
//! assert_eq!(entries[0].value.as_deref(), Some("Berlin"));
//! assert!(entries[1].is_null());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod entry;
#[cfg(feature = "std")]
mod map;
mod parser;

pub use entry::Entry;
#[cfg(feature = "std")]
pub use map::{OrderedMap, to_ordered_map};
pub use parser::{Entries, ErrorKind, HStoreParser, ParseError};

/// Decodes `raw` as hstore text, returning the lazy sequence of pairs.
///
/// The sequence is single-pass and forward-only; pairs appear in source
/// order and duplicate keys are preserved as separate pairs. The first
/// grammar violation is yielded as an `Err` and terminates the sequence.
#[must_use]
pub fn parse(raw: &str) -> Entries<'_> {
    Entries::new(raw)
}
