//! Draining adapter that aggregates pairs into an insertion-ordered map.

use alloc::{borrow::Cow, string::String};

use indexmap::IndexMap;

use crate::{ParseError, parse};

/// Insertion-ordered aggregation of a decoded hstore buffer.
pub type OrderedMap = IndexMap<String, Option<String>>;

/// Drains the full pair sequence for `raw` into an insertion-ordered map.
///
/// The parser preserves duplicate keys as separate pairs; here the later
/// value wins while the key keeps the position of its first occurrence, per
/// [`IndexMap::insert`].
///
/// # Errors
///
/// Surfaces the first [`ParseError`] unchanged, offset included.
pub fn to_ordered_map(raw: &str) -> Result<OrderedMap, ParseError> {
    let mut map = OrderedMap::new();
    for entry in parse(raw) {
        let entry = entry?;
        map.insert(entry.key.into_owned(), entry.value.map(Cow::into_owned));
    }
    Ok(map)
}
