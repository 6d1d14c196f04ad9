//! The key/value pair type produced by the parser.

use alloc::borrow::Cow;

/// One `key=>value` pair decoded from hstore text.
///
/// `hstore` forbids null keys, so `key` is always present; `value` is `None`
/// exactly when the source held the unquoted `NULL` sentinel. A quoted
/// `"NULL"` stays the literal four-letter string.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<'src> {
    /// The pair's key.
    pub key: Cow<'src, str>,
    /// The pair's value, or `None` for the SQL null.
    pub value: Option<Cow<'src, str>>,
}

impl Entry<'_> {
    /// Returns `true` when the value is the SQL null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Detaches the entry from the input buffer it may borrow from.
    #[must_use]
    pub fn into_owned(self) -> Entry<'static> {
        Entry {
            key: Cow::Owned(self.key.into_owned()),
            value: self.value.map(|value| Cow::Owned(value.into_owned())),
        }
    }
}
