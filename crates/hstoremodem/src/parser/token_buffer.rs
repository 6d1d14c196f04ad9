//! Borrow-first accumulation of quoted tokens.
//!
//! A quoted token with no escape sequences is returned as a plain subslice
//! of the input. The first escape materializes an owned buffer seeded with
//! everything scanned so far; from then on literal runs and unescaped
//! characters append to it. [`TokenBuffer`] tracks the start of the current
//! literal run so the scanner copies run-wise, never byte-by-byte.

use alloc::{borrow::Cow, string::String};

#[derive(Debug)]
pub(crate) struct TokenBuffer<'src> {
    src: &'src str,
    /// Start of the literal run that has not been copied anywhere yet.
    run_start: usize,
    owned: Option<String>,
}

impl<'src> TokenBuffer<'src> {
    /// `start` is the offset just past the opening quote.
    pub fn new(src: &'src str, start: usize) -> Self {
        Self {
            src,
            run_start: start,
            owned: None,
        }
    }

    /// Records an escape sequence whose backslash sits at `at` and which
    /// decodes to `unescaped`: flushes the pending literal run, appends the
    /// decoded character, and resumes the run past the two-byte escape.
    pub fn escape(&mut self, at: usize, unescaped: char) {
        let owned = self.owned.get_or_insert_with(String::new);
        owned.push_str(&self.src[self.run_start..at]);
        owned.push(unescaped);
        self.run_start = at + 2;
    }

    /// Closes the token at `end` (the closing quote). Borrows from the input
    /// when no escape was seen.
    pub fn finish(self, end: usize) -> Cow<'src, str> {
        match self.owned {
            None => Cow::Borrowed(&self.src[self.run_start..end]),
            Some(mut owned) => {
                owned.push_str(&self.src[self.run_start..end]);
                Cow::Owned(owned)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use super::TokenBuffer;

    #[test]
    fn no_escape_borrows() {
        let src = r#""abc""#;
        let token = TokenBuffer::new(src, 1);
        assert!(matches!(token.finish(4), Cow::Borrowed("abc")));
    }

    #[test]
    fn first_escape_materializes() {
        // "a\"b"
        let src = "\"a\\\"b\"";
        let mut token = TokenBuffer::new(src, 1);
        token.escape(2, '"');
        match token.finish(5) {
            Cow::Owned(owned) => assert_eq!(owned, "a\"b"),
            Cow::Borrowed(_) => panic!("an escape must force an owned token"),
        }
    }

    #[test]
    fn consecutive_escapes_keep_literal_runs() {
        // "x\\\"y" -> x\"y
        let src = "\"x\\\\\\\"y\"";
        let mut token = TokenBuffer::new(src, 1);
        token.escape(2, '\\');
        token.escape(4, '"');
        assert_eq!(token.finish(7), Cow::<str>::Owned("x\\\"y".into()));
    }

    #[test]
    fn empty_token() {
        let src = r#""""#;
        let token = TokenBuffer::new(src, 1);
        assert!(matches!(token.finish(1), Cow::Borrowed("")));
    }
}
