//! The hstore pair-level state machine and its lazy pull interface.
//!
//! The parser is a single forward cursor over an immutable input buffer. One
//! coarse state machine tracks progress through each `key=>value,` unit and
//! delegates to two character-level scanners: [`HStoreParser::scan_quoted`]
//! for double-quoted tokens (with `\"` and `\\` escapes) and
//! [`HStoreParser::scan_word`] for unquoted runs. Tokens are borrow-first:
//! they stay subslices of the input until the first escape forces an owned
//! copy (see [`token_buffer`]).
//!
//! All delimiters and the whitespace classification are ASCII, so the cursor
//! works in byte offsets; multi-byte UTF-8 sequences can never collide with a
//! delimiter byte and pass through tokens untouched. Every reported error
//! carries the byte offset where it was detected.

mod error;
mod token_buffer;


use alloc::borrow::Cow;
use core::iter::FusedIterator;

pub use error::{ErrorKind, ParseError};
use token_buffer::TokenBuffer;

use crate::entry::Entry;

const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';
const EQUALS: u8 = b'=';
const GREATER: u8 = b'>';
const COMMA: u8 = b',';
const NULL_SENTINEL: &str = "NULL";

/// Progress through one `key=>value,` unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairState {
    BeforeKey,
    BeforeEquals,
    BeforeGreater,
    BeforeValue,
    BeforeComma,
}

/// A single-pass cursor over one hstore text buffer.
///
/// The parser borrows the input for the duration of the decode and holds no
/// state beyond the cursor; build one per decode call and discard it
/// afterwards. [`next_entry`] is the low-level "produce the next optional
/// pair" pull interface; [`parse`](crate::parse) wraps it in an iterator
/// with one pair of lookahead.
///
/// [`next_entry`]: HStoreParser::next_entry
#[derive(Debug)]
pub struct HStoreParser<'src> {
    raw: &'src str,
    cursor: usize,
}

impl<'src> HStoreParser<'src> {
    /// Creates a parser positioned at the start of `raw`.
    #[must_use]
    pub fn new(raw: &'src str) -> Self {
        Self { raw, cursor: 0 }
    }

    /// Scans forward from the current cursor and produces the next pair, or
    /// `Ok(None)` once only trailing whitespace remains.
    ///
    /// # Errors
    ///
    /// Any grammar violation terminates the decode with a [`ParseError`]
    /// carrying the byte offset where it was detected. The parser must not
    /// be pulled again after an error.
    pub fn next_entry(&mut self) -> Result<Option<Entry<'src>>, ParseError> {
        let bytes = self.raw.as_bytes();
        let mut key: Option<Cow<'src, str>> = None;
        let mut value: Option<Cow<'src, str>> = None;
        let mut state = PairState::BeforeKey;

        // The scan window closes as soon as the cursor reaches the end of
        // the buffer. Reaching it in `BeforeComma` finalizes the pair as if
        // the closing comma were present, which is how the last pair of a
        // database-emitted hstore (no trailing comma) is accepted.
        'pair: while self.cursor < bytes.len() {
            let at = self.cursor;
            let ch = bytes[at];
            self.cursor += 1;
            match state {
                PairState::BeforeKey => {
                    if ch.is_ascii_whitespace() {
                        continue;
                    }
                    key = Some(if ch == QUOTE {
                        self.scan_quoted(at)?
                    } else {
                        // hstore has no null keys, so an unquoted NULL here
                        // stays the literal word.
                        Cow::Borrowed(self.scan_word(at, EQUALS)?)
                    });
                    state = PairState::BeforeEquals;
                }
                PairState::BeforeEquals => {
                    if ch.is_ascii_whitespace() {
                        continue;
                    }
                    if ch != EQUALS {
                        return Err(ParseError::new(ErrorKind::ExpectedSeparator, at));
                    }
                    state = PairState::BeforeGreater;
                }
                PairState::BeforeGreater => {
                    // `>` must follow `=` immediately, no whitespace.
                    if ch != GREATER {
                        return Err(ParseError::new(ErrorKind::ExpectedSeparator, at));
                    }
                    state = PairState::BeforeValue;
                }
                PairState::BeforeValue => {
                    if ch.is_ascii_whitespace() {
                        continue;
                    }
                    value = if ch == QUOTE {
                        // A quoted NULL is the literal string, never the
                        // null sentinel.
                        Some(self.scan_quoted(at)?)
                    } else {
                        let word = self.scan_word(at, COMMA)?;
                        if word.eq_ignore_ascii_case(NULL_SENTINEL) {
                            None
                        } else {
                            Some(Cow::Borrowed(word))
                        }
                    };
                    state = PairState::BeforeComma;
                }
                PairState::BeforeComma => {
                    if ch.is_ascii_whitespace() {
                        continue;
                    }
                    if ch != COMMA {
                        return Err(ParseError::new(ErrorKind::UnterminatedValue, at));
                    }
                    break 'pair;
                }
            }
        }

        // Either a comma closed the pair or the buffer ran out.
        match state {
            PairState::BeforeKey => Ok(None),
            PairState::BeforeComma => match key {
                Some(key) => Ok(Some(Entry { key, value })),
                None => Err(ParseError::new(
                    ErrorKind::InternalInconsistency,
                    self.cursor,
                )),
            },
            _ => Err(ParseError::new(ErrorKind::UnterminatedValue, self.cursor)),
        }
    }

    /// Consumes a quoted token; `open` is the offset of the opening quote
    /// the caller already read. Recognizes exactly the `\"` and `\\` escape
    /// sequences.
    fn scan_quoted(&mut self, open: usize) -> Result<Cow<'src, str>, ParseError> {
        let bytes = self.raw.as_bytes();
        let mut token = TokenBuffer::new(self.raw, open + 1);
        while self.cursor < bytes.len() {
            let at = self.cursor;
            self.cursor += 1;
            match bytes[at] {
                BACKSLASH => match bytes.get(self.cursor).copied() {
                    Some(next @ (QUOTE | BACKSLASH)) => {
                        token.escape(at, char::from(next));
                        self.cursor += 1;
                    }
                    _ => return Err(ParseError::new(ErrorKind::InvalidEscape, at)),
                },
                QUOTE => return Ok(token.finish(at)),
                _ => {}
            }
        }
        Err(ParseError::new(ErrorKind::UnterminatedQuote, open))
    }

    /// Consumes an unquoted token starting at `start` (already read by the
    /// caller), up to whitespace, `stop`, or the end of the buffer. The stop
    /// byte is left unconsumed for the pair loop to re-read. No escaping
    /// applies; a literal quote mid-word is an error.
    fn scan_word(&mut self, start: usize, stop: u8) -> Result<&'src str, ParseError> {
        let bytes = self.raw.as_bytes();
        let mut end = start;
        while end < bytes.len() {
            let ch = bytes[end];
            if ch == QUOTE {
                return Err(ParseError::new(ErrorKind::UnexpectedQuote, end));
            }
            if ch.is_ascii_whitespace() || ch == stop {
                break;
            }
            end += 1;
        }
        self.cursor = end;
        Ok(&self.raw[start..end])
    }
}

/// A lazy, single-pass sequence of pairs in source order.
///
/// The iterator keeps exactly one pair of lookahead, computed eagerly on
/// construction and after each pull, so [`has_next`] can answer without
/// consuming. The first grammar violation is yielded once as an `Err` and
/// the sequence fuses: pulling past exhaustion, or past an error, yields
/// `None` forever and never resumes parsing.
///
/// [`has_next`]: Entries::has_next
#[derive(Debug)]
pub struct Entries<'src> {
    parser: HStoreParser<'src>,
    lookahead: Option<Result<Entry<'src>, ParseError>>,
}

impl<'src> Entries<'src> {
    /// Builds the sequence over `raw` and computes the first lookahead pair.
    #[must_use]
    pub fn new(raw: &'src str) -> Self {
        let mut parser = HStoreParser::new(raw);
        let lookahead = parser.next_entry().transpose();
        Self { parser, lookahead }
    }

    /// Returns `true` if another pair will be produced. A pending parse
    /// error does not count as a pair.
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!(self.lookahead, Some(Ok(_)))
    }
}

impl<'src> Iterator for Entries<'src> {
    type Item = Result<Entry<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.lookahead.take()?;
        if item.is_ok() {
            self.lookahead = self.parser.next_entry().transpose();
        }
        Some(item)
    }
}

impl FusedIterator for Entries<'_> {}
