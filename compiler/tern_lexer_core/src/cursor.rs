//! Forward-only cursor over source text.
//!
//! The cursor tracks two counters: a byte offset into the source (for
//! slicing) and a character count (the position reported to diagnostics).
//! Both only ever grow, and every consuming method advances them together.

/// Forward-only cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a caller can keep a snapshot taken at a token
/// boundary. The snapshot is read-only history: there is no way to move an
/// existing cursor backwards.
///
/// # Invariant
///
/// `offset` always falls on a UTF-8 character boundary of `source`, and
/// `position` equals the number of characters in `source[..offset]`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Bytes consumed.
    offset: usize,
    /// Characters consumed.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: 0,
        }
    }

    /// The unconsumed suffix of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The next character, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character after the next one, or `None` if there is none.
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the next character.
    ///
    /// Callers check [`has_next()`](Self::has_next) first. At end of input
    /// this returns `None` and leaves the cursor where it is.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.position += 1;
        Some(c)
    }

    /// Consume the next character only if it is `expected`.
    ///
    /// Returns `true` on a match. On a mismatch the cursor is unchanged.
    #[inline]
    pub fn try_consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while input remains and `pred` holds for the next
    /// one. Returns the consumed text, which may be empty.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.offset]
    }

    /// Consume up to and including the first occurrence of `needle`.
    ///
    /// Returns `true` if `needle` was found. Otherwise the rest of the input
    /// is consumed and `false` is returned.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        let remaining = self.remaining();
        if let Some(at) = memchr::memmem::find(remaining.as_bytes(), needle.as_bytes()) {
            self.advance_bytes(at + needle.len());
            true
        } else {
            self.advance_bytes(remaining.len());
            false
        }
    }

    /// `true` while there is input left to consume.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.offset < self.source.len()
    }

    /// Characters consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Source text from byte offset `start` up to the current offset.
    ///
    /// # Contract
    ///
    /// `start` must be an offset previously returned by
    /// [`offset()`](Self::offset) on this cursor or a snapshot of it.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(
            start <= self.offset,
            "slice start {start} is past the cursor at {}",
            self.offset
        );
        &self.source[start..self.offset]
    }

    /// Advance by `n` bytes, counting the characters skipped.
    ///
    /// `n` must land on a character boundary.
    fn advance_bytes(&mut self, n: usize) {
        let skipped = &self.remaining()[..n];
        self.position += skipped.chars().count();
        self.offset += n;
    }
}
