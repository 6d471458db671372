//! Hand-written scanner producing one [`Token`] per call.
//!
//! Between tokens the scanner skips spaces, then tries its recognizers in a
//! fixed order: comment, number, word (reserved word or identifier),
//! operator. The first recognizer whose leading character matches commits
//! and runs to completion. Nothing is un-consumed once a recognizer commits.
//!
//! Only the literal space character is skipped. Tabs and newlines reach the
//! recognizers and fail there as unmatched characters.

use tern_ir::{Token, TokenKind};
use tern_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::catalog::TokenCatalog;
use crate::lex_error::{LexError, LexErrorKind};

/// Incremental scanner over one source string.
///
/// Also usable as an iterator of `Result<Token, LexError>`; the iterator
/// ends after end of input or after the first error.
pub struct Scanner<'src, 'cat> {
    cursor: Cursor<'src>,
    catalog: &'cat TokenCatalog,
    finished: bool,
}

impl<'src, 'cat> Scanner<'src, 'cat> {
    pub fn new(source: &'src str, catalog: &'cat TokenCatalog) -> Self {
        Self {
            cursor: Cursor::new(source),
            catalog,
            finished: false,
        }
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The unconsumed input.
    pub fn remaining(&self) -> &'src str {
        self.cursor.remaining()
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` once only spaces (or nothing) remain. A returned
    /// error has an empty `tokens` list; [`lex`](crate::lex) fills it in.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.cursor.consume_while(|c| c == ' ');
        let Some(first) = self.cursor.peek() else {
            return Ok(None);
        };

        let start = self.cursor;
        match self.recognize(first, start.offset()) {
            Ok(token) => {
                trace!(
                    kind = %token.kind,
                    lexeme = %token.lexeme,
                    position = start.position(),
                    "token"
                );
                Ok(Some(token))
            }
            Err(kind) => {
                debug!(error = %kind, position = start.position(), "lexing failed");
                Err(LexError::new(
                    kind,
                    start.position(),
                    start.remaining(),
                    Vec::new(),
                ))
            }
        }
    }

    /// Run the recognizers in priority order. The operator recognizer is
    /// last and reports the no-match error itself.
    fn recognize(&mut self, first: char, start: usize) -> Result<Token, LexErrorKind> {
        if let Some(token) = self.comment(first, start)? {
            return Ok(token);
        }
        if let Some(token) = self.number(first, start) {
            return Ok(token);
        }
        if let Some(token) = self.word(first) {
            return Ok(token);
        }
        self.operator(first, start)
    }

    // ─── Comments ───────────────────────────────────────────────

    fn comment(&mut self, first: char, start: usize) -> Result<Option<Token>, LexErrorKind> {
        if first != '/' || self.cursor.peek_second() != Some('*') {
            return Ok(None);
        }
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        if !self.cursor.eat_through("*/") {
            return Err(LexErrorKind::UnterminatedComment);
        }
        Ok(Some(self.make(TokenKind::Comment, start)))
    }

    // ─── Numbers ────────────────────────────────────────────────

    fn number(&mut self, first: char, start: usize) -> Option<Token> {
        if !first.is_ascii_digit() {
            return None;
        }
        self.cursor.consume_while(|c| c.is_ascii_digit());
        Some(self.make(TokenKind::Number, start))
    }

    // ─── Reserved words & identifiers ───────────────────────────

    /// `letter (letter | digit)*`, then an exact, case-sensitive catalog
    /// lookup. Anything not in the catalog is an identifier.
    fn word(&mut self, first: char) -> Option<Token> {
        if !first.is_ascii_alphabetic() {
            return None;
        }
        let word = self.cursor.consume_while(|c| c.is_ascii_alphanumeric());
        let kind = self
            .catalog
            .lookup_by_text(word)
            .unwrap_or(TokenKind::Identifier);
        Some(self.catalog.detail(kind).construct(word))
    }

    // ─── Operators ──────────────────────────────────────────────

    fn operator(&mut self, first: char, start: usize) -> Result<Token, LexErrorKind> {
        let kind = match first {
            ';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            }
            '=' => self.with_optional_equals(TokenKind::Equals, TokenKind::EqualsEquals),
            '>' => self.with_optional_equals(TokenKind::GreaterThan, TokenKind::GreaterThanEquals),
            '<' => self.with_optional_equals(TokenKind::LessThan, TokenKind::LessThanEquals),
            found => return Err(LexErrorKind::NoMatchingRule { found }),
        };
        Ok(self.make(kind, start))
    }

    /// Consume a one-character operator, extending it with a trailing `=`
    /// when present.
    fn with_optional_equals(&mut self, single: TokenKind, extended: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.try_consume('=') {
            extended
        } else {
            single
        }
    }

    /// Build a `kind` token from everything consumed since `start`.
    fn make(&self, kind: TokenKind, start: usize) -> Token {
        self.catalog
            .detail(kind)
            .construct(self.cursor.slice_from(start))
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests;
