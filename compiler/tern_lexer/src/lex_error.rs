//! Lexer error types.
//!
//! Lexing is all-or-nothing: the first error ends the call. The error keeps
//! everything the caller needs to inspect the partial result:
//! - WHERE: `position`, in characters, of the token that failed
//! - WHAT: `kind`
//! - the unconsumed `remainder`, starting at the failed token
//! - the `tokens` scanned successfully before it

use std::fmt::Write as _;

use tern_ir::Token;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `/*` with no `*/` before end of input.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// No recognizer applies to the next character.
    #[error("unexpected character {found:?}")]
    NoMatchingRule { found: char },
}

/// A fatal lexing error with the partial result.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at character {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Characters consumed before the failing token began.
    pub position: usize,
    /// Source text from the start of the failing token to end of input.
    pub remainder: String,
    /// Tokens produced before the failure, in source order.
    pub tokens: Vec<Token>,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: usize, remainder: &str, tokens: Vec<Token>) -> Self {
        LexError {
            kind,
            position,
            remainder: remainder.to_owned(),
            tokens,
        }
    }

    /// Multi-line report: the error, the unlexed input, and the tokens that
    /// were scanned successfully, one per line.
    pub fn report(&self) -> String {
        let mut out = format!("failed to lex: {self}\n  remaining input: {:?}\n", self.remainder);
        if self.tokens.is_empty() {
            out.push_str("  no tokens were scanned");
        } else {
            let _ = write!(out, "  successful tokens ({}):", self.tokens.len());
            for token in &self.tokens {
                let _ = write!(out, "\n    {token}");
            }
        }
        out
    }
}
