//! Lexer for Tern.
//!
//! Turns source text into a `Vec<Token>` for the parser, or fails with a
//! [`LexError`] carrying the tokens scanned before the failure.
//!
//! - [`catalog`]: the registry of token kinds and their lexeme rules
//! - [`scanner`]: the recognizer state machine
//!
//! ```
//! use tern_ir::TokenKind;
//!
//! let tokens = tern_lexer::lex("var foo = 10;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].lexeme, "10");
//! ```

pub mod catalog;
mod lex_error;
pub mod scanner;

pub use catalog::{CatalogEntry, TokenCatalog};
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use tern_ir::Token;

/// Lex `source` with the standard catalog.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with(source, TokenCatalog::standard())
}

/// Lex `source` against `catalog`.
///
/// Stops at the first error. The error's `tokens` holds everything scanned
/// before it.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with(source: &str, catalog: &TokenCatalog) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source, catalog);
    let mut tokens = Vec::new();

    loop {
        match scanner.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(mut err) => {
                err.tokens = tokens;
                return Err(err);
            }
        }
    }

    tracing::debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}
