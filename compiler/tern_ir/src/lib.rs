//! Token types for the Tern language.
//!
//! This crate holds the data the lexer produces and the parser consumes.
//! It contains no scanning logic.

mod token;

pub use token::{LexemeForm, Token, TokenKind};
