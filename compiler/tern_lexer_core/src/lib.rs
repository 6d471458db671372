//! Low-level input handling for the Tern lexer.
//!
//! Exposes [`Cursor`], a forward-only view over source text. Every scanning
//! rule in `tern_lexer` is written against the cursor's primitives, so this
//! is the only place that indexes into the source string.

mod cursor;

pub use cursor::Cursor;
