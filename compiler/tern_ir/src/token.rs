//! Token kinds and tokens for Tern.
//!
//! A [`Token`] is a [`TokenKind`] plus the exact source text it was scanned
//! from. Tokens carry no spans: lexemes are concatenated back together with
//! the skipped spaces to recover the source.

use std::fmt;

/// Whether a token kind's lexeme is a single known string or a
/// character-class match whose text varies per occurrence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeForm {
    /// Exact text, e.g. `var` or `==`.
    Fixed,
    /// Recognized by a character-class rule: identifiers, numbers, comments.
    Variable,
}

/// Lexical categories of Tern.
///
/// Discriminants are stable and follow catalog registration order; they
/// show up in the [`Token`] display format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    Var = 0,
    EqualsEquals = 1,
    Equals = 2,
    Identifier = 3,
    Number = 4,
    Semicolon = 5,
    GreaterThan = 6,
    GreaterThanEquals = 7,
    LessThan = 8,
    LessThanEquals = 9,
    /// Block comment `/* ... */`, delimiters included.
    Comment = 10,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Var,
        TokenKind::EqualsEquals,
        TokenKind::Equals,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Semicolon,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanEquals,
        TokenKind::LessThan,
        TokenKind::LessThanEquals,
        TokenKind::Comment,
    ];

    /// Number of [`TokenKind`] variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Index of this kind into tables sized by [`TokenKind::COUNT`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The variant name, as used in token listings.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Var => "Var",
            TokenKind::EqualsEquals => "EqualsEquals",
            TokenKind::Equals => "Equals",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::GreaterThanEquals => "GreaterThanEquals",
            TokenKind::LessThan => "LessThan",
            TokenKind::LessThanEquals => "LessThanEquals",
            TokenKind::Comment => "Comment",
        }
    }

    /// Human-facing name for diagnostics.
    ///
    /// Fixed-form kinds display as their text, the rest as a category.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Var => "var",
            TokenKind::EqualsEquals => "==",
            TokenKind::Equals => "=",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Semicolon => ";",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEquals => "<=",
            TokenKind::Comment => "comment",
        }
    }

    /// Whether this kind's lexeme is fixed text or a character-class match.
    pub const fn form(self) -> LexemeForm {
        match self {
            TokenKind::Identifier | TokenKind::Number | TokenKind::Comment => LexemeForm::Variable,
            TokenKind::Var
            | TokenKind::EqualsEquals
            | TokenKind::Equals
            | TokenKind::Semicolon
            | TokenKind::GreaterThan
            | TokenKind::GreaterThanEquals
            | TokenKind::LessThan
            | TokenKind::LessThanEquals => LexemeForm::Fixed,
        }
    }

    /// Build a token of this kind from its scanned text.
    #[inline]
    pub fn token(self, lexeme: impl Into<String>) -> Token {
        Token::new(self, lexeme)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its kind and the exact text consumed for it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Length of the lexeme in characters.
    pub fn char_len(&self) -> usize {
        self.lexeme.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Token \"{}\" ({}), lexeme \"{}\"]",
            self.kind.name(),
            self.kind as u8,
            self.lexeme
        )
    }
}
