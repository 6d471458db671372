//! Token catalog: the registry of every token kind the scanner can produce.
//!
//! Each [`TokenKind`] gets one [`CatalogEntry`] recording its lexeme form and
//! canonical text. The scanner consults the catalog in two ways:
//!
//! 1. **Text lookup**: a scanned word is looked up against the fixed-form
//!    entries to tell reserved words (`var`) from identifiers.
//! 2. **Detail lookup**: once a recognizer knows the kind, it builds the
//!    token through that kind's entry.
//!
//! The standard catalog is built once per process and shared read-only by
//! every `lex` call.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tern_ir::{LexemeForm, Token, TokenKind};

/// One registered token kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CatalogEntry {
    pub kind: TokenKind,
    pub form: LexemeForm,
    /// Exact lexeme for fixed forms; a category description otherwise.
    pub canonical_text: &'static str,
}

impl CatalogEntry {
    /// Build a token of this entry's kind from scanned text.
    #[inline]
    pub fn construct(&self, lexeme: &str) -> Token {
        self.kind.token(lexeme)
    }
}

/// Registry mapping token kinds to their lexeme rules.
///
/// # Invariant
///
/// No two fixed-form entries share a canonical text, so
/// [`lookup_by_text`](Self::lookup_by_text) is unambiguous.
#[derive(Clone, Debug)]
pub struct TokenCatalog {
    entries: [Option<CatalogEntry>; TokenKind::COUNT],
    by_text: FxHashMap<&'static str, TokenKind>,
}

impl TokenCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        TokenCatalog {
            entries: [None; TokenKind::COUNT],
            by_text: FxHashMap::default(),
        }
    }

    /// The process-wide catalog for Tern, built on first use.
    pub fn standard() -> &'static TokenCatalog {
        static STANDARD: OnceLock<TokenCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut catalog = TokenCatalog::new();
            catalog
                .register(TokenKind::Var, LexemeForm::Fixed, "var")
                .register(TokenKind::EqualsEquals, LexemeForm::Fixed, "==")
                .register(TokenKind::Equals, LexemeForm::Fixed, "=")
                .register(TokenKind::Identifier, LexemeForm::Variable, "identifier")
                .register(TokenKind::Number, LexemeForm::Variable, "number")
                .register(TokenKind::Semicolon, LexemeForm::Fixed, ";")
                .register(TokenKind::GreaterThan, LexemeForm::Fixed, ">")
                .register(TokenKind::GreaterThanEquals, LexemeForm::Fixed, ">=")
                .register(TokenKind::LessThan, LexemeForm::Fixed, "<")
                .register(TokenKind::LessThanEquals, LexemeForm::Fixed, "<=")
                .register(TokenKind::Comment, LexemeForm::Variable, "comment");
            tracing::debug!(entries = catalog.len(), "standard token catalog built");
            catalog
        })
    }

    /// Register `kind`, replacing any previous entry for it.
    ///
    /// # Panics
    ///
    /// Panics if `form` is fixed and `canonical_text` already belongs to a
    /// different kind.
    pub fn register(
        &mut self,
        kind: TokenKind,
        form: LexemeForm,
        canonical_text: &'static str,
    ) -> &mut Self {
        if form == LexemeForm::Fixed {
            if let Some(&owner) = self.by_text.get(canonical_text) {
                assert!(
                    owner == kind,
                    "canonical text {canonical_text:?} is already registered to `{owner}`, \
                     cannot register it for `{kind}`"
                );
            }
        }

        if let Some(previous) = self.entries[kind.index()] {
            if previous.form == LexemeForm::Fixed {
                self.by_text.remove(previous.canonical_text);
            }
        }

        self.entries[kind.index()] = Some(CatalogEntry {
            kind,
            form,
            canonical_text,
        });
        if form == LexemeForm::Fixed {
            self.by_text.insert(canonical_text, kind);
        }
        self
    }

    /// Find the fixed-form kind whose canonical text is exactly `text`.
    ///
    /// Case-sensitive: `Var` does not match `var`.
    #[inline]
    pub fn lookup_by_text(&self, text: &str) -> Option<TokenKind> {
        self.by_text.get(text).copied()
    }

    /// The entry for `kind`, if registered.
    #[inline]
    pub fn try_detail(&self, kind: TokenKind) -> Option<&CatalogEntry> {
        self.entries[kind.index()].as_ref()
    }

    /// The entry for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` was never registered. A catalog used for scanning
    /// must be complete before the first `lex` call.
    pub fn detail(&self, kind: TokenKind) -> &CatalogEntry {
        self.try_detail(kind)
            .unwrap_or_else(|| panic!("token kind `{kind}` is not registered in the catalog"))
    }

    /// Registered entries in kind order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self::new()
    }
}
