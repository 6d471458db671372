use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect every token, panicking on error.
fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source, TokenCatalog::standard())
        .map(|result| match result {
            Ok(token) => token,
            Err(err) => panic!("unexpected lex error for {source:?}: {err}"),
        })
        .collect()
}

/// Helper: scan and return kinds only.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan(source).iter().map(|t| t.kind).collect()
}

/// Helper: scan until the first error and return it.
fn scan_err(source: &str) -> LexError {
    let mut scanner = Scanner::new(source, TokenCatalog::standard());
    loop {
        match scanner.next_token() {
            Ok(Some(_)) => {}
            Ok(None) => panic!("expected a lex error for {source:?}"),
            Err(err) => return err,
        }
    }
}

// ─── Whitespace ─────────────────────────────────────────────

#[test]
fn empty_source_has_no_tokens() {
    assert!(scan("").is_empty());
}

#[test]
fn spaces_only_have_no_tokens() {
    assert!(scan("     ").is_empty());
}

#[test]
fn trailing_spaces_end_cleanly() {
    assert_eq!(scan_kinds("foo   "), [TokenKind::Identifier]);
}

#[test]
fn tab_is_not_whitespace() {
    let err = scan_err("foo\tbar");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '\t' });
    assert_eq!(err.position, 3);
}

#[test]
fn newline_is_not_whitespace() {
    let err = scan_err("var x = 1;\nvar y = 2;");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '\n' });
    assert_eq!(err.remainder, "\nvar y = 2;");
}

// ─── Comments ───────────────────────────────────────────────

#[test]
fn comment_is_emitted_with_delimiters() {
    assert_eq!(
        scan("/* hi */"),
        vec![Token::new(TokenKind::Comment, "/* hi */")]
    );
}

#[test]
fn empty_comment() {
    assert_eq!(scan("/**/"), vec![Token::new(TokenKind::Comment, "/**/")]);
}

#[test]
fn comment_ends_at_first_closer() {
    assert_eq!(
        scan_kinds("/* a */ b /* c */"),
        [
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::Comment
        ]
    );
}

#[test]
fn comment_may_contain_anything() {
    let tokens = scan("/* var $ \t\n é */;");
    assert_eq!(tokens[0].lexeme, "/* var $ \t\n é */");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn comment_directly_before_token() {
    assert_eq!(
        scan_kinds("/*x*/var"),
        [TokenKind::Comment, TokenKind::Var]
    );
}

#[test]
fn unterminated_comment() {
    let err = scan_err("/* never closed");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.position, 0);
    assert_eq!(err.remainder, "/* never closed");
}

#[test]
fn opener_alone_is_unterminated() {
    assert_eq!(scan_err("/*").kind, LexErrorKind::UnterminatedComment);
}

#[test]
fn overlapping_star_does_not_close() {
    assert_eq!(scan_err("/*/").kind, LexErrorKind::UnterminatedComment);
}

#[test]
fn lone_slash_is_unmatched() {
    let err = scan_err("/ x");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '/' });
}

// ─── Numbers ────────────────────────────────────────────────

#[test]
fn number_is_maximal_digit_run() {
    assert_eq!(scan("12345"), vec![Token::new(TokenKind::Number, "12345")]);
}

#[test]
fn number_followed_by_letters_splits() {
    assert_eq!(
        scan("10abc"),
        vec![
            Token::new(TokenKind::Number, "10"),
            Token::new(TokenKind::Identifier, "abc"),
        ]
    );
}

#[test]
fn decimal_point_is_not_part_of_number() {
    let err = scan_err("3.14");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '.' });
    assert_eq!(err.position, 1);
}

#[test]
fn minus_is_not_a_sign() {
    assert_eq!(
        scan_err("-1").kind,
        LexErrorKind::NoMatchingRule { found: '-' }
    );
}

// ─── Words ──────────────────────────────────────────────────

#[test]
fn reserved_word() {
    assert_eq!(scan("var"), vec![Token::new(TokenKind::Var, "var")]);
}

#[test]
fn identifier_with_digits() {
    assert_eq!(scan("foo1"), vec![Token::new(TokenKind::Identifier, "foo1")]);
}

#[test]
fn reserved_word_prefix_is_identifier() {
    assert_eq!(
        scan("variable"),
        vec![Token::new(TokenKind::Identifier, "variable")]
    );
}

#[test]
fn reserved_word_match_is_case_sensitive() {
    assert_eq!(scan("Var"), vec![Token::new(TokenKind::Identifier, "Var")]);
    assert_eq!(scan("VAR"), vec![Token::new(TokenKind::Identifier, "VAR")]);
}

#[test]
fn uppercase_letters_start_words() {
    assert_eq!(scan_kinds("Foo BAR"), [TokenKind::Identifier; 2]);
}

#[test]
fn underscore_is_not_a_word_character() {
    let err = scan_err("foo_bar");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '_' });
    assert_eq!(err.remainder, "_bar");
}

#[test]
fn non_ascii_letter_is_unmatched() {
    assert_eq!(
        scan_err("é").kind,
        LexErrorKind::NoMatchingRule { found: 'é' }
    );
}

// ─── Operators ──────────────────────────────────────────────

#[test]
fn single_char_operators() {
    assert_eq!(
        scan_kinds("; = > <"),
        [
            TokenKind::Semicolon,
            TokenKind::Equals,
            TokenKind::GreaterThan,
            TokenKind::LessThan,
        ]
    );
}

#[test]
fn two_char_operators() {
    assert_eq!(
        scan("== >= <="),
        vec![
            Token::new(TokenKind::EqualsEquals, "=="),
            Token::new(TokenKind::GreaterThanEquals, ">="),
            Token::new(TokenKind::LessThanEquals, "<="),
        ]
    );
}

#[test]
fn operators_without_spaces() {
    assert_eq!(
        scan_kinds("a<=b"),
        [
            TokenKind::Identifier,
            TokenKind::LessThanEquals,
            TokenKind::Identifier
        ]
    );
}

#[test]
fn triple_equals_is_double_then_single() {
    assert_eq!(
        scan_kinds("==="),
        [TokenKind::EqualsEquals, TokenKind::Equals]
    );
}

#[test]
fn spaced_equals_are_two_tokens() {
    assert_eq!(scan_kinds("= ="), [TokenKind::Equals, TokenKind::Equals]);
}

#[test]
fn semicolon_does_not_extend() {
    assert_eq!(
        scan_kinds(";="),
        [TokenKind::Semicolon, TokenKind::Equals]
    );
}

#[test]
fn unknown_symbol() {
    let err = scan_err("foo $ bar");
    assert_eq!(err.kind, LexErrorKind::NoMatchingRule { found: '$' });
    assert_eq!(err.position, 4);
    assert_eq!(err.remainder, "$ bar");
}

// ─── Scanner state ──────────────────────────────────────────

#[test]
fn position_advances_per_token() {
    let mut scanner = Scanner::new("var  foo", TokenCatalog::standard());
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert_eq!(scanner.position(), 3);
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert_eq!(scanner.position(), 8);
    assert_eq!(scanner.remaining(), "");
}

#[test]
fn exhausted_scanner_keeps_returning_none() {
    let mut scanner = Scanner::new("x", TokenCatalog::standard());
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert!(matches!(scanner.next_token(), Ok(None)));
    assert!(matches!(scanner.next_token(), Ok(None)));
}

#[test]
fn failed_token_consumes_nothing_on_no_match() {
    let mut scanner = Scanner::new("a ?", TokenCatalog::standard());
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert!(scanner.next_token().is_err());
    assert_eq!(scanner.remaining(), "?");
}

#[test]
fn iterator_stops_after_error() {
    let items: Vec<_> = Scanner::new("a $ b", TokenCatalog::standard()).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn scanner_error_has_no_tokens() {
    assert!(scan_err("a $").tokens.is_empty());
}
