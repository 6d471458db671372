//! `ternc lex`: tokenize a file and display the token stream.

use std::fmt::Write as _;

use tern_ir::{Token, TokenKind};

use super::read_file;

/// Options for `ternc lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Leave comment tokens out of the listing.
    pub hide_comments: bool,
    /// Print only the token count.
    pub count_only: bool,
}

impl LexOptions {
    /// Parse the arguments after `lex`: one file path plus flags, in any
    /// order. Returns the path and the options.
    pub fn parse(args: &[String]) -> Result<(String, LexOptions), String> {
        let mut options = LexOptions::default();
        let mut path = None;

        for arg in args {
            match arg.as_str() {
                "--hide-comments" => options.hide_comments = true,
                "--count" => options.count_only = true,
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option '{flag}'"));
                }
                file if path.is_none() => path = Some(file.to_string()),
                extra => return Err(format!("unexpected argument '{extra}'")),
            }
        }

        let path = path.ok_or_else(|| "missing file path".to_string())?;
        Ok((path, options))
    }
}

/// Lex a file and print its tokens. Exits with status 1 on a lex error.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");
    match tern_lexer::lex(&content) {
        Ok(tokens) => print!("{}", render_tokens(path, &tokens, options)),
        Err(err) => {
            eprintln!("{}", err.report());
            std::process::exit(1);
        }
    }
}

/// Render a token listing for `path`.
pub fn render_tokens(path: &str, tokens: &[Token], options: &LexOptions) -> String {
    let shown: Vec<&Token> = tokens
        .iter()
        .filter(|t| !(options.hide_comments && t.kind == TokenKind::Comment))
        .collect();

    let mut out = format!("Tokens for '{path}' ({} tokens)", shown.len());
    if options.count_only {
        out.push('\n');
        return out;
    }
    out.push_str(":\n");
    for token in shown {
        let _ = writeln!(out, "  {token}");
    }
    out
}
