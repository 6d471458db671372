//! Command implementations for the `ternc` binary.

mod lex;

pub use lex::{lex_file, render_tokens, LexOptions};

/// Read a source file, exiting with a specific message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}

fn read_error_message(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}
