//! Tern CLI

use ternc::commands::{lex_file, LexOptions};
use ternc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match LexOptions::parse(&args[2..]) {
            Ok((path, options)) => lex_file(&path, &options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: ternc lex <file.tn> [--hide-comments] [--count]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Tern {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path is shorthand for `lex <path>`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tn"))
            {
                lex_file(command, &LexOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Tern lexer driver");
    println!();
    println!("Usage: ternc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.tn>        Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --hide-comments     Leave comment tokens out of the listing");
    println!("  --count             Print only the token count");
    println!();
    println!("Logging:");
    println!("  TERN_LOG=<filter>   Enable tracing (e.g. TERN_LOG=tern_lexer=trace)");
}
