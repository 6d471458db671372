//! Tracing setup for the driver.
//!
//! Logging is off unless `TERN_LOG` (or, failing that, `RUST_LOG`) is set,
//! e.g. `TERN_LOG=tern_lexer=trace ternc lex main.tn`. Output is an
//! indented span tree on stderr.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = filter_directives(
            std::env::var("TERN_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        ) else {
            return;
        };

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .init();
    });
}

/// `TERN_LOG` wins over `RUST_LOG`; empty values count as unset.
fn filter_directives(tern_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    tern_log
        .filter(|v| !v.is_empty())
        .or_else(|| rust_log.filter(|v| !v.is_empty()))
}
