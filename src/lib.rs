pub mod cli;
mod scan;
mod span;

pub use scan::{lookup_ident, Lexeme, Scanner, Token, TokenKind};
pub use span::Span;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Once;

use ariadne::{Color, Label, Report, ReportKind, Source};
use tracing::debug;

/// Scans `source` to completion, returning every token up to and including `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).map(|lexeme| lexeme.token).collect()
}

/// Writes the tokens of a whole script to `out`, reporting illegal characters
/// on stderr. Returns how many illegal tokens were found.
pub fn run<W: Write>(
    out: &mut W,
    path: &Path,
    source: &str,
    show_spans: bool,
) -> io::Result<usize> {
    let path = path.to_string_lossy();
    let path: &str = path.as_ref();

    let lexemes = Scanner::new(source).scan();
    write_lexemes(out, &lexemes, show_spans)?;

    let mut illegal = 0;
    for lexeme in lexemes.iter().filter(|l| l.token.kind == TokenKind::Illegal) {
        illegal += 1;
        Report::build(ReportKind::Error, (path, lexeme.span.range.clone()))
            .with_label(
                Label::new((path, lexeme.span.range.clone()))
                    .with_message("unexpected character")
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((path, Source::from(source)))?;
    }

    debug!(path, tokens = lexemes.len(), illegal, "script scanned");

    Ok(illegal)
}

/// Writes one line per token, skipping the trailing `Eof`.
pub fn write_lexemes<W: Write>(
    out: &mut W,
    lexemes: &[Lexeme],
    show_spans: bool,
) -> io::Result<()> {
    for lexeme in lexemes.iter().take_while(|l| !l.token.is_eof()) {
        if show_spans {
            writeln!(out, "{} {}", lexeme.token, lexeme.span)?;
        } else {
            writeln!(out, "{}", lexeme.token)?;
        }
    }

    Ok(())
}

/// Reports every illegal token of `lexemes` against an unnamed `source`.
pub fn report_illegal(source: &str, lexemes: &[Lexeme]) -> io::Result<()> {
    for lexeme in lexemes.iter().filter(|l| l.token.kind == TokenKind::Illegal) {
        Report::build(ReportKind::Error, lexeme.span.range.clone())
            .with_label(
                Label::new(lexeme.span.range.clone())
                    .with_message("unexpected character")
                    .with_color(Color::Red),
            )
            .finish()
            .eprint(Source::from(source))?;
    }

    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
