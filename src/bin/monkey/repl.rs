use std::io::{self, Write};

use monkey_lex::{report_illegal, write_lexemes, Lexeme, Scanner};
use rustyline::error::ReadlineError;

pub const PROMPT: &str = ">> ";

/// How the prompt stops when no line could be read.
#[derive(Debug, PartialEq, Eq)]
pub enum Stop {
    /// Input is closed or unreadable; leave the loop without error.
    Closed,
    /// Ctrl-C.
    Interrupted,
}

impl From<&ReadlineError> for Stop {
    fn from(e: &ReadlineError) -> Self {
        match e {
            ReadlineError::Interrupted => Stop::Interrupted,
            _ => Stop::Closed,
        }
    }
}

#[derive(Debug, Default)]
pub struct Repl {
    show_spans: bool,
}

impl Repl {
    pub fn new(show_spans: bool) -> Self {
        Self { show_spans }
    }

    /// Scans one line with a fresh scanner and echoes its tokens.
    pub fn rep(&self, input: &str) -> io::Result<()> {
        let lexemes = Scanner::new(input).scan();

        let mut out = io::stdout().lock();
        self.echo(&mut out, &lexemes)?;
        out.flush()?;

        report_illegal(input, &lexemes)
    }

    fn echo<W: Write>(&self, out: &mut W, lexemes: &[Lexeme]) -> io::Result<()> {
        write_lexemes(out, lexemes, self.show_spans)
    }
}
