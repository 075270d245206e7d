mod repl;

use std::fs;
use std::io;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use monkey_lex::cli::Cli;
use monkey_lex::{init_tracing, run};
use repl::{Repl, Stop};
use rustyline::DefaultEditor;
use tracing::debug;

/// Exit status for input containing illegal characters (`EX_DATAERR`).
const EXIT_DATA_ERR: i32 = 65;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(script) = &cli.script {
        debug!(script = %script.display(), "tokenizing script");
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;
        let illegal = run(&mut io::stdout().lock(), script, &code, cli.spans)?;
        if illegal > 0 {
            exit(EXIT_DATA_ERR);
        }
    } else {
        debug!("starting prompt");
        repl(Repl::new(cli.spans))?;
    }

    Ok(())
}

fn repl(state: Repl) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(repl::PROMPT) {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line)?;
            }
            Err(e) => match Stop::from(&e) {
                Stop::Closed => {
                    debug!(%e, "input closed");
                    return Ok(());
                }
                Stop::Interrupted => {
                    eprintln!("user exit");
                    exit(1);
                }
            },
        }
    }
}
