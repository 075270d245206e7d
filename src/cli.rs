use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Print the tokens of a Monkey script")]
pub struct Cli {
    /// Tokenize a script instead of starting the prompt
    pub script: Option<PathBuf>,

    /// Show the byte range and line of every token
    #[arg(long)]
    pub spans: bool,
}
