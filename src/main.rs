use std::{fs::File, io, process};

use clap::Parser;
use monkey_lexer::{
    errors::errors::ReplError,
    logging::init_logging,
    repl::{self, ReplConfig, PROMPT},
};
use tracing::error;

#[derive(Parser)]
#[command(name = "monkey-lexer", about = "Prints the tokens of Monkey source")]
struct Cli {
    /// Lex this file once instead of starting the REPL
    #[arg(long)]
    file: Option<String>,
    /// Prompt printed before each REPL line
    #[arg(long, default_value = PROMPT)]
    prompt: String,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{}", err);
    }

    if let Err(err) = run(cli) {
        error!(target: "monkey::cli", kind = err.get_error_name(), "{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ReplError> {
    if let Some(path) = cli.file {
        let file = File::open(&path).map_err(|source| ReplError::Open {
            path: path.clone(),
            source,
        })?;
        let stdout = io::stdout();
        repl::lex_reader(file, stdout.lock())?;
        return Ok(());
    }

    let config = ReplConfig { prompt: cli.prompt };
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(stdin.lock(), stdout.lock(), &config)
}
