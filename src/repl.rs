//! Line-reading REPL that prints the tokens of every line it is given.
//!
//! Each line gets a fresh lexer; tokens are written one per line until the
//! end-of-input token, then the prompt is printed again.

use std::io::{BufRead, Read, Write};

use tracing::{debug, info};

use crate::{
    errors::errors::ReplError,
    lexer::{lexer::Lexer, source::ReaderSource, tokens::Token},
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
        }
    }
}

/// Runs the REPL until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ReplConfig,
) -> Result<(), ReplError> {
    let mut line = String::new();
    let mut lines = 0usize;

    loop {
        write!(output, "{}", config.prompt).map_err(ReplError::Output)?;
        output.flush().map_err(ReplError::Output)?;

        line.clear();
        if input.read_line(&mut line).map_err(ReplError::Input)? == 0 {
            info!(target: "monkey::repl", lines, "input closed");
            return Ok(());
        }
        lines += 1;

        let tokens = write_tokens(Lexer::new(line.chars()), &mut output)?;
        debug!(target: "monkey::repl", line = lines, tokens, "lexed line");
    }
}

/// Lexes everything `reader` produces in one go and writes its tokens.
pub fn lex_reader<R: Read, W: Write>(reader: R, mut output: W) -> Result<usize, ReplError> {
    let mut lexer = Lexer::new(ReaderSource::new(reader));
    let tokens = write_tokens(&mut lexer, &mut output)?;

    if let Some(err) = lexer.source_mut().take_error() {
        return Err(err.into());
    }
    debug!(target: "monkey::repl", tokens, "lexed reader");
    Ok(tokens)
}

/// Writes every token before end-of-input, returning how many were written.
fn write_tokens<I, W>(tokens: I, output: &mut W) -> Result<usize, ReplError>
where
    I: Iterator<Item = Token>,
    W: Write,
{
    let mut count = 0;
    for token in tokens {
        writeln!(output, "{}", token).map_err(ReplError::Output)?;
        count += 1;
    }
    Ok(count)
}
