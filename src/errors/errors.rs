use std::io;

use thiserror::Error;

/// Failure of the byte reader behind a
/// [`ReaderSource`](crate::lexer::source::ReaderSource).
///
/// The lexer never sees this; the source stops yielding characters and
/// keeps the error for whoever owns it.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl SourceError {
    pub fn get_error_name(&self) -> &str {
        match self {
            SourceError::Io(_) => "Io",
        }
    }
}

/// Errors raised by the line-reading REPL and the file mode of the binary.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ReplError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ReplError::Input(_) => "Input",
            ReplError::Output(_) => "Output",
            ReplError::Open { .. } => "Open",
            ReplError::Source(_) => "Source",
        }
    }
}
