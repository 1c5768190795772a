#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod repl;

pub use lexer::{
    lexer::{tokenize, Lexer},
    source::ReaderSource,
    tokens::{lookup_ident, Token, TokenKind},
};

/// 1-based line and column a token is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
