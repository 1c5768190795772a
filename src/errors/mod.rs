//! Error types for everything around the lexer.
//!
//! The lexer itself reports bad input in-band as illegal tokens. What can
//! actually fail is the I/O underneath it:
//!
//! - Reading bytes for a `ReaderSource`
//! - Reading lines and writing tokens in the REPL

pub mod errors;
