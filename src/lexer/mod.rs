//! Lexical analysis for the Monkey language.
//!
//! This module turns a character stream into tokens, one per call:
//!
//! - Keyword/identifier classification through a reserved word table
//! - Single and double character operators (`=`/`==`, `!`/`!=`)
//! - Integer and float literals, with a stray second `.` reported as illegal
//! - Line/column stamping of every token
//!
//! Any `Iterator<Item = char>` can be lexed; `source::ReaderSource` adapts
//! byte readers.

pub mod lexer;
pub mod source;
pub mod tokens;
