use tracing::trace;

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based lexer over any character source.
///
/// The cursor holds the character under examination (`None` once the
/// source is exhausted) and a single lookahead slot. Tokens are produced
/// one per [`Lexer::next_token`] call.
pub struct Lexer<I: Iterator<Item = char>> {
    input: I,
    /// The source returned `None` and is not polled again
    exhausted: bool,
    /// Character filled by `peek_char` and not consumed yet
    peeked: Option<Option<char>>,
    ch: Option<char>,
    line: u32,
    column: u32,
    /// Set once the end-of-input token has been handed out by the iterator
    finished: bool,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Creates a lexer and loads the first character of `input`.
    pub fn new(input: I) -> Self {
        let mut lexer = Lexer {
            input,
            exhausted: false,
            peeked: None,
            ch: None,
            line: 1,
            column: 0,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Where the cursor is now; tokens are stamped with this.
    pub fn cursor_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The character source, e.g. to take a pending read error.
    pub fn source_mut(&mut self) -> &mut I {
        &mut self.input
    }

    fn pull(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }
        let next = self.input.next();
        self.exhausted = next.is_none();
        next
    }

    fn read_char(&mut self) {
        let next = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.pull(),
        };

        let Some(next) = next else {
            self.ch = None;
            return;
        };

        if self.ch == Some('\n') {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        self.ch = Some(next);
    }

    fn peek_char(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = Some(self.pull());
        }
        self.peeked.flatten()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Produces the next token. Once the source is exhausted every call
    /// returns an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), self.cursor_position()),
            Some('=') => self.either('=', TokenKind::Equals, TokenKind::Assignment),
            Some('!') => self.either('=', TokenKind::NotEquals, TokenKind::Bang),
            Some('+') => self.single(TokenKind::Plus),
            Some('-') => self.single(TokenKind::Minus),
            Some('/') => self.single(TokenKind::Slash),
            Some('*') => self.single(TokenKind::Asterisk),
            Some('<') => self.single(TokenKind::LessThan),
            Some('>') => self.single(TokenKind::GreaterThan),
            Some(';') => self.single(TokenKind::Semicolon),
            Some(',') => self.single(TokenKind::Comma),
            Some('(') => self.single(TokenKind::OpenParen),
            Some(')') => self.single(TokenKind::CloseParen),
            Some('{') => self.single(TokenKind::OpenCurly),
            Some('}') => self.single(TokenKind::CloseCurly),
            Some(ch) if is_letter(ch) => self.read_identifier(),
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(_) => self.single(TokenKind::Illegal),
        };

        trace!(
            target: "monkey::lexer",
            kind = %token.kind,
            literal = %token.literal,
            line = token.position.line,
            column = token.position.column,
            "produced token"
        );
        token
    }

    /// Emits the current character as a token of `kind` and consumes it.
    fn single(&mut self, kind: TokenKind) -> Token {
        let literal = self.ch.map(String::from).unwrap_or_default();
        let token = MK_TOKEN!(kind, literal, self.cursor_position());
        self.read_char();
        token
    }

    /// Two-character operator when the next character is `second`,
    /// otherwise the single-character `fallback`.
    fn either(&mut self, second: char, double: TokenKind, fallback: TokenKind) -> Token {
        if self.peek_char() != Some(second) {
            return self.single(fallback);
        }

        let mut literal = String::with_capacity(2);
        literal.extend(self.ch);
        self.read_char();
        literal.extend(self.ch);

        let token = MK_TOKEN!(double, literal, self.cursor_position());
        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> Token {
        let mut literal = String::new();
        while let Some(ch) = self.ch.filter(|ch| is_letter(*ch)) {
            literal.push(ch);
            self.read_char();
        }

        MK_TOKEN!(lookup_ident(&literal), literal, self.cursor_position())
    }

    /// Digits with at most one decimal point. A second point ends the
    /// number and is left for the next call, which reports it as illegal.
    fn read_number(&mut self) -> Token {
        let mut literal = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.ch {
            if ch == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            literal.push(ch);
            self.read_char();
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        MK_TOKEN!(kind, literal, self.cursor_position())
    }
}

impl<'a> Lexer<std::str::Chars<'a>> {
    pub fn from_text(source: &'a str) -> Self {
        Lexer::new(source.chars())
    }
}

/// Yields every token before end-of-input, then stops.
impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

impl<I: Iterator<Item = char>> std::iter::FusedIterator for Lexer<I> {}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Lexes all of `source`. The returned tokens always end with the
/// end-of-input token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::from_text(source);
    let mut tokens = Vec::new();

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
