//! Property tests for the lexer over arbitrary input.

use monkey_lexer::{lookup_ident, tokenize, Lexer, TokenKind};
use proptest::prelude::*;

const MONKEY_ISH: &str = "[a-zA-Z0-9_.=!+*/<>;(){},@#$ \t\r\n-]{0,80}";

fn is_skipped(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[test]
fn test_property_lexing_terminates() {
    proptest!(|(input in "\\PC{0,64}")| {
        let chars = input.chars().count();
        let mut lexer = Lexer::from_text(&input);

        let mut calls = 0;
        while !lexer.next_token().is_eof() {
            calls += 1;
            prop_assert!(calls <= chars, "more tokens than characters");
        }
    });
}

#[test]
fn test_property_eof_is_stable() {
    proptest!(|(input in MONKEY_ISH, extra in 1usize..8)| {
        let mut lexer = Lexer::from_text(&input);
        while !lexer.next_token().is_eof() {}

        for _ in 0..extra {
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::EOF);
            prop_assert_eq!(token.literal, "");
        }
    });
}

#[test]
fn test_property_literals_round_trip() {
    proptest!(|(input in MONKEY_ISH)| {
        for token in tokenize(&input).into_iter().filter(|t| !t.is_eof()) {
            let relexed = tokenize(&token.literal);
            prop_assert_eq!(relexed.len(), 2, "literal {:?}", token.literal);
            prop_assert_eq!(relexed[0].kind, token.kind);
            prop_assert_eq!(&relexed[0].literal, &token.literal);
            prop_assert_eq!(relexed[1].kind, TokenKind::EOF);
        }
    });
}

#[test]
fn test_property_literals_cover_all_non_whitespace() {
    proptest!(|(input in "\\PC{0,64}")| {
        let joined: String = tokenize(&input).iter().map(|t| t.literal.as_str()).collect();
        let expected: String = input.chars().filter(|ch| !is_skipped(*ch)).collect();
        prop_assert_eq!(joined, expected);
    });
}

#[test]
fn test_property_digit_runs_are_integers() {
    proptest!(|(input in "[0-9]{1,20}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].literal, &input);
    });
}

#[test]
fn test_property_identifier_runs_are_one_token() {
    proptest!(|(input in "[a-zA-Z_]{1,40}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 2);
        let kind = tokens[0].kind;
        prop_assert!(kind == TokenKind::Identifier || kind.is_keyword());
        prop_assert_eq!(kind.is_keyword(), lookup_ident(&input) != TokenKind::Identifier);
    });
}
