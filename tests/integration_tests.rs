//! Integration tests for classifying whole MDSL documents.
//!
//! These run the built-in table over a complete model file and check the
//! round-trip and coverage properties over arbitrary input.

use mdsl::{
    get_line_at_position,
    lexer::{
        definitions::{build_mdsl_table, TokenTypeTable},
        lexer::{tokenize, tokenize_mdsl},
        tokens::{Token, TokenCategory},
    },
    Position,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const MODEL: &str = include_str!("fixtures/membrane.mdsl");

fn texts(tokens: &[Token], category: TokenCategory) -> Vec<&str> {
    tokens
        .iter()
        .filter(|token| token.category == category)
        .map(|token| token.text.as_str())
        .collect()
}

#[test]
fn test_model_round_trip() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();
    let rebuilt = tokens.iter().map(|token| token.text.as_str()).collect::<String>();

    assert_eq!(rebuilt, MODEL);
}

#[test]
fn test_model_comments() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    assert_eq!(
        texts(&tokens, TokenCategory::Comment),
        vec![
            "# Parasite uptake model",
            "# binding and release",
            "# trailing note"
        ]
    );
}

#[test]
fn test_model_numbers() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    assert_eq!(
        texts(&tokens, TokenCategory::Number),
        vec!["1.5e-3", "0.25", "100", "2E+4", "0", "30"]
    );
}

#[test]
fn test_model_functions() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    assert_eq!(
        texts(&tokens, TokenCategory::Function),
        vec![
            "contained", "on", "under", "around", "on", "under", "under", "contained"
        ]
    );
}

#[test]
fn test_model_keywords() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    assert_eq!(
        texts(&tokens, TokenCategory::Keyword),
        vec![
            "parameter",
            "parameter",
            "initial tree",
            "species",
            "species",
            "species",
            "binds",
            " <=> ",
            " => ",
            "delay",
            "modifier",
            "and",
        ]
    );
}

#[test]
fn test_model_token_positions() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();
    let operator = tokens
        .iter()
        .find(|token| token.text == " => ")
        .unwrap();

    let (line, _, column) = get_line_at_position(MODEL, operator.span.start).unwrap();
    assert_eq!(line, 15);
    assert_eq!(column, 24);
}

#[test]
fn test_rebuilt_table_matches_shared_table() {
    let table = build_mdsl_table().unwrap();

    let own = tokenize(MODEL, &table).collect::<Vec<_>>();
    let shared = tokenize(MODEL, TokenTypeTable::mdsl()).collect::<Vec<_>>();

    assert_eq!(own, shared);
}

#[test]
fn test_concurrent_scans_share_table() {
    let table = TokenTypeTable::mdsl();
    let expected = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    let handles = (0..4)
        .map(|_| std::thread::spawn(move || table.tokenize(MODEL).collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_classification_is_idempotent() {
    let tokens = tokenize_mdsl(MODEL).collect::<Vec<_>>();

    for token in tokens.iter().filter(|token| {
        matches!(
            token.category,
            TokenCategory::Comment | TokenCategory::Keyword | TokenCategory::Function
        )
    }) {
        let again = tokenize_mdsl(&token.text).collect::<Vec<_>>();
        assert_eq!(again.len(), 1, "re-tokenizing {:?}", token.text);
        assert_eq!(again[0].category, token.category);
    }
}

fn mdsl_like() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "species", "initial tree", "delay", "and", "on", "around", " => ", " <=> ", "<=", "#",
        "# note", "(", ")", " ", "\n", "\t", "1", "2.5", "3e+2", "x", "é", "=", "units",
    ]);

    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_round_trip_arbitrary(source in any::<String>()) {
        let rebuilt = tokenize_mdsl(&source).map(|token| token.text).collect::<String>();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_coverage_mdsl_like(source in mdsl_like()) {
        let tokens = tokenize_mdsl(&source).collect::<Vec<_>>();
        let mut expected_start = 0;

        for token in &tokens {
            prop_assert_eq!(token.start(), expected_start);
            prop_assert!(token.end() > token.start());
            prop_assert_eq!(&source[token.start()..token.end()], token.text.as_str());
            expected_start = token.end();
        }

        prop_assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_text_tokens_never_adjacent(source in mdsl_like()) {
        let tokens = tokenize_mdsl(&source).collect::<Vec<_>>();

        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].category == TokenCategory::Text && pair[1].category == TokenCategory::Text)
            );
        }
    }

    #[test]
    fn test_resume_at_any_yielded_offset(source in mdsl_like(), skip in 0usize..10) {
        let table = TokenTypeTable::mdsl();
        let mut tokens = table.tokenize(&source);
        tokens.by_ref().take(skip).for_each(drop);

        let resumed = table
            .tokenize_from(&source, tokens.offset())
            .unwrap()
            .collect::<Vec<_>>();
        prop_assert_eq!(resumed, tokens.collect::<Vec<_>>());
    }
}

#[test]
fn test_position_of_first_token() {
    let first = tokenize_mdsl(MODEL).next().unwrap();

    assert_eq!(first.span.start, Position(0));
    assert_eq!(first.category, TokenCategory::Comment);
}
