//! Lexical classification of MDSL source.
//!
//! This module contains the tokenizer that splits MDSL text into classified
//! spans for highlighting. It handles:
//!
//! - Ordered token-type tables of regex matchers
//! - Keywords, transition operators, location functions and comments
//! - Numeric literals bounded by whitespace or parentheses
//! - Unmatched input, which becomes `text` instead of an error

pub mod definitions;
pub mod lexer;
pub mod tokens;
