use std::{fmt::Display, str::FromStr};

use crate::Span;

/// Lexical category of a token.
///
/// `Text` is never declared in a table; it covers every span no definition
/// claims.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Comment,
    Keyword,
    Function,
    Number,
    Text,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Comment,
        TokenCategory::Keyword,
        TokenCategory::Function,
        TokenCategory::Number,
        TokenCategory::Text,
    ];

    /// Name used by renderers as a style class.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Function => "function",
            TokenCategory::Number => "number",
            TokenCategory::Text => "text",
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown token category `{}`", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn start(&self) -> usize {
        self.span.start.0
    }

    pub fn end(&self) -> usize {
        self.span.end.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.category, self.text)
    }
}
