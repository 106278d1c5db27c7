use std::ops::Range;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFINITION,
};

use super::{lexer::Tokens, tokens::TokenCategory};

/// Words classified as `keyword`.
pub const KEYWORDS: [&str; 7] = [
    "initial tree",
    "parameter",
    "species",
    "modifier",
    "delay",
    "binds",
    "and",
];

/// Transition operators, longest first. Classified as `keyword` together with
/// the single whitespace character on each side.
pub const OPERATORS: [&str; 3] = ["<=>", "<=", "=>"];

/// Location words classified as `function`.
pub const FUNCTIONS: [&str; 4] = ["on", "under", "contained", "around"];

/// `#` up to, but not including, any line terminator.
pub const COMMENT_PATTERN: &str = r"#[^\r\n\x{2028}\x{2029}]*";

/// Inner text of a numeric literal. Exponents need an explicit sign.
pub const NUMBER_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-][0-9]+)?";

lazy_static! {
    static ref MDSL_TABLE: TokenTypeTable =
        build_mdsl_table().expect("built-in MDSL token types are valid");
}

pub type Boundary = fn(char) -> bool;

/// Characters allowed around a numeric literal.
pub fn is_number_boundary(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// The whole regex match is the token.
    Plain(Regex),
    /// The regex match is the token, and the characters on either side of it
    /// must satisfy `boundary`. Start and end of input count as boundaries.
    /// Boundary characters are left for the neighbouring tokens.
    Bounded { regex: Regex, boundary: Boundary },
}

impl Matcher {
    pub fn regex(&self) -> &Regex {
        match self {
            Matcher::Plain(regex) => regex,
            Matcher::Bounded { regex, .. } => regex,
        }
    }

    /// Finds the leftmost match starting at or after `start`.
    ///
    /// `haystack` is always the whole input so that `\b` and boundary checks
    /// see characters before `start`.
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        match self {
            Matcher::Plain(regex) => regex.find_at(haystack, start).map(|m| m.range()),
            Matcher::Bounded { regex, boundary } => {
                let mut from = start;

                while from <= haystack.len() {
                    let found = regex.find_at(haystack, from)?;
                    let before = haystack[..found.start()].chars().next_back();
                    let after = haystack[found.end()..].chars().next();

                    if before.map_or(true, boundary) && after.map_or(true, boundary) {
                        return Some(found.range());
                    }

                    // A later candidate must follow a boundary character.
                    let (index, c) = haystack[found.start()..]
                        .char_indices()
                        .find(|&(_, c)| boundary(c))?;
                    from = found.start() + index + c.len_utf8();
                }

                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenTypeDefinition {
    category: TokenCategory,
    matcher: Matcher,
}

impl TokenTypeDefinition {
    pub fn new(category: TokenCategory, pattern: &str) -> Result<Self, Error> {
        Ok(TokenTypeDefinition {
            category,
            matcher: Matcher::Plain(compile(pattern)?),
        })
    }

    pub fn bounded(
        category: TokenCategory,
        pattern: &str,
        boundary: Boundary,
    ) -> Result<Self, Error> {
        Ok(TokenTypeDefinition {
            category,
            matcher: Matcher::Bounded {
                regex: compile(pattern)?,
                boundary,
            },
        })
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn requires_lookaround(&self) -> bool {
        matches!(self.matcher, Matcher::Bounded { .. })
    }
}

/// Compiles `pattern`, rejecting anything that could match zero characters.
fn compile(pattern: &str) -> Result<Regex, Error> {
    let invalid = |message: String| {
        Error::new(ErrorImpl::InvalidPattern {
            pattern: String::from(pattern),
            message,
        })
    };

    let hir = regex_syntax::parse(pattern).map_err(|err| invalid(err.to_string()))?;

    if hir.properties().minimum_len() == Some(0) {
        return Err(Error::new(ErrorImpl::EmptyMatch {
            pattern: String::from(pattern),
        }));
    }

    Regex::new(pattern).map_err(|err| invalid(err.to_string()))
}

/// Ordered token-type definitions. Earlier definitions win ties.
#[derive(Debug, Clone)]
pub struct TokenTypeTable {
    definitions: Vec<TokenTypeDefinition>,
}

impl TokenTypeTable {
    pub fn new(definitions: Vec<TokenTypeDefinition>) -> Result<Self, Error> {
        if definitions.is_empty() {
            return Err(Error::new(ErrorImpl::EmptyTable));
        }

        if let Some(index) = definitions
            .iter()
            .position(|definition| definition.category == TokenCategory::Text)
        {
            return Err(Error::new(ErrorImpl::ImplicitCategory {
                category: TokenCategory::Text.to_string(),
            })
            .at_definition(index));
        }

        for (index, definition) in definitions.iter().enumerate() {
            debug!(
                "token type {}: {} /{}/{}",
                index,
                definition.category,
                definition.matcher.regex().as_str(),
                if definition.requires_lookaround() { " (bounded)" } else { "" }
            );
        }

        Ok(TokenTypeTable { definitions })
    }

    /// The built-in MDSL table, compiled on first use.
    pub fn mdsl() -> &'static TokenTypeTable {
        &MDSL_TABLE
    }

    pub fn definitions(&self) -> &[TokenTypeDefinition] {
        &self.definitions
    }

    pub fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        Tokens::new(self, source, 0)
    }

    /// Resumes a scan at `offset`, usually one saved from [`Tokens::offset`].
    pub fn tokenize_from<'a>(&'a self, source: &'a str, offset: usize) -> Result<Tokens<'a>, Error> {
        if !source.is_char_boundary(offset) {
            return Err(Error::new(ErrorImpl::InvalidOffset { offset }));
        }

        Ok(Tokens::new(self, source, offset))
    }
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

pub fn build_mdsl_table() -> Result<TokenTypeTable, Error> {
    let keyword = format!(
        r"\b(?:{})\b|\s(?:{})\s",
        alternation(&KEYWORDS),
        alternation(&OPERATORS)
    );
    let function = format!(r"\b(?:{})\b", alternation(&FUNCTIONS));

    TokenTypeTable::new(vec![
        MK_DEFINITION!(TokenCategory::Comment, COMMENT_PATTERN)?,
        MK_DEFINITION!(TokenCategory::Keyword, &keyword)?,
        MK_DEFINITION!(TokenCategory::Function, &function)?,
        TokenTypeDefinition::bounded(TokenCategory::Number, NUMBER_PATTERN, is_number_boundary)?,
    ])
}
