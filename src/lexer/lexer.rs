use std::iter::FusedIterator;

use log::trace;

use crate::{Position, Span, MK_TOKEN};

use super::{
    definitions::{TokenTypeDefinition, TokenTypeTable},
    tokens::{Token, TokenCategory},
};

/// Next known match of one definition, cached until the cursor passes its start.
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unsearched,
    Found { start: usize, end: usize },
    Exhausted,
}

/// Lazy scan over a source. Tokens are contiguous and cover the whole input
/// from the starting offset.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    definitions: &'a [TokenTypeDefinition],
    source: &'a str,
    pos: usize,
    lookahead: Vec<Lookahead>,
    queued: Option<Token>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(table: &'a TokenTypeTable, source: &'a str, pos: usize) -> Tokens<'a> {
        Tokens {
            definitions: table.definitions(),
            source,
            pos,
            lookahead: vec![Lookahead::Unsearched; table.definitions().len()],
            queued: None,
        }
    }

    /// Offset of the first character not yet yielded. Passing it to
    /// [`TokenTypeTable::tokenize_from`] continues the scan.
    pub fn offset(&self) -> usize {
        match &self.queued {
            Some(token) => token.start(),
            None => self.pos,
        }
    }

    fn next_match(&mut self, index: usize) -> Option<(usize, usize)> {
        let stale = match self.lookahead[index] {
            Lookahead::Unsearched => true,
            Lookahead::Found { start, .. } => start < self.pos,
            Lookahead::Exhausted => false,
        };

        if stale {
            self.lookahead[index] = match self.definitions[index]
                .matcher()
                .find_at(self.source, self.pos)
            {
                Some(range) => Lookahead::Found {
                    start: range.start,
                    end: range.end,
                },
                None => Lookahead::Exhausted,
            };
        }

        match self.lookahead[index] {
            Lookahead::Found { start, end } => Some((start, end)),
            _ => None,
        }
    }

    fn make_token(&self, category: TokenCategory, start: usize, end: usize) -> Token {
        trace!("{} at {}..{}", category, start, end);
        MK_TOKEN!(category, self.source, start, end)
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        if self.pos >= self.source.len() {
            return None;
        }

        let mut best: Option<(usize, usize, TokenCategory)> = None;

        for index in 0..self.definitions.len() {
            if let Some((start, end)) = self.next_match(index) {
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, self.definitions[index].category()));
                }

                // Nothing declared later can start earlier than the cursor.
                if start == self.pos {
                    break;
                }
            }
        }

        let text_start = self.pos;

        match best {
            None => {
                let end = self.source.len();
                self.pos = end;
                Some(self.make_token(TokenCategory::Text, text_start, end))
            }
            Some((start, end, category)) => {
                self.pos = end;
                let token = self.make_token(category, start, end);

                if start > text_start {
                    self.queued = Some(token);
                    Some(self.make_token(TokenCategory::Text, text_start, start))
                } else {
                    Some(token)
                }
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Scans `source` with `table`. Every call starts a fresh scan.
pub fn tokenize<'a>(source: &'a str, table: &'a TokenTypeTable) -> Tokens<'a> {
    table.tokenize(source)
}

/// Scans `source` with the built-in MDSL table.
pub fn tokenize_mdsl(source: &str) -> Tokens<'_> {
    TokenTypeTable::mdsl().tokenize(source)
}
