//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a byte range of the source
//! - `MK_DEFINITION!` - Creates a plain regex TokenTypeDefinition

/// Creates a Token instance covering `$start..$end` of `$source`.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$source` - The scanned source text
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Number, source, 4, 7);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $source:expr, $start:expr, $end:expr) => {
        Token {
            category: $category,
            text: String::from(&$source[$start..$end]),
            span: Span {
                start: Position($start),
                end: Position($end),
            },
        }
    };
}

/// Creates a TokenTypeDefinition whose whole regex match is the token text.
///
/// Evaluates to a `Result`, the pattern is validated like any other.
///
/// # Example
///
/// ```ignore
/// let comment = MK_DEFINITION!(TokenCategory::Comment, "#.*")?;
/// ```
#[macro_export]
macro_rules! MK_DEFINITION {
    ($category:expr, $pattern:expr) => {
        $crate::lexer::definitions::TokenTypeDefinition::new($category, $pattern)
    };
}
