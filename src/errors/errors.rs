use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    definition: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            definition: None,
        }
    }

    /// Attaches the index of the offending definition within its table.
    pub fn at_definition(mut self, index: usize) -> Self {
        self.definition = Some(index);
        self
    }

    pub fn get_definition(&self) -> Option<usize> {
        self.definition
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyTable => "EmptyTable",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::ImplicitCategory { .. } => "ImplicitCategory",
            ErrorImpl::InvalidOffset { .. } => "InvalidOffset",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyTable => ErrorTip::Suggestion(String::from(
                "Declare at least one token type, or use the built-in MDSL table",
            )),
            ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
            ErrorImpl::EmptyMatch { pattern } => ErrorTip::Suggestion(format!(
                "Pattern `{}` can match zero characters, require at least one character",
                pattern
            )),
            ErrorImpl::ImplicitCategory { category } => ErrorTip::Suggestion(format!(
                "Remove the `{}` definition, unmatched input is classified as `{}` automatically",
                category, category
            )),
            ErrorImpl::InvalidOffset { offset } => ErrorTip::Suggestion(format!(
                "Resume at an offset returned by a previous scan, `{}` is not a character boundary",
                offset
            )),
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("token type table is empty")]
    EmptyTable,
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("pattern {pattern:?} can match an empty span")]
    EmptyMatch { pattern: String },
    #[error("category {category:?} is implicit and cannot be declared")]
    ImplicitCategory { category: String },
    #[error("offset {offset} is not a character boundary of the input")]
    InvalidOffset { offset: usize },
}
