//! Error types for building token-type tables.
//!
//! Scanning itself never fails: unrecognised input degrades to `text`
//! tokens. The only errors are configuration errors raised while a
//! [`TokenTypeTable`](crate::lexer::definitions::TokenTypeTable) is built or
//! a scan is set up:
//!
//! - Invalid or empty-matching patterns
//! - Empty tables and explicitly declared `text` definitions
//! - Resume offsets that do not fall on a character boundary

pub mod errors;
