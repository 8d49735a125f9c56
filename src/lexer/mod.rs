//! Lexical analysis.
//!
//! Converts one line of text into tokens using an ordered table of anchored
//! regex patterns:
//!
//! - Numbers are runs of digits and dots, kept verbatim
//! - Identifiers start with a letter and continue with letters, digits and `_`
//! - The ten single-character symbols become Operator or Punctuation tokens
//!   depending on the dialect
//! - Whitespace and unrecognised characters are skipped

pub mod lexer;
pub mod tokens;
