//! Recursive-descent parser and evaluator.
//!
//! Recognises `identifier = expression` statements and evaluates the
//! expression while parsing. Precedence follows the call nesting
//! expression → term → factor, and the operators at each level come from a
//! lookup table keyed by operator text.
//!
//! Each statement yields `Ok(Assignment)` or `Err(Error)`. After an error the
//! parser resynchronizes at the next statement boundary.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
