//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that skips its match
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that consumes its match without emitting a token.
///
/// The label is only used for the trace record.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\s+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!("whitespace"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($label:literal) => {
        |lexer: &mut Lexer, matched: &str| {
            log::trace!("skipping {} {:?} at {}", $label, matched, lexer.pos);
            lexer.advance_n(matched.len());
        }
    };
}
