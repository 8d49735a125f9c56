//! Run configuration shared by the lexer, the parser and the printer.

/// Which symbol classification and grammar a run uses.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Dialect {
    /// Every symbol is scanned as punctuation, so the additive and
    /// multiplicative loops never fire and only the first factor of an
    /// expression is evaluated.
    Reference,
    /// Arithmetic symbols are scanned as operators. Adds unary minus and
    /// parenthesised groups.
    #[default]
    Extended,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dialect: Dialect,
    /// Fractional digits used when printing an assignment.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: Dialect::default(),
            precision: 6,
        }
    }
}
