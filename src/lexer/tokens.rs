use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// How a single-character symbol is classified.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolClass {
    /// `+ - * /`
    Arithmetic,
    /// `( ) { } = ;`
    Structural,
}

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, SymbolClass> = {
        let mut map = HashMap::new();
        map.insert("+", SymbolClass::Arithmetic);
        map.insert("-", SymbolClass::Arithmetic);
        map.insert("*", SymbolClass::Arithmetic);
        map.insert("/", SymbolClass::Arithmetic);
        map.insert("(", SymbolClass::Structural);
        map.insert(")", SymbolClass::Structural);
        map.insert("{", SymbolClass::Structural);
        map.insert("}", SymbolClass::Structural);
        map.insert("=", SymbolClass::Structural);
        map.insert(";", SymbolClass::Structural);
        map
    };

    // No words are reserved yet; identifiers found here would become Keyword tokens.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = HashMap::new();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Operator,
    Punctuation,
    Keyword,
    /// Never produced by the lexer. Marks the end of the token stream.
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.value, self.span)
    }
}
