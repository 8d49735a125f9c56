use lazy_static::lazy_static;
use regex::Regex;

use crate::{config::Dialect, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{SymbolClass, Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins. The last
    // pattern matches any single code point, so the scan always makes progress.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: MK_DEFAULT_HANDLER!("whitespace") },
        RegexPattern { regex: Regex::new(r"^\d[\d.]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\p{L}[\p{L}\d_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[-+*/(){}=;]").unwrap(), handler: punctuation_handler },
        RegexPattern { regex: Regex::new(r"^(?s).").unwrap(), handler: MK_DEFAULT_HANDLER!("unrecognised character") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    dialect: Dialect,
}

impl Lexer {
    pub fn new(source: &str, dialect: Dialect) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            dialect,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of `len` bytes starting at the cursor.
    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos),
            end: Position(self.pos + len),
        }
    }

    /// Pushes a token for `matched` and moves the cursor past it.
    fn emit(&mut self, kind: TokenKind, matched: &str) {
        let span = self.span(matched.len());
        self.push(MK_TOKEN!(kind, String::from(matched), span));
        self.advance_n(matched.len());
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.emit(TokenKind::Number, matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);
    lexer.emit(kind, matched);
}

fn punctuation_handler(lexer: &mut Lexer, matched: &str) {
    let kind = match (lexer.dialect, SYMBOL_LOOKUP.get(matched)) {
        (Dialect::Extended, Some(SymbolClass::Arithmetic)) => TokenKind::Operator,
        _ => TokenKind::Punctuation,
    };
    lexer.emit(kind, matched);
}

/// Scans one line of text into tokens.
///
/// Whitespace and unrecognised characters produce no token, so this never fails.
pub fn tokenize(source: &str, dialect: Dialect) -> Vec<Token> {
    let mut lex = Lexer::new(source, dialect);

    while !lex.at_eof() {
        for pattern in PATTERNS.iter() {
            let found = pattern.regex.find(lex.remainder()).map(|m| m.as_str().to_string());

            if let Some(matched) = found {
                (pattern.handler)(&mut lex, &matched);
                break;
            }
        }
    }

    lex.tokens
}
