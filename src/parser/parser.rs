//! Parser state and the statement loop.
//!
//! The parser walks the token stream with a single token of lookahead and
//! evaluates each statement as it recognises it. No tree is built: every
//! grammar rule returns the `f64` it computed.

use std::fmt::Display;

use crate::{
    config::Dialect,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_stmt;

/// A successfully evaluated `identifier = expression` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: String,
    pub value: f64,
    pub span: Span,
}

impl Display for Assignment {
    /// Prints `Assign <identifier> = <value>` in fixed-point notation.
    /// Six fractional digits unless the formatter asks for another precision.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "Assign {} = {:.*}", self.identifier, precision, self.value)
    }
}

pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next token to load into `current`
    pos: usize,
    /// The token under the cursor, or the Invalid sentinel once exhausted
    current: Token,
    /// End of the most recently consumed token
    previous_end: Position,
    /// Number of real tokens moved past so far
    consumed: usize,
    /// Non-fatal diagnostics raised by the statement being parsed
    diagnostics: Vec<Error>,
    dialect: Dialect,
}

impl Parser {
    /// Creates a parser positioned before the first token. Call `advance`
    /// once to load it.
    pub fn new(tokens: Vec<Token>, dialect: Dialect) -> Self {
        let current = end_of_input(&tokens);
        Parser {
            tokens,
            pos: 0,
            current,
            previous_end: Position(0),
            consumed: 0,
            diagnostics: vec![],
            dialect,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Past the last token the cursor stays on the Invalid sentinel.
    pub fn advance(&mut self) -> Token {
        let next = match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => end_of_input(&self.tokens),
        };

        let previous = std::mem::replace(&mut self.current, next);
        if previous.kind != TokenKind::Invalid {
            self.previous_end = previous.span.end;
            self.consumed += 1;
        }
        previous
    }

    /// Expects the current token's text to be `value` and consumes it.
    ///
    /// Matches on text alone, so the check is independent of how the symbol
    /// was classified.
    pub fn expect_value(
        &mut self,
        value: &str,
        error: fn(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current.value != value {
            return Err(Error::new(
                error(self.current.value.clone()),
                self.get_position(),
            ));
        }

        Ok(self.advance())
    }

    /// True while the cursor is on a real token.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::Invalid
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Position of the token under the cursor.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    pub fn get_previous_end(&self) -> Position {
        self.previous_end
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Records a diagnostic that does not abandon the current statement.
    pub fn report(&mut self, error: Error) {
        log::debug!("{} at {}", error, error.get_position().0);
        self.diagnostics.push(error);
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Moves the cursor to the next place a statement can start: an
    /// identifier, or the token after a `;`.
    ///
    /// `start` is the consumed count when the failed statement began. If the
    /// statement consumed nothing, the offending token is skipped so the loop
    /// makes progress. Otherwise an identifier under the cursor is kept as
    /// the start of the next statement.
    pub fn synchronize(&mut self, start: usize) {
        if !self.has_tokens() {
            return;
        }

        if self.consumed > start && self.current_token_kind() == TokenKind::Identifier {
            return;
        }

        let mut skipped = self.advance();
        while self.has_tokens()
            && skipped.value != ";"
            && self.current_token_kind() != TokenKind::Identifier
        {
            skipped = self.advance();
        }

        log::debug!("resynchronized at {}", self.current.span);
    }
}

fn end_of_input(tokens: &[Token]) -> Token {
    let end = tokens
        .last()
        .map(|token| token.span.end)
        .unwrap_or(Position(0));

    Token {
        kind: TokenKind::Invalid,
        value: String::new(),
        span: Span { start: end, end },
    }
}

/// Parses and evaluates every statement in `tokens`.
///
/// Returns the outcomes in source order: the non-fatal diagnostics of a
/// statement come before its assignment. A failed statement is followed by
/// a resynchronization, so every attempt consumes input and the loop
/// terminates.
pub fn parse(tokens: Vec<Token>, dialect: Dialect) -> Vec<Result<Assignment, Error>> {
    let mut parser = Parser::new(tokens, dialect);
    parser.advance();

    let mut outcomes: Vec<Result<Assignment, Error>> = vec![];

    while parser.has_tokens() {
        let start = parser.consumed();
        let outcome = parse_stmt(&mut parser);

        outcomes.extend(parser.take_diagnostics().into_iter().map(Err));

        match &outcome {
            Ok(assignment) => log::debug!("{} at {}", assignment, assignment.span),
            Err(error) => {
                log::debug!("{} at {}", error, error.get_position().0);
                parser.synchronize(start);
            }
        }

        outcomes.push(outcome);
    }

    outcomes
}
