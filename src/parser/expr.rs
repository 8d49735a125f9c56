use crate::{
    config::Dialect,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binary_operator, BindingPower},
    parser::Parser,
};

type OperandHandler = fn(&mut Parser) -> Result<f64, Error>;

/// `expression := term (('+' | '-') term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<f64, Error> {
    parse_binary_expr(parser, BindingPower::Additive, parse_term)
}

/// `term := factor (('*' | '/') factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<f64, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_factor)
}

fn parse_binary_expr(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandHandler,
) -> Result<f64, Error> {
    let mut left = operand(parser)?;

    while let Some(apply) = binary_operator(parser.current_token(), bp) {
        parser.advance();
        let right = operand(parser)?;
        left = apply(left, right);
    }

    Ok(left)
}

pub fn parse_factor(parser: &mut Parser) -> Result<f64, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => {
            parser.advance();
            Ok(parse_number(&token))
        }
        TokenKind::Identifier => Err(Error::new(
            ErrorImpl::VariableNotSupported {
                variable: token.value,
            },
            token.span.start,
        )),
        TokenKind::Operator if token.value == "-" => parse_prefix_expr(parser),
        TokenKind::Punctuation if token.value == "(" && parser.dialect() == Dialect::Extended => {
            parse_grouping_expr(parser)
        }
        // Reported, then evaluated as zero so the statement still assigns.
        _ => {
            parser.report(Error::new(
                ErrorImpl::InvalidExpression { token: token.value },
                token.span.start,
            ));
            Ok(0.0)
        }
    }
}

// A literal like `1.2.3` lexes as one number; it evaluates to zero.
fn parse_number(token: &Token) -> f64 {
    token.value.parse().unwrap_or_else(|_| {
        log::debug!("malformed number {:?} at {}, using 0", token.value, token.span);
        0.0
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<f64, Error> {
    parser.advance();
    let rhs = parse_factor(parser)?;

    Ok(-rhs)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<f64, Error> {
    parser.advance();
    let value = parse_expr(parser)?;
    parser.expect_value(")", |token| ErrorImpl::ExpectedClosingParen { token })?;

    Ok(value)
}
