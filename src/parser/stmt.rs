use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::parse_expr,
    parser::{Assignment, Parser},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Assignment, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    parse_assignment_stmt(parser)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Assignment, Error> {
    let identifier = parser.advance();

    parser.expect_value("=", |token| ErrorImpl::ExpectedAssignment { token })?;

    let value = parse_expr(parser)?;

    if parser.current_token().value == ";" {
        parser.advance();
    }

    Ok(Assignment {
        span: Span {
            start: identifier.span.start,
            end: parser.get_previous_end(),
        },
        identifier: identifier.value,
        value,
    })
}
