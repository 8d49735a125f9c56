use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Parse error: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedAssignment { .. } => "ExpectedAssignment",
            ErrorImpl::VariableNotSupported { .. } => "VariableNotSupported",
            ErrorImpl::InvalidExpression { .. } => "InvalidExpression",
            ErrorImpl::ExpectedClosingParen { .. } => "ExpectedClosingParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, a statement starts with a variable name",
                token
            )),
            ErrorImpl::ExpectedAssignment { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Expected `=` but the line ended"))
            }
            ErrorImpl::ExpectedAssignment { token } => {
                ErrorTip::Suggestion(format!("Expected `=`, found `{}`", token))
            }
            ErrorImpl::VariableNotSupported { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` cannot be read, only numbers are allowed in expressions",
                variable
            )),
            ErrorImpl::InvalidExpression { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Expected a number but the line ended"))
            }
            ErrorImpl::InvalidExpression { token } => {
                ErrorTip::Suggestion(format!("Expected a number, found `{}`", token))
            }
            ErrorImpl::ExpectedClosingParen { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Expected `)` but the line ended"))
            }
            ErrorImpl::ExpectedClosingParen { token } => {
                ErrorTip::Suggestion(format!("Expected `)`, found `{}`", token))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Diagnostic kinds. The messages are the fixed text printed after `Parse error: `.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token")]
    UnexpectedToken { token: String },
    #[error("Expected '='")]
    ExpectedAssignment { token: String },
    #[error("Variable not supported")]
    VariableNotSupported { variable: String },
    #[error("Invalid expression")]
    InvalidExpression { token: String },
    #[error("Expected ')'")]
    ExpectedClosingParen { token: String },
}
