//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "5".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InvalidExpression {
            token: "}".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_display_messages() {
    let cases = [
        (ErrorImpl::UnexpectedToken { token: "5".to_string() }, "Parse error: Unexpected token"),
        (ErrorImpl::ExpectedAssignment { token: "+".to_string() }, "Parse error: Expected '='"),
        (ErrorImpl::VariableNotSupported { variable: "w".to_string() }, "Parse error: Variable not supported"),
        (ErrorImpl::InvalidExpression { token: ";".to_string() }, "Parse error: Invalid expression"),
        (ErrorImpl::ExpectedClosingParen { token: String::new() }, "Parse error: Expected ')'"),
    ];

    for (kind, expected) in cases {
        assert_eq!(Error::new(kind, Position(0)).to_string(), expected);
    }
}

#[test]
fn test_variable_not_supported_error() {
    let error = Error::new(
        ErrorImpl::VariableNotSupported {
            variable: "foo".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "VariableNotSupported");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::VariableNotSupported { variable: "foo".to_string() }
    );
}

#[test]
fn test_expected_assignment_tip_at_end_of_line() {
    let error = Error::new(
        ErrorImpl::ExpectedAssignment { token: String::new() },
        Position(1),
    );

    assert_eq!(error.get_tip().to_string(), "Expected `=` but the line ended");
}

#[test]
fn test_closing_paren_tip() {
    let error = Error::new(
        ErrorImpl::ExpectedClosingParen { token: "}".to_string() },
        Position(0),
    );
    assert_eq!(error.get_tip().to_string(), "Expected `)`, found `}`");

    let error = Error::new(
        ErrorImpl::ExpectedClosingParen { token: String::new() },
        Position(0),
    );
    assert_eq!(error.get_tip().to_string(), "Expected `)` but the line ended");
}

#[test]
fn test_every_kind_has_a_suggestion() {
    let kinds = [
        ErrorImpl::UnexpectedToken { token: "5".to_string() },
        ErrorImpl::ExpectedAssignment { token: "+".to_string() },
        ErrorImpl::VariableNotSupported { variable: "w".to_string() },
        ErrorImpl::InvalidExpression { token: String::new() },
        ErrorImpl::ExpectedClosingParen { token: String::new() },
    ];

    for kind in kinds {
        let error = Error::new(kind, Position(0));
        assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::InvalidExpression {
            token: "}".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected a number, found `}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
