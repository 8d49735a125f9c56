#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    config::Config,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse, Assignment},
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

/// Tokenizes and evaluates one line, returning one outcome per statement attempt.
pub fn evaluate(source: &str, config: &Config) -> Vec<Result<Assignment, Error>> {
    let tokens = tokenize(source, config.dialect);
    parse(tokens, config.dialect)
}

/// Renders an outcome the way the command line prints it.
pub fn render_outcome(outcome: &Result<Assignment, Error>, config: &Config) -> String {
    match outcome {
        Ok(assignment) => format!("{:.*}", config.precision, assignment),
        Err(error) => error.to_string(),
    }
}

pub fn display_error(error: &Error, source: &str) -> String {
    /*
        error: message
          |
        1 | x = 5 + w
          | --------^
    */

    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }

    let line_str = "1";
    let padding = line_str.len() + 2;
    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(source);
    lines.push(format!("{} | {}", line_str, line_text_removed.trim_end()));

    let offset = error.get_position().0.min(source.len());
    let column = source
        .get(..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));
    lines.join("\n")
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    let removed = string[..string.len() - trimmed.len()].chars().count();
    (trimmed, removed)
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, config::Dialect, evaluate};

    #[test]
    fn test_display_error_points_at_token() {
        let source = "z = w";
        let outcomes = evaluate(source, &Config::default());
        let error = outcomes[0].as_ref().unwrap_err();

        let rendered = super::display_error(error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Error: VariableNotSupported"));
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], "1 | z = w");
        assert_eq!(lines[3], "  | ----^");
    }

    #[test]
    fn test_display_error_skips_leading_whitespace() {
        let source = "   5 = 3";
        let outcomes = evaluate(source, &Config::default());
        let error = outcomes[0].as_ref().unwrap_err();

        let rendered = super::display_error(error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "1 | 5 = 3");
        assert_eq!(lines[3], "  | ^");
    }

    #[test]
    fn test_display_error_at_end_of_input() {
        let source = "x =";
        let outcomes = evaluate(source, &Config::default());
        let error = outcomes[0].as_ref().unwrap_err();

        let rendered = super::display_error(error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "  | ---^");
    }

    #[test]
    fn test_render_outcome_uses_precision() {
        let config = Config { dialect: Dialect::Extended, precision: 2 };
        let outcomes = evaluate("x = 1 / 3", &config);

        assert_eq!(super::render_outcome(&outcomes[0], &config), "Assign x = 0.33");
    }
}
