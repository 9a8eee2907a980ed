//! Recoverable diagnostics
//!
//! Problems in the input (a stray character, a missing `)`) are data, not
//! control flow: they are appended to an [`Errors`] sequence and the lexer or
//! parser carries on.

use std::fmt;

use lox_config::Phase;

use crate::kit::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnexpectedCharacter(char),
    /// Reported at the opening quote
    UnterminatedString,
    ExpectedPrimary { found: String },
    /// `found` is `None` at end of input
    ExpectedRightParen { found: Option<String> },
    UnexpectedEndOfInput,
    NestingTooDeep { limit: usize },
}

impl DiagnosticKind {
    /// Phase that reports this kind
    pub fn phase(&self) -> Phase {
        match self {
            DiagnosticKind::UnexpectedCharacter(_) | DiagnosticKind::UnterminatedString => {
                Phase::Lexer
            }
            _ => Phase::Parser,
        }
    }

    /// Stable snake case identifier
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedCharacter(_) => "unexpected_character",
            DiagnosticKind::UnterminatedString => "unterminated_string",
            DiagnosticKind::ExpectedPrimary { .. } => "expected_primary",
            DiagnosticKind::ExpectedRightParen { .. } => "expected_right_paren",
            DiagnosticKind::UnexpectedEndOfInput => "unexpected_end_of_input",
            DiagnosticKind::NestingTooDeep { .. } => "nesting_too_deep",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnexpectedCharacter(c) => write!(f, "Unexpected character '{c}'"),
            DiagnosticKind::UnterminatedString => f.write_str("Unterminated string literal"),
            DiagnosticKind::ExpectedPrimary { found } => {
                write!(f, "Expected primary expression, found '{found}'")
            }
            DiagnosticKind::ExpectedRightParen { found: Some(found) } => {
                write!(f, "Expected ')' after expression, found '{found}'")
            }
            DiagnosticKind::ExpectedRightParen { found: None } => {
                f.write_str("Expected ')' after expression, found end of input")
            }
            DiagnosticKind::UnexpectedEndOfInput => f.write_str("Unexpected end of input"),
            DiagnosticKind::NestingTooDeep { limit } => {
                write!(f, "Expression nesting exceeds limit of {limit}")
            }
        }
    }
}

/// One problem found in the input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error: {kind} at {position}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }
}

/// Append-only diagnostics in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    items: Vec<Diagnostic>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_error(mut self, error: Diagnostic) -> Self {
        self.items.push(error);
        self
    }

    /// `other` goes after every diagnostic already held
    #[must_use]
    pub fn with_errors(mut self, other: Errors) -> Self {
        self.items.extend(other.items);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }
}

impl IntoIterator for Errors {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Diagnostic> for Errors {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(kind: DiagnosticKind, line: usize, column: usize) -> Diagnostic {
        Diagnostic::new(kind, Position::new(line, column))
    }

    #[test]
    fn test_display_format() {
        let error = diagnostic(DiagnosticKind::UnexpectedCharacter('@'), 1, 5);
        assert_eq!(error.to_string(), "Error: Unexpected character '@' at 1:5");

        let error = diagnostic(DiagnosticKind::UnterminatedString, 2, 1);
        assert_eq!(error.to_string(), "Error: Unterminated string literal at 2:1");
    }

    #[test]
    fn test_parser_messages() {
        let kind = DiagnosticKind::ExpectedPrimary {
            found: String::from(")"),
        };
        assert_eq!(kind.to_string(), "Expected primary expression, found ')'");

        let kind = DiagnosticKind::ExpectedRightParen {
            found: Some(String::from("3")),
        };
        assert_eq!(kind.to_string(), "Expected ')' after expression, found '3'");

        let kind = DiagnosticKind::ExpectedRightParen { found: None };
        assert_eq!(
            kind.to_string(),
            "Expected ')' after expression, found end of input"
        );

        assert_eq!(
            DiagnosticKind::NestingTooDeep { limit: 8 }.to_string(),
            "Expression nesting exceeds limit of 8"
        );
        assert_eq!(
            DiagnosticKind::UnexpectedEndOfInput.to_string(),
            "Unexpected end of input"
        );
    }

    #[test]
    fn test_phase() {
        assert_eq!(DiagnosticKind::UnterminatedString.phase(), Phase::Lexer);
        assert_eq!(DiagnosticKind::UnexpectedEndOfInput.phase(), Phase::Parser);
        assert_eq!(
            diagnostic(DiagnosticKind::UnexpectedCharacter('#'), 1, 1).phase(),
            Phase::Lexer
        );
    }

    #[test]
    fn test_errors_keep_order() {
        let first = diagnostic(DiagnosticKind::UnexpectedCharacter('@'), 1, 1);
        let second = diagnostic(DiagnosticKind::UnexpectedCharacter('#'), 1, 2);
        let third = diagnostic(DiagnosticKind::UnterminatedString, 1, 3);

        let left = Errors::new().with_error(first.clone());
        let right = Errors::new()
            .with_error(second.clone())
            .with_error(third.clone());
        let merged = left.with_errors(right);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.as_slice(), &[first, second, third]);
    }

    #[test]
    fn test_errors_collect() {
        let errors: Errors = (1..=3)
            .map(|column| diagnostic(DiagnosticKind::UnexpectedEndOfInput, 1, column))
            .collect();
        let columns: Vec<_> = errors.iter().map(|e| e.position.column).collect();
        assert_eq!(columns, vec![1, 2, 3]);
        assert!(Errors::new().is_empty());
    }
}
