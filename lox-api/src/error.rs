//! API error types
//!
//! A unified error type plus a structured, serializable report that drivers
//! (a CLI, an editor integration) can format however they like.

use lox_core::{Diagnostic, TransitionError};
use serde::Serialize;
use thiserror::Error;

/// Lox error type
#[derive(Error, Debug)]
pub enum LoxError {
    /// First problem found in the input
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),

    /// The lexing state machine was driven out of contract
    #[error("Internal error: {0}")]
    Internal(#[from] TransitionError),

    /// Malformed configuration document
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Config already initialized")]
    AlreadyInitialized,
}

impl LoxError {
    /// 1-based line, when the error points into the source
    pub fn line(&self) -> Option<usize> {
        match self {
            LoxError::Diagnostic(d) => Some(d.position.line),
            _ => None,
        }
    }

    /// 1-based column, when the error points into the source
    pub fn column(&self) -> Option<usize> {
        match self {
            LoxError::Diagnostic(d) => Some(d.position.column),
            _ => None,
        }
    }

    /// Name of the phase that failed
    pub fn phase(&self) -> &'static str {
        match self {
            LoxError::Diagnostic(d) => d.phase().as_str(),
            LoxError::Internal(_) => "lexer",
            LoxError::Config(_) | LoxError::AlreadyInitialized => "config",
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        match self {
            LoxError::Diagnostic(d) => ErrorReport::from(d),
            LoxError::Internal(_) => ErrorReport {
                phase: self.phase(),
                line: None,
                column: None,
                error_kind: "internal".to_string(),
                message: self.to_string(),
            },
            LoxError::Config(e) => ErrorReport {
                phase: self.phase(),
                line: Some(e.line()).filter(|&l| l > 0),
                column: Some(e.column()).filter(|&c| c > 0),
                error_kind: "config".to_string(),
                message: e.to_string(),
            },
            LoxError::AlreadyInitialized => ErrorReport {
                phase: self.phase(),
                line: None,
                column: None,
                error_kind: "already_initialized".to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// lexer, parser or config
    pub phase: &'static str,
    pub line: Option<usize>,
    pub column: Option<usize>,
    /// Stable snake case identifier for programmatic handling
    pub error_kind: String,
    /// Human readable message without position
    pub message: String,
}

impl From<&Diagnostic> for ErrorReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            phase: diagnostic.phase().as_str(),
            line: Some(diagnostic.position.line),
            column: Some(diagnostic.position.column),
            error_kind: diagnostic.kind.name().to_string(),
            message: diagnostic.message(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "[{}] {} error: {}", self.phase, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// Compact JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One line form for terse output
    pub fn to_short(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}: {}", self.phase, line, self.message),
            None => format!("{}: {}", self.phase, self.message),
        }
    }
}
