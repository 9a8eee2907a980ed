//! Lox API - front-end orchestration layer
//!
//! Provides a unified entry point over the lexer and parser, including:
//! - Run flow orchestration (text to tokens to expression)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (LoxError, ErrorReport)
//!
//! For drivers, this crate provides a global singleton API.
//! For library use, prefer the explicit `analyze(source, &config)` API.

use lox_log::{debug, info};

use lox_core::{Expression, Lexer, LexingResult, Parser};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub use lox_config::{LimitConfig, LogLevel, LoggingConfig, LoxConfig, Phase};

pub mod error;
pub mod types;
pub use error::{ErrorReport, LoxError};
pub use types::Analysis;

pub use lox_config;
pub use lox_core;
pub use lox_core::{Diagnostic, DiagnosticKind, Fold, Printer, Token, TokenType};

/// Tokenize with explicit configuration
pub fn tokenize(source: &str, config: &RunConfig) -> Result<LexingResult, LoxError> {
    Ok(Lexer::with_logger(config.logger.clone()).tokenize(source)?)
}

/// Tokenize and parse with explicit configuration
///
/// Diagnostics never fail the call; they are collected in the [`Analysis`].
/// This is the recommended API for library users.
pub fn analyze(source: &str, config: &RunConfig) -> Result<Analysis, LoxError> {
    info!(config.logger, "Starting analysis");

    let lexing = tokenize(source, config)?;
    let parsing = Parser::with_logger(config.logger.clone())
        .with_limits(config.limits)
        .parse(lexing.tokens());

    let analysis = Analysis { lexing, parsing };
    debug!(
        config.logger,
        "analysis completed: tokens={}, diagnostics={}",
        analysis.tokens().len(),
        analysis.diagnostics().count(),
    );

    info!(config.logger, "Analysis completed");
    Ok(analysis)
}

/// Parse an expression, failing on the first diagnostic
pub fn parse_expression(source: &str, config: &RunConfig) -> Result<Expression, LoxError> {
    let analysis = analyze(source, config)?;
    if let Some(first) = analysis.diagnostics().next() {
        return Err(first.clone().into());
    }
    let (expression, _) = analysis.parsing.into_parts();
    // a report without diagnostics always carries an expression
    expression.ok_or_else(|| LoxError::Diagnostic(end_of_input(&analysis.lexing)))
}

fn end_of_input(lexing: &LexingResult) -> Diagnostic {
    let position = lexing
        .tokens()
        .last()
        .map(|t| t.position())
        .unwrap_or_default();
    Diagnostic::new(DiagnosticKind::UnexpectedEndOfInput, position)
}

// ==================== Legacy API (using global config) ====================

/// Analyze with the global config
pub fn quick_analyze(source: &str) -> Result<Analysis, LoxError> {
    analyze(source, get_config())
}

/// Parse an expression with the global config
pub fn quick_parse(source: &str) -> Result<Expression, LoxError> {
    parse_expression(source, get_config())
}
