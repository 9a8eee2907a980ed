//! Lox Core - lexer and expression parser (pure logic, no IO)
//!
//! Text flows through an immutable [`Source`] cursor into the lexing state
//! machine, which yields tokens plus diagnostics. The token list is then read
//! through a [`TokenStream`] by the precedence-climbing [`Grammar`], which
//! yields an [`Expression`] plus diagnostics.
//!
//! Configuration and loggers are passed explicitly, not via global state.
//!
//! ```
//! let tokens = lox_core::tokenize("1 + 2 * 3").unwrap();
//! let report = lox_core::parse(tokens.tokens());
//! assert_eq!(report.expression().unwrap().to_string(), "(+ 1 (* 2 3))");
//! ```

pub mod compiler;
pub mod diagnostics;
pub mod kit;

pub use compiler::lexer::{Lexer, LexingResult, LexingState, Token, TokenType, TransitionError};
pub use compiler::parser::{
    Consumed, Expression, Fold, Grammar, Parser, ParsingReport, ParsingStep, Printer, Rule,
    TokenStream,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Errors};
pub use kit::{CharClass, Fragment, Pattern, Position, Source};

pub use lox_config::{LimitConfig, Phase};

/// Tokenize with a silent lexer
///
/// # Errors
///
/// Only on a broken state machine; see [`TransitionError`].
pub fn tokenize(text: &str) -> Result<LexingResult, TransitionError> {
    Lexer::new().tokenize(text)
}

/// Parse with a silent parser and default limits
pub fn parse(tokens: &[Token]) -> ParsingReport {
    Parser::new().parse(tokens)
}
