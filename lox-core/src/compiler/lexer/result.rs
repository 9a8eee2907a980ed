use super::token::Token;
use crate::diagnostics::{Diagnostic, Errors};

/// Tokens and diagnostics accumulated by the lexing states, both in source
/// order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexingResult {
    tokens: Vec<Token>,
    errors: Errors,
}

impl LexingResult {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: Diagnostic) -> Self {
        self.errors = self.errors.with_error(error);
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Errors) {
        (self.tokens, self.errors)
    }
}
