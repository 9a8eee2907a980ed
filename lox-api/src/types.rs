//! Output of one front-end run

use lox_core::{Diagnostic, Expression, LexingResult, ParsingReport, Printer, Token};

use crate::error::ErrorReport;

/// Tokens, tree and every diagnostic found along the way
#[derive(Debug, Clone)]
pub struct Analysis {
    pub lexing: LexingResult,
    pub parsing: ParsingReport,
}

impl Analysis {
    pub fn tokens(&self) -> &[Token] {
        self.lexing.tokens()
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.parsing.expression()
    }

    /// Lexer diagnostics first, then parser diagnostics, each in discovery
    /// order
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lexing.errors().iter().chain(self.parsing.errors().iter())
    }

    pub fn reports(&self) -> Vec<ErrorReport> {
        self.diagnostics().map(ErrorReport::from).collect()
    }

    /// Prefix form of the tree, if one was built
    pub fn printed(&self) -> Option<String> {
        self.expression().map(Printer::print)
    }

    pub fn has_errors(&self) -> bool {
        self.lexing.has_errors() || self.parsing.has_errors()
    }
}
