use super::expr::Expression;
use super::stream::TokenStream;
use crate::compiler::lexer::Token;
use crate::diagnostics::{Diagnostic, Errors};

/// Outcome of applying a rule: the tree built so far, if any, and every
/// diagnostic collected on the way
///
/// The expression is absent once any part it depends on failed; the errors
/// are kept regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingReport {
    expression: Option<Expression>,
    errors: Errors,
}

impl ParsingReport {
    pub fn new(expression: Option<Expression>, errors: Errors) -> Self {
        Self { expression, errors }
    }

    pub fn success(expression: Expression) -> Self {
        Self::new(Some(expression), Errors::new())
    }

    pub fn failure(error: Diagnostic) -> Self {
        Self::new(None, Errors::new().with_error(error))
    }

    /// `self` becomes the left operand; errors merge left to right
    #[must_use]
    pub fn with_binary(self, operator: Token, right: ParsingReport) -> Self {
        let expression = match (self.expression, right.expression) {
            (Some(left), Some(right)) => Some(Expression::binary(operator, left, right)),
            _ => None,
        };
        Self::new(expression, self.errors.with_errors(right.errors))
    }

    #[must_use]
    pub fn with_unary(self, operator: Token) -> Self {
        let expression = self
            .expression
            .map(|operand| Expression::unary(operator, operand));
        Self::new(expression, self.errors)
    }

    #[must_use]
    pub fn with_grouping(self) -> Self {
        Self::new(self.expression.map(Expression::grouping), self.errors)
    }

    /// Record a diagnostic without touching the expression
    #[must_use]
    pub fn with_error(self, error: Diagnostic) -> Self {
        Self::new(self.expression, self.errors.with_error(error))
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Option<Expression>, Errors) {
        (self.expression, self.errors)
    }
}

/// A report plus the stream left after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingStep<'t> {
    pub report: ParsingReport,
    pub remaining: TokenStream<'t>,
}

impl<'t> ParsingStep<'t> {
    pub fn new(report: ParsingReport, remaining: TokenStream<'t>) -> Self {
        Self { report, remaining }
    }
}
