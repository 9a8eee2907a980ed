//! Precedence-climbing grammar
//!
//! ```text
//! expression → equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! The binary levels are rows of one table. One climbing loop handles every
//! row, recursing only for right operands, and prefix operators are gathered
//! iteratively, so each nesting level costs a constant amount of stack.

use lox_config::{LimitConfig, Phase};

use super::expr::Expression;
use super::report::{ParsingReport, ParsingStep};
use super::stream::TokenStream;
use crate::compiler::lexer::{Token, TokenType};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::kit::Position;

const TARGET: &str = Phase::Parser.target();

/// Binary operators per level, lowest precedence first
pub const BINARY_LEVELS: [&[TokenType]; 4] = [
    &[TokenType::BangEqual, TokenType::EqualEqual],
    &[
        TokenType::Greater,
        TokenType::GreaterEqual,
        TokenType::Less,
        TokenType::LessEqual,
    ],
    &[TokenType::Minus, TokenType::Plus],
    &[TokenType::Slash, TokenType::Star],
];

pub const UNARY_OPERATORS: &[TokenType] = &[TokenType::Bang, TokenType::Minus];

pub const LITERALS: &[TokenType] = &[
    TokenType::False,
    TokenType::True,
    TokenType::Nil,
    TokenType::Number,
    TokenType::String,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Row `level` of [`BINARY_LEVELS`]
    Binary { level: usize },
    Unary,
    Primary,
}

impl Rule {
    /// Entry rule, the lowest precedence level
    pub const EXPRESSION: Rule = Rule::Binary { level: 0 };

    /// Rule parsing this rule's operands
    pub fn operand(self) -> Rule {
        match self {
            Rule::Binary { level } if level + 1 < BINARY_LEVELS.len() => {
                Rule::Binary { level: level + 1 }
            }
            Rule::Binary { .. } => Rule::Unary,
            Rule::Unary | Rule::Primary => Rule::Primary,
        }
    }
}

/// Applies [`Rule`]s to a token stream
///
/// Parenthesized groups and unary operators each count as one level of
/// nesting. Past `limits.max_nesting_depth` a single
/// [`DiagnosticKind::NestingTooDeep`] is recorded and the rest of the input is
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grammar {
    limits: LimitConfig,
}

impl Grammar {
    pub fn new(limits: LimitConfig) -> Self {
        Self { limits }
    }

    pub fn parse<'t>(&self, rule: Rule, stream: TokenStream<'t>) -> ParsingStep<'t> {
        match rule {
            Rule::Binary { level } => self.climb(level, stream, 0),
            Rule::Unary => self.unary(stream, 0),
            Rule::Primary => self.primary(stream, 0),
        }
    }

    /// Operands joined by operators of row `min_level` or tighter
    ///
    /// Only right operands recurse, always into a strictly tighter row, so a
    /// group costs the same few frames however many rows sit between it and
    /// the enclosing expression.
    fn climb<'t>(
        &self,
        min_level: usize,
        stream: TokenStream<'t>,
        depth: usize,
    ) -> ParsingStep<'t> {
        let ParsingStep {
            mut report,
            mut remaining,
        } = self.unary(stream, depth);

        while let Some(level) = binary_level(remaining).filter(|&level| level >= min_level) {
            let consumed = remaining.consume(1);
            let operator = consumed.tokens[0].clone();
            let right = self.climb(level + 1, consumed.remaining, depth);
            report = report.with_binary(operator, right.report);
            remaining = right.remaining;
        }

        ParsingStep::new(report, remaining)
    }

    /// Prefix operators are collected in a loop and applied innermost first
    fn unary<'t>(&self, stream: TokenStream<'t>, depth: usize) -> ParsingStep<'t> {
        let mut operators = Vec::new();
        let mut rest = stream;
        while rest.lookahead_matches(&[UNARY_OPERATORS]) {
            let consumed = rest.consume(1);
            let operator = &consumed.tokens[0];
            if let Some(abandoned) = self.check_depth(operator, rest, depth + operators.len()) {
                return abandoned;
            }
            operators.push(operator.clone());
            rest = consumed.remaining;
        }

        let operand = self.primary(rest, depth + operators.len());
        let report = operators
            .into_iter()
            .rev()
            .fold(operand.report, ParsingReport::with_unary);
        ParsingStep::new(report, operand.remaining)
    }

    fn primary<'t>(&self, stream: TokenStream<'t>, depth: usize) -> ParsingStep<'t> {
        let Some(next) = stream.try_lookahead(0).filter(|t| !t.has_type(TokenType::Eof)) else {
            let position = stream.try_lookahead(0).map_or(Position::start(), Token::position);
            return fail(DiagnosticKind::UnexpectedEndOfInput, position, stream);
        };

        if next.has_any_type(LITERALS) {
            let consumed = stream.consume(1);
            let literal = Expression::literal(next.clone());
            return ParsingStep::new(ParsingReport::success(literal), consumed.remaining);
        }

        if next.has_type(TokenType::LeftParen) {
            if let Some(abandoned) = self.check_depth(next, stream, depth) {
                return abandoned;
            }

            let inner = self.climb(0, stream.advance(1), depth + 1);
            if inner.report.expression().is_none() {
                // the inner failure already explains the missing `)`
                return inner;
            }
            if inner.remaining.lookahead_matches(&[&[TokenType::RightParen]]) {
                return ParsingStep::new(inner.report.with_grouping(), inner.remaining.advance(1));
            }

            let (found, position) = match inner.remaining.try_lookahead(0) {
                Some(token) if !token.has_type(TokenType::Eof) => {
                    (Some(token.lexeme().to_string()), token.position())
                }
                Some(token) => (None, token.position()),
                None => (None, next.position()),
            };
            let error = Diagnostic::new(DiagnosticKind::ExpectedRightParen { found }, position);
            tracing::debug!(target: TARGET, %error, "diagnostic");
            return ParsingStep::new(
                inner.report.with_grouping().with_error(error),
                inner.remaining,
            );
        }

        fail(
            DiagnosticKind::ExpectedPrimary {
                found: next.lexeme().to_string(),
            },
            next.position(),
            stream,
        )
    }

    /// `None` while `depth` may still grow; otherwise the abandoning step
    fn check_depth<'t>(
        &self,
        token: &Token,
        stream: TokenStream<'t>,
        depth: usize,
    ) -> Option<ParsingStep<'t>> {
        let limit = self.limits.max_nesting_depth;
        if depth < limit {
            return None;
        }

        tracing::debug!(target: TARGET, depth, limit, "nesting limit reached");
        let error = Diagnostic::new(DiagnosticKind::NestingTooDeep { limit }, token.position());
        Some(ParsingStep::new(
            ParsingReport::failure(error),
            skip_to_end(stream),
        ))
    }
}

/// Row of [`BINARY_LEVELS`] holding the next token
fn binary_level(stream: TokenStream<'_>) -> Option<usize> {
    let kind = stream.peek_type()?;
    BINARY_LEVELS.iter().position(|operators| operators.contains(&kind))
}

/// Failure that consumes nothing
fn fail(kind: DiagnosticKind, position: Position, stream: TokenStream<'_>) -> ParsingStep<'_> {
    let error = Diagnostic::new(kind, position);
    tracing::debug!(target: TARGET, %error, "diagnostic");
    ParsingStep::new(ParsingReport::failure(error), stream)
}

/// Stream positioned at the EOF token, or past the last token without one
fn skip_to_end(stream: TokenStream<'_>) -> TokenStream<'_> {
    let rest = stream
        .remaining()
        .iter()
        .take_while(|t| !t.has_type(TokenType::Eof))
        .count();
    stream.advance(rest)
}
