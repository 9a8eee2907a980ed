use std::sync::Arc;

use lox_config::LimitConfig;
use lox_log::{debug, info, trace, warn, Logger};

use super::report::{ParsingReport, ParsingStep};
use super::rule::{Grammar, Rule};
use super::stream::TokenStream;
use crate::compiler::lexer::{Token, TokenType};

/// Parses one expression from a finished token list
pub struct Parser {
    logger: Arc<Logger>,
    limits: LimitConfig,
}

impl Parser {
    /// Parser with default limits that logs nothing
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating parser");
        Self {
            logger,
            limits: LimitConfig::default(),
        }
    }

    pub fn with_limits(mut self, limits: LimitConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Parse the expression at the start of `tokens`. Anything after it is
    /// left alone.
    pub fn parse(&self, tokens: &[Token]) -> ParsingReport {
        self.parse_stream(TokenStream::new(tokens)).report
    }

    /// Parse the expression at the head of `stream`, returning the stream
    /// after it as well
    pub fn parse_stream<'t>(&self, stream: TokenStream<'t>) -> ParsingStep<'t> {
        let span = self.logger.enter_span("parse");
        info!(
            self.logger,
            "Parsing {} tokens (nesting limit {})",
            stream.remaining().len(),
            self.limits.max_nesting_depth
        );

        let step = Grammar::new(self.limits).parse(Rule::EXPRESSION, stream);

        for error in step.report.errors() {
            warn!(self.logger, "{}", error);
        }
        if !step.remaining.is_at_end() {
            let trailing = step
                .remaining
                .remaining()
                .iter()
                .filter(|t| !t.has_type(TokenType::Eof))
                .count();
            debug!(
                self.logger,
                "Stopped before {} trailing tokens, starting with {}",
                trailing,
                step.remaining.lookahead(0)
            );
        }
        match step.report.expression() {
            Some(expression) => debug!(self.logger, "Parsed {}", expression),
            None => debug!(self.logger, "No expression"),
        }

        drop(span);
        step
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
