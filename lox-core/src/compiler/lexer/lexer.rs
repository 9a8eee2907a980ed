use std::sync::Arc;

use lox_log::{debug, trace, warn, Logger};

use super::result::LexingResult;
use super::state::{LexingState, TransitionError};
use crate::kit::Source;

/// Drives [`LexingState`] from `Initial` to `Terminated`
pub struct Lexer {
    logger: Arc<Logger>,
}

impl Lexer {
    /// Lexer that logs nothing
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating lexer");
        Self { logger }
    }

    /// Tokenize a whole text. Bad input yields diagnostics in the result, the
    /// last token is always EOF.
    ///
    /// # Errors
    ///
    /// Only on a broken state machine; see [`TransitionError`].
    pub fn tokenize(&self, text: &str) -> Result<LexingResult, TransitionError> {
        let span = self.logger.enter_span("tokenize");
        debug!(self.logger, "Tokenizing {} bytes", text.len());

        let mut state = LexingState::initial(Source::new(text));
        let mut transitions = 0usize;
        while !state.is_final() {
            state = state.next()?;
            transitions += 1;
        }
        let result = state.into_result();

        for token in result.tokens() {
            debug!(self.logger, "{}", token);
        }
        for error in result.errors() {
            warn!(self.logger, "{}", error);
        }
        debug!(
            self.logger,
            "Produced {} tokens and {} errors in {} transitions",
            result.tokens().len(),
            result.errors().len(),
            transitions
        );

        drop(span);
        Ok(result)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
