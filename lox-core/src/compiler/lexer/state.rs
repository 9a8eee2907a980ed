//! Lexing state machine
//!
//! Each [`LexingState`] owns the remaining [`Source`] and everything recognized
//! so far. [`LexingState::next`] consumes the state and yields its successor,
//! recording at most one token or diagnostic on the way. Every transition
//! either advances the source or hands over to a state that will, so driving
//! `next` until [`LexingState::is_final`] always terminates.
//!
//! ```text
//! Initial ──ws/punct/bad char──▶ Initial
//!    │ ! = > <      ─▶ CompoundOperator ─▶ Initial
//!    │ /            ─▶ Slash            ─▶ Initial
//!    │ "            ─▶ String           ─▶ Initial | Eof
//!    │ digit        ─▶ Number           ─▶ Initial
//!    │ letter or _  ─▶ Identifier       ─▶ Initial
//!    └ end of input ─▶ Eof ─▶ Terminated
//! ```

use lox_config::Phase;

use super::result::LexingResult;
use super::token::Token;
use super::token_kind::TokenType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::kit::{CharClass, Pattern, Position, Source};

const TARGET: &str = Phase::Lexer.target();

const COMPOUND_OPERATOR_START: CharClass = CharClass::OneOf("!=><");

/// Contract violations of the state machine. Problems in the input are never
/// reported this way; they become diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot transition from final state {state}")]
    IllegalTransition { state: &'static str },

    #[error("{state} state entered at {position} on {found:?}, expected {expected}")]
    MisplacedState {
        state: &'static str,
        expected: &'static str,
        found: Option<char>,
        position: Position,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexingState<'a> {
    /// Dispatches on the next character
    Initial {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Positioned at one of `! = > <`
    CompoundOperator {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Positioned at `/`
    Slash {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Positioned at the opening `"`
    String {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Positioned at a digit
    Number {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Positioned at a letter or `_`
    Identifier {
        source: Source<'a>,
        result: LexingResult,
    },
    /// Emits the EOF token
    Eof {
        source: Source<'a>,
        result: LexingResult,
    },
    Terminated {
        result: LexingResult,
    },
}

impl<'a> LexingState<'a> {
    /// Start state for a whole text
    pub fn initial(source: Source<'a>) -> Self {
        LexingState::Initial {
            source,
            result: LexingResult::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LexingState::Initial { .. } => "Initial",
            LexingState::CompoundOperator { .. } => "CompoundOperator",
            LexingState::Slash { .. } => "Slash",
            LexingState::String { .. } => "String",
            LexingState::Number { .. } => "Number",
            LexingState::Identifier { .. } => "Identifier",
            LexingState::Eof { .. } => "Eof",
            LexingState::Terminated { .. } => "Terminated",
        }
    }

    /// Only `Terminated` is final
    pub fn is_final(&self) -> bool {
        matches!(self, LexingState::Terminated { .. })
    }

    /// Everything recognized before this state
    pub fn result(&self) -> &LexingResult {
        match self {
            LexingState::Initial { result, .. }
            | LexingState::CompoundOperator { result, .. }
            | LexingState::Slash { result, .. }
            | LexingState::String { result, .. }
            | LexingState::Number { result, .. }
            | LexingState::Identifier { result, .. }
            | LexingState::Eof { result, .. }
            | LexingState::Terminated { result } => result,
        }
    }

    pub fn into_result(self) -> LexingResult {
        match self {
            LexingState::Initial { result, .. }
            | LexingState::CompoundOperator { result, .. }
            | LexingState::Slash { result, .. }
            | LexingState::String { result, .. }
            | LexingState::Number { result, .. }
            | LexingState::Identifier { result, .. }
            | LexingState::Eof { result, .. }
            | LexingState::Terminated { result } => result,
        }
    }

    /// Advance the machine by one state
    ///
    /// # Errors
    ///
    /// [`TransitionError::IllegalTransition`] on `Terminated`, and
    /// [`TransitionError::MisplacedState`] when a state was built on a
    /// character it does not handle.
    pub fn next(self) -> Result<LexingState<'a>, TransitionError> {
        tracing::trace!(target: TARGET, state = self.name(), "transition");

        match self {
            LexingState::Initial { source, result } => Ok(Self::dispatch(source, result)),
            LexingState::CompoundOperator { source, result } => {
                expect_at(&source, "CompoundOperator", "one of ! = > <", COMPOUND_OPERATOR_START)?;
                let width = if source.matches_at(1, '=') { 2 } else { 1 };
                let fragment = source.take(width);
                let token = Token::from_lexeme(fragment.value, source.position()).ok_or(
                    TransitionError::MisplacedState {
                        state: "CompoundOperator",
                        expected: "one of ! = > <",
                        found: source.try_peek(0),
                        position: source.position(),
                    },
                )?;
                Ok(LexingState::Initial {
                    source: fragment.source,
                    result: result.with_token(token),
                })
            }
            LexingState::Slash { source, result } => {
                expect_at(&source, "Slash", "'/'", '/')?;
                if source.matches(&['/', '/']) {
                    tracing::trace!(target: TARGET, position = %source.position(), "line comment");
                    return Ok(LexingState::Initial {
                        source: source.skip_while(CharClass::Except('\n')),
                        result,
                    });
                }
                let token = Token::explicit(TokenType::Slash, "/", source.position());
                Ok(LexingState::Initial {
                    source: source.skip(1),
                    result: result.with_token(token),
                })
            }
            LexingState::String { source, result } => {
                expect_at(&source, "String", "'\"'", '"')?;
                let body_end = source.skip(1).skip_while(CharClass::Except('"'));
                if body_end.is_exhausted() {
                    let error =
                        Diagnostic::new(DiagnosticKind::UnterminatedString, source.position());
                    tracing::debug!(target: TARGET, %error, "diagnostic");
                    return Ok(LexingState::Eof {
                        source: body_end,
                        result: result.with_error(error),
                    });
                }
                let end = body_end.skip(1);
                let token =
                    Token::explicit(TokenType::String, end.slice_since(&source), source.position());
                Ok(LexingState::Initial {
                    source: end,
                    result: result.with_token(token),
                })
            }
            LexingState::Number { source, result } => {
                expect_at(&source, "Number", "a digit", CharClass::Digit)?;
                let mut end = source.skip_while(CharClass::Digit);
                if end.matches(&[CharClass::Exact('.'), CharClass::Digit]) {
                    end = end.skip(1).skip_while(CharClass::Digit);
                }
                let token =
                    Token::explicit(TokenType::Number, end.slice_since(&source), source.position());
                Ok(LexingState::Initial {
                    source: end,
                    result: result.with_token(token),
                })
            }
            LexingState::Identifier { source, result } => {
                expect_at(&source, "Identifier", "a letter or '_'", CharClass::IdentifierStart)?;
                let fragment = source.take_while(CharClass::IdentifierContinue);
                let kind = TokenType::keyword(fragment.value).unwrap_or(TokenType::Identifier);
                let token = Token::explicit(kind, fragment.value, source.position());
                Ok(LexingState::Initial {
                    source: fragment.source,
                    result: result.with_token(token),
                })
            }
            LexingState::Eof { source, result } => {
                let token = Token::explicit(TokenType::Eof, "", source.position());
                Ok(LexingState::Terminated {
                    result: result.with_token(token),
                })
            }
            LexingState::Terminated { .. } => Err(TransitionError::IllegalTransition {
                state: "Terminated",
            }),
        }
    }

    fn dispatch(source: Source<'a>, result: LexingResult) -> LexingState<'a> {
        let Some(c) = source.try_peek(0) else {
            return LexingState::Eof { source, result };
        };

        match c {
            c if CharClass::Whitespace.matches(c) => LexingState::Initial {
                source: source.skip_while(CharClass::Whitespace),
                result,
            },
            c if COMPOUND_OPERATOR_START.matches(c) => {
                LexingState::CompoundOperator { source, result }
            }
            '/' => LexingState::Slash { source, result },
            '"' => LexingState::String { source, result },
            c if CharClass::Digit.matches(c) => LexingState::Number { source, result },
            c if CharClass::IdentifierStart.matches(c) => {
                LexingState::Identifier { source, result }
            }
            c => {
                let fragment = source.take(1);
                let result = match Token::from_lexeme(fragment.value, source.position()) {
                    Some(token) => result.with_token(token),
                    None => {
                        let error = Diagnostic::new(
                            DiagnosticKind::UnexpectedCharacter(c),
                            source.position(),
                        );
                        tracing::debug!(target: TARGET, %error, "diagnostic");
                        result.with_error(error)
                    }
                };
                LexingState::Initial {
                    source: fragment.source,
                    result,
                }
            }
        }
    }
}

fn expect_at<P: Pattern>(
    source: &Source<'_>,
    state: &'static str,
    expected: &'static str,
    pattern: P,
) -> Result<(), TransitionError> {
    if source.matches_at(0, pattern) {
        Ok(())
    } else {
        Err(TransitionError::MisplacedState {
            state,
            expected,
            found: source.try_peek(0),
            position: source.position(),
        })
    }
}
