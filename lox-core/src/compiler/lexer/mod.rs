//! Lox lexer
//!
//! A finite-state tokenizer over an immutable [`Source`](crate::kit::Source).
//! It never stops on bad input: unexpected characters and unterminated
//! strings are recorded as diagnostics and scanning carries on.

#[allow(clippy::module_inception)]
mod lexer;
mod result;
mod state;
mod token;
mod token_kind;

pub use lexer::Lexer;
pub use result::LexingResult;
pub use state::{LexingState, TransitionError};
pub use token::Token;
pub use token_kind::TokenType;
