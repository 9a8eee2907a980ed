use std::fmt;

use serde::Serialize;

use super::token_kind::TokenType;
use crate::kit::Position;

/// A classified lexeme; the lexeme is the exact source slice, quotes included
/// for strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenType,
    lexeme: String,
    position: Position,
}

impl Token {
    /// Token with a caller-supplied type (EOF, literals, identifiers, keywords)
    pub fn explicit(kind: TokenType, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Punctuation or operator token whose type follows from the lexeme.
    /// `None` when the lexeme is not in the fixed table.
    pub fn from_lexeme(lexeme: &str, position: Position) -> Option<Self> {
        TokenType::from_lexeme(lexeme).map(|kind| Self::explicit(kind, lexeme, position))
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_type(&self, kind: TokenType) -> bool {
        self.kind == kind
    }

    pub fn has_any_type(&self, kinds: &[TokenType]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, \"{}\", {})", self.kind, self.lexeme, self.position)
    }
}
