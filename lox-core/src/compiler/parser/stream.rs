//! Immutable cursor over a finished token list

use crate::compiler::lexer::{Token, TokenType};

/// Tokens taken by [`TokenStream::consume`] and the stream after them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumed<'t> {
    pub tokens: &'t [Token],
    pub remaining: TokenStream<'t>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    offset: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Tokens not yet consumed
    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.offset..]
    }

    /// True when at least `count` tokens remain
    pub fn can_lookahead(&self, count: usize) -> bool {
        self.offset + count <= self.tokens.len()
    }

    pub fn try_lookahead(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.offset + offset)
    }

    /// Token `offset` places ahead
    ///
    /// # Panics
    ///
    /// When `can_lookahead(offset + 1)` is false.
    pub fn lookahead(&self, offset: usize) -> &'t Token {
        match self.try_lookahead(offset) {
            Some(token) => token,
            None => panic!(
                "cannot look {} tokens ahead of offset {}: stream has {} tokens",
                offset,
                self.offset,
                self.tokens.len()
            ),
        }
    }

    /// Take the next `count` tokens
    ///
    /// # Panics
    ///
    /// When fewer than `count` tokens remain.
    pub fn consume(&self, count: usize) -> Consumed<'t> {
        let remaining = self.advance(count);
        Consumed {
            tokens: &self.tokens[self.offset..remaining.offset],
            remaining,
        }
    }

    /// Skip the next `count` tokens
    ///
    /// # Panics
    ///
    /// When fewer than `count` tokens remain.
    pub fn advance(&self, count: usize) -> TokenStream<'t> {
        assert!(
            self.can_lookahead(count),
            "cannot advance {} tokens from offset {}: stream has {} tokens",
            count,
            self.offset,
            self.tokens.len()
        );
        Self {
            tokens: self.tokens,
            offset: self.offset + count,
        }
    }

    /// `expected[i]` lists the accepted types for the token `i` ahead. False
    /// when fewer than `expected.len()` tokens remain.
    pub fn lookahead_matches(&self, expected: &[&[TokenType]]) -> bool {
        self.can_lookahead(expected.len())
            && expected
                .iter()
                .enumerate()
                .all(|(i, kinds)| self.lookahead(i).has_any_type(kinds))
    }

    pub fn peek_type(&self) -> Option<TokenType> {
        self.try_lookahead(0).map(Token::kind)
    }

    /// Next token is EOF, or there is none
    pub fn is_at_end(&self) -> bool {
        matches!(self.peek_type(), None | Some(TokenType::Eof))
    }
}
