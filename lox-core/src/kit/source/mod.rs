//! Immutable source cursor
//!
//! [`Source`] is a `Copy` view of the full input text plus an offset. Every
//! operation returns a new cursor; the one it was called on is untouched. The
//! position is carried along and advanced char by char, so `position()` is
//! O(1).
//!
//! Offsets passed to `peek`, `take` and `skip` count chars from the cursor,
//! not bytes.

mod pattern;
mod position;

pub use pattern::{CharClass, Pattern};
pub use position::Position;

/// Value extracted from a cursor, paired with the cursor after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a, T> {
    pub value: T,
    pub source: Source<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    text: &'a str,
    /// Byte offset into `text`, always on a char boundary
    offset: usize,
    position: Position,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            position: Position::start(),
        }
    }

    /// Byte offset from the start of the text
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Unconsumed text
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset == self.text.len()
    }

    /// True when a character exists `offset` chars ahead
    pub fn can_peek(&self, offset: usize) -> bool {
        self.try_peek(offset).is_some()
    }

    pub fn try_peek(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Character `offset` chars ahead without advancing
    ///
    /// # Panics
    ///
    /// When [`Source::can_peek`] is false for `offset`.
    pub fn peek(&self, offset: usize) -> char {
        match self.try_peek(offset) {
            Some(c) => c,
            None => panic!(
                "cannot peek {} chars past byte offset {}: source has {} bytes",
                offset,
                self.offset,
                self.text.len()
            ),
        }
    }

    /// The next `count` chars and the cursor after them
    ///
    /// # Panics
    ///
    /// When fewer than `count` chars remain.
    pub fn take(&self, count: usize) -> Fragment<'a, &'a str> {
        let source = self.skip(count);
        Fragment {
            value: source.slice_since(self),
            source,
        }
    }

    /// Advance `count` chars
    ///
    /// # Panics
    ///
    /// When fewer than `count` chars remain.
    pub fn skip(&self, count: usize) -> Source<'a> {
        let mut next = *self;
        let mut chars = self.remaining().chars();
        for step in 0..count {
            match chars.next() {
                Some(c) => next.step(c),
                None => panic!(
                    "cannot skip {} chars past byte offset {}: source ends after {}",
                    count, self.offset, step
                ),
            }
        }
        next
    }

    /// Longest prefix whose chars all match `pattern`, possibly empty
    pub fn take_while<P: Pattern>(&self, pattern: P) -> Fragment<'a, &'a str> {
        self.take(self.count_matching(pattern))
    }

    pub fn skip_while<P: Pattern>(&self, pattern: P) -> Source<'a> {
        self.skip(self.count_matching(pattern))
    }

    /// Text consumed between `earlier` and this cursor
    ///
    /// # Panics
    ///
    /// When `earlier` is ahead of this cursor.
    pub fn slice_since(&self, earlier: &Source<'a>) -> &'a str {
        assert!(
            earlier.offset <= self.offset,
            "slice_since: cursor at byte {} is ahead of {}",
            earlier.offset,
            self.offset
        );
        &self.text[earlier.offset..self.offset]
    }

    /// True when a character exists `offset` chars ahead and matches `pattern`
    pub fn matches_at<P: Pattern>(&self, offset: usize, pattern: P) -> bool {
        self.try_peek(offset).is_some_and(|c| pattern.matches(c))
    }

    /// Length of the run of matching chars at the cursor
    pub fn count_matching<P: Pattern>(&self, pattern: P) -> usize {
        self.remaining()
            .chars()
            .take_while(|&c| pattern.matches(c))
            .count()
    }

    /// Fixed-width lookahead: `patterns[i]` must match the char `i` ahead.
    /// False when the input is shorter than `patterns`.
    pub fn matches<P: Pattern>(&self, patterns: &[P]) -> bool {
        let mut chars = self.remaining().chars();
        patterns
            .iter()
            .all(|pattern| chars.next().is_some_and(|c| pattern.matches(c)))
    }

    fn step(&mut self, c: char) {
        self.offset += c.len_utf8();
        self.position.advance(c);
    }
}
