//! Single-character patterns
//!
//! A [`Pattern`] decides whether one character belongs to a class. The cursor
//! combines them into run-length matching and fixed-width lookahead.

/// Predicate over a single character
pub trait Pattern {
    fn matches(&self, c: char) -> bool;
}

/// Character classes used by the Lox lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Exactly this character
    Exact(char),
    /// Any character of the string
    OneOf(&'static str),
    /// `0-9`
    Digit,
    /// `A-Za-z`
    Alpha,
    /// `A-Za-z_`
    IdentifierStart,
    /// `A-Za-z0-9_`
    IdentifierContinue,
    /// Space, tab, carriage return or newline
    Whitespace,
    /// Anything but this character
    Except(char),
}

impl Pattern for CharClass {
    fn matches(&self, c: char) -> bool {
        match *self {
            CharClass::Exact(expected) => c == expected,
            CharClass::OneOf(set) => set.contains(c),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::IdentifierStart => c.is_ascii_alphabetic() || c == '_',
            CharClass::IdentifierContinue => c.is_ascii_alphanumeric() || c == '_',
            CharClass::Whitespace => matches!(c, ' ' | '\t' | '\r' | '\n'),
            CharClass::Except(excluded) => c != excluded,
        }
    }
}

impl Pattern for char {
    fn matches(&self, c: char) -> bool {
        *self == c
    }
}

impl<F> Pattern for F
where
    F: Fn(char) -> bool,
{
    fn matches(&self, c: char) -> bool {
        self(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit() {
        assert!(CharClass::Digit.matches('0'));
        assert!(CharClass::Digit.matches('9'));
        assert!(!CharClass::Digit.matches('a'));
        // non-ASCII digits are not Lox digits
        assert!(!CharClass::Digit.matches('٣'));
    }

    #[test]
    fn test_identifier_classes() {
        assert!(CharClass::IdentifierStart.matches('_'));
        assert!(CharClass::IdentifierStart.matches('Z'));
        assert!(!CharClass::IdentifierStart.matches('1'));
        assert!(CharClass::IdentifierContinue.matches('1'));
        assert!(!CharClass::IdentifierContinue.matches('-'));
        assert!(!CharClass::Alpha.matches('_'));
    }

    #[test]
    fn test_one_of_and_except() {
        let compound = CharClass::OneOf("!=<>");
        assert!(compound.matches('<'));
        assert!(!compound.matches('+'));

        assert!(CharClass::Except('"').matches('a'));
        assert!(!CharClass::Except('"').matches('"'));
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(CharClass::Whitespace.matches(c));
        }
        assert!(!CharClass::Whitespace.matches('\u{0b}'));
    }

    #[test]
    fn test_char_and_closure_patterns() {
        assert!('='.matches('='));
        assert!(!'='.matches('!'));

        let upper = |c: char| c.is_ascii_uppercase();
        assert!(upper.matches('Q'));
        assert!(!upper.matches('q'));
    }
}
