//! Expression tree and folds over it

use std::fmt;

use crate::compiler::lexer::Token;

/// Closed set of expression nodes; each node owns its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Binary {
        operator: Token,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: Token,
        operand: Box<Expression>,
    },
    Grouping(Box<Expression>),
    Literal(Token),
}

impl Expression {
    pub fn binary(operator: Token, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, operand: Expression) -> Self {
        Expression::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Box::new(inner))
    }

    pub fn literal(token: Token) -> Self {
        Expression::Literal(token)
    }

    /// Hand this node to the matching `folder` method
    pub fn fold<F: Fold + ?Sized>(&self, folder: &mut F) -> F::Output {
        match self {
            Expression::Binary {
                operator,
                left,
                right,
            } => folder.binary(operator, left, right),
            Expression::Unary { operator, operand } => folder.unary(operator, operand),
            Expression::Grouping(inner) => folder.grouping(inner),
            Expression::Literal(token) => folder.literal(token),
        }
    }
}

/// Per-variant consumer of an [`Expression`]
///
/// Implementations decide whether and how to recurse, usually by calling
/// [`Expression::fold`] on the children.
pub trait Fold {
    type Output;

    fn binary(&mut self, operator: &Token, left: &Expression, right: &Expression)
        -> Self::Output;

    fn unary(&mut self, operator: &Token, operand: &Expression) -> Self::Output;

    fn grouping(&mut self, inner: &Expression) -> Self::Output;

    fn literal(&mut self, token: &Token) -> Self::Output;
}

/// Fully parenthesized prefix form: `(op left right)`, `(op operand)`,
/// `(inner)`, and the raw lexeme for literals
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Printer {
    pub fn print(expression: &Expression) -> String {
        expression.fold(&mut Printer)
    }
}

impl Fold for Printer {
    type Output = String;

    fn binary(&mut self, operator: &Token, left: &Expression, right: &Expression) -> String {
        format!(
            "({} {} {})",
            operator.lexeme(),
            left.fold(self),
            right.fold(self)
        )
    }

    fn unary(&mut self, operator: &Token, operand: &Expression) -> String {
        format!("({} {})", operator.lexeme(), operand.fold(self))
    }

    fn grouping(&mut self, inner: &Expression) -> String {
        format!("({})", inner.fold(self))
    }

    fn literal(&mut self, token: &Token) -> String {
        token.lexeme().to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::print(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::TokenType;
    use crate::kit::Position;

    fn number(lexeme: &str) -> Expression {
        Expression::literal(Token::explicit(
            TokenType::Number,
            lexeme,
            Position::start(),
        ))
    }

    fn operator(lexeme: &str) -> Token {
        Token::from_lexeme(lexeme, Position::start()).unwrap()
    }

    #[test]
    fn test_print_literal() {
        assert_eq!(number("10").to_string(), "10");
        let string = Expression::literal(Token::explicit(
            TokenType::String,
            "\"hi\"",
            Position::start(),
        ));
        assert_eq!(string.to_string(), "\"hi\"");
    }

    #[test]
    fn test_print_binary() {
        let expr = Expression::binary(operator("+"), number("10"), number("20"));
        assert_eq!(Printer::print(&expr), "(+ 10 20)");
    }

    #[test]
    fn test_print_unary() {
        let expr = Expression::unary(operator("-"), number("10"));
        assert_eq!(expr.to_string(), "(- 10)");
    }

    #[test]
    fn test_print_grouping() {
        let expr = Expression::grouping(number("10"));
        assert_eq!(expr.to_string(), "(10)");
    }

    #[test]
    fn test_print_nested() {
        let expr = Expression::binary(
            operator("+"),
            Expression::unary(operator("-"), number("10")),
            number("20"),
        );
        assert_eq!(expr.to_string(), "(+ (- 10) 20)");
    }

    /// A second consumer: longest path from the root to a leaf
    struct Depth;

    impl Fold for Depth {
        type Output = usize;

        fn binary(&mut self, _: &Token, left: &Expression, right: &Expression) -> usize {
            1 + left.fold(self).max(right.fold(self))
        }

        fn unary(&mut self, _: &Token, operand: &Expression) -> usize {
            1 + operand.fold(self)
        }

        fn grouping(&mut self, inner: &Expression) -> usize {
            1 + inner.fold(self)
        }

        fn literal(&mut self, _: &Token) -> usize {
            1
        }
    }

    #[test]
    fn test_custom_fold() {
        let expr = Expression::binary(
            operator("*"),
            Expression::grouping(Expression::unary(operator("!"), number("1"))),
            number("2"),
        );
        assert_eq!(expr.fold(&mut Depth), 4);
        assert_eq!(number("3").fold(&mut Depth), 1);
    }
}
