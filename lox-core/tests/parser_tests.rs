//! End-to-end parsing from text

use lox_core::{
    parse, tokenize, DiagnosticKind, Expression, Fold, LimitConfig, Parser, Printer, Token,
};

fn print(text: &str) -> String {
    let tokens = tokenize(text).unwrap();
    assert!(!tokens.has_errors(), "lexing {text:?}");
    let report = parse(tokens.tokens());
    assert!(!report.has_errors(), "parsing {text:?}: {:?}", report.errors());
    Printer::print(report.expression().unwrap())
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(print("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(print("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(print("(1 + 2) * 3"), "(* ((+ 1 2)) 3)");
    assert_eq!(
        print("-1 * 2 >= 3 == !false"),
        "(== (>= (* (- 1) 2) 3) (! false))"
    );
}

#[test]
fn test_multiline_expression() {
    assert_eq!(print("1 +\n  // comment\n  2"), "(+ 1 2)");
}

#[test]
fn test_error_report_keeps_positions() {
    let tokens = tokenize("(1 +\n)").unwrap();
    let report = parse(tokens.tokens());
    assert!(report.expression().is_none());

    let messages: Vec<_> = report.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["Error: Expected primary expression, found ')' at 2:1"]
    );
}

#[test]
fn test_lexer_errors_do_not_block_parsing() {
    let tokens = tokenize("1 $ + 2").unwrap();
    assert_eq!(tokens.errors().len(), 1);

    let report = parse(tokens.tokens());
    assert_eq!(report.expression().unwrap().to_string(), "(+ 1 2)");
}

#[test]
fn test_end_of_input() {
    let tokens = tokenize("-").unwrap();
    let report = parse(tokens.tokens());
    let kinds: Vec<_> = report.errors().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::UnexpectedEndOfInput]);
}

#[test]
fn test_nesting_limit_from_config() {
    let text = format!("{}1", "-".repeat(20));
    let tokens = tokenize(&text).unwrap();

    let strict = Parser::new().with_limits(LimitConfig {
        max_nesting_depth: 10,
    });
    let report = strict.parse(tokens.tokens());
    assert_eq!(report.errors().len(), 1);
    assert!(report.expression().is_none());

    let relaxed = Parser::new();
    assert!(!relaxed.parse(tokens.tokens()).has_errors());
}

#[test]
fn test_default_limits_nest_deeply() {
    let limit = LimitConfig::default().max_nesting_depth;
    let text = format!("{}1{}", "(".repeat(limit - 1), ")".repeat(limit - 1));
    assert_eq!(print(&text), text);

    let mut expression = parse(tokenize(&text).unwrap().tokens())
        .into_parts()
        .0
        .unwrap();
    let mut groups = 0;
    while let Expression::Grouping(inner) = expression {
        expression = *inner;
        groups += 1;
    }
    assert_eq!(groups, limit - 1);
}

#[test]
fn test_default_limits_stop_runaway_nesting() {
    let text = format!("{}1", "(".repeat(100_000));
    let report = parse(tokenize(&text).unwrap().tokens());
    let kinds: Vec<_> = report.errors().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::NestingTooDeep {
            limit: LimitConfig::default().max_nesting_depth
        }]
    );
    assert!(report.expression().is_none());
}

/// Collects literal lexemes left to right
struct Leaves(Vec<String>);

impl Fold for Leaves {
    type Output = ();

    fn binary(&mut self, _: &Token, left: &Expression, right: &Expression) {
        left.fold(self);
        right.fold(self);
    }

    fn unary(&mut self, _: &Token, operand: &Expression) {
        operand.fold(self);
    }

    fn grouping(&mut self, inner: &Expression) {
        inner.fold(self);
    }

    fn literal(&mut self, token: &Token) {
        self.0.push(token.lexeme().to_string());
    }
}

#[test]
fn test_external_fold() {
    let tokens = tokenize("(1 + \"two\") * -nil / true").unwrap();
    let report = parse(tokens.tokens());

    let mut leaves = Leaves(Vec::new());
    report.expression().unwrap().fold(&mut leaves);
    assert_eq!(leaves.0, vec!["1", "\"two\"", "nil", "true"]);
}
