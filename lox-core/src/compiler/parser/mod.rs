//! Recursive-descent expression parser
//!
//! Grammar levels live in [`rule`]; [`Parser`] wraps them with logging and
//! limits. Every failure is a diagnostic in the [`ParsingReport`].

pub mod expr;
#[allow(clippy::module_inception)]
mod parser;
mod report;
pub mod rule;
mod stream;

pub use expr::{Expression, Fold, Printer};
pub use parser::Parser;
pub use report::{ParsingReport, ParsingStep};
pub use rule::{Grammar, Rule};
pub use stream::{Consumed, TokenStream};
