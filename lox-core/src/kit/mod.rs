//! Language-agnostic building blocks

pub mod source;

pub use source::{CharClass, Fragment, Pattern, Position, Source};
