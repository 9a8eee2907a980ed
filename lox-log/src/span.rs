//! Nested execution contexts attached to log records

/// Unique span identifier, allocated per logger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanId(pub u64);

/// A named region of work, such as one `tokenize` or `parse` call
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub id: SpanId,
    pub name: &'static str,
}

impl Span {
    pub const fn new(id: SpanId, name: &'static str) -> Self {
        Span { id, name }
    }
}
