//! lox-log - structured logging for the Lox front-end
//!
//! - **Explicit**: there is no global logger; an `Arc<Logger>` is handed to
//!   whatever needs one
//! - **Lazy**: the macros skip formatting for disabled levels
//! - **Post-mortem**: a ring buffer keeps the last N records
//!
//! ```
//! use lox_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(1000);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "scanning {} chars", 42);
//! assert_eq!(ring.len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;
mod span;

pub use config::{LogConfig, OutputConfig};
#[cfg(feature = "file")]
pub use logger::FileSink;
#[cfg(feature = "stderr")]
pub use logger::StderrSink;
#[cfg(feature = "stdout")]
pub use logger::StdoutSink;
pub use logger::{LogSink, Logger, SpanGuard};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};
pub use span::{Span, SpanId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
