//! Logger and sinks

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::{Level, Record};
use crate::span::{Span, SpanId};

/// Destination for formatted records
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// Explicitly passed logger; there is no global instance
pub struct Logger {
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
    span_stack: Mutex<Vec<Span>>,
    span_tracking: AtomicBool,
    next_span_id: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a panicking sink must not silence every later record
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
            span_stack: Mutex::new(Vec::new()),
            span_tracking: AtomicBool::new(true),
            next_span_id: AtomicU64::new(1),
        })
    }

    /// Builder-style sink registration
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        lock(&self.sinks).push(Box::new(sink));
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Write one record to every sink; prefer the macros, which skip formatting
    /// for disabled levels
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut record = Record::new(level, target, message);
        if let Some(span) = lock(&self.span_stack).last() {
            record = record.with_span(span.id.0, span.name);
        }

        for sink in lock(&self.sinks).iter() {
            sink.write(&record);
        }
    }

    /// Push a span; it is popped when the guard drops. A no-op while span
    /// tracking is off
    pub fn enter_span(self: &Arc<Self>, name: &'static str) -> SpanGuard {
        let active = self.span_tracking.load(Ordering::Relaxed);
        if active {
            let id = SpanId(self.next_span_id.fetch_add(1, Ordering::Relaxed));
            lock(&self.span_stack).push(Span::new(id, name));
        }
        SpanGuard {
            logger: Arc::clone(self),
            active,
        }
    }

    pub fn set_span_tracking(&self, enabled: bool) {
        self.span_tracking.store(enabled, Ordering::Relaxed);
    }

    pub fn span_depth(&self) -> usize {
        lock(&self.span_stack).len()
    }

    /// Error level with no sinks
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

/// Pops the span pushed by [`Logger::enter_span`]
pub struct SpanGuard {
    logger: Arc<Logger>,
    active: bool,
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        if self.active {
            lock(&self.logger.span_stack).pop();
        }
    }
}

// chaining: one logger forwarding into another
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

#[cfg(feature = "stdout")]
pub struct StdoutSink;

#[cfg(feature = "stdout")]
impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

#[cfg(feature = "stderr")]
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

/// Appends formatted records to a file
#[cfg(feature = "file")]
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

#[cfg(feature = "file")]
impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

#[cfg(feature = "file")]
impl LogSink for FileSink {
    fn write(&self, record: &Record) {
        use std::io::Write;
        let mut file = lock(&self.file);
        let _ = writeln!(file, "{}", record.format());
    }
}
