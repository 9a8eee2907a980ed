//! Log levels and records

use std::fmt;

use lox_config::LogLevel;

/// Log level, ordered from most to least verbose
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Inverse of `level as u8`
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single formatted log entry
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    pub level: Level,
    /// Module path of the call site
    pub target: &'static str,
    pub message: String,
    /// Innermost span active when the record was written
    pub span_id: Option<u64>,
    pub span_name: Option<&'static str>,
}

impl Record {
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp_ms: current_timestamp_ms(),
            level,
            target,
            message: message.into(),
            span_id: None,
            span_name: None,
        }
    }

    pub fn with_span(mut self, span_id: u64, span_name: &'static str) -> Self {
        self.span_id = Some(span_id);
        self.span_name = Some(span_name);
        self
    }

    /// Render as `[hh:mm:ss.mmm] LEVEL target [span]: message`
    pub fn format(&self) -> String {
        let span_info = match (self.span_id, self.span_name) {
            (Some(id), Some(name)) => format!(" [{name}#{id}]"),
            (Some(id), None) => format!(" [span={id}]"),
            _ => String::new(),
        };

        format!(
            "[{}] {} {}{}: {}",
            format_timestamp(self.timestamp_ms),
            self.level,
            self.target,
            span_info,
            self.message
        )
    }
}

fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn format_timestamp(timestamp_ms: u64) -> String {
    let secs = timestamp_ms / 1000;
    let millis = timestamp_ms % 1000;

    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
