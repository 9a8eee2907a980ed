//! One-call logger setup

use std::sync::Arc;

use lox_config::LoggingConfig;

#[cfg(feature = "file")]
use crate::FileSink;
#[cfg(feature = "stderr")]
use crate::StderrSink;
#[cfg(feature = "stdout")]
use crate::StdoutSink;
use crate::{Level, LogRingBuffer, Logger};

/// Where records go
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    #[cfg(feature = "stdout")]
    Stdout,
    #[cfg(feature = "stderr")]
    Stderr,
    /// Append to the file at this path
    #[cfg(feature = "file")]
    File(String),
    /// Keep the last N records in memory
    RingBuffer(usize),
}

/// Logger recipe
///
/// ```
/// use lox_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(1000)
///     .init();
///
/// lox_log::debug!(logger, "ready");
/// assert_eq!(ring.unwrap().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
    pub enable_span: bool,
}

impl LogConfig {
    /// No outputs at the given level
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
            enable_span: true,
        }
    }

    /// Debug level, stdout, and a 10000 record ring buffer
    #[cfg(feature = "stdout")]
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
            enable_span: true,
        }
    }

    /// Warn level, stderr, and a 1000 record ring buffer
    #[cfg(feature = "stderr")]
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
            enable_span: false,
        }
    }

    /// Silent
    pub fn test() -> Self {
        LogConfig {
            level: Level::Error,
            outputs: Vec::new(),
            enable_span: false,
        }
    }

    /// Build from the `logging` section of a [`lox_config::LoxConfig`]
    pub fn from_settings(settings: &LoggingConfig) -> Self {
        let config = LogConfig::new(settings.level.into());
        #[cfg(feature = "stderr")]
        let config = if settings.stderr {
            config.with_stderr()
        } else {
            config
        };
        match settings.ring_buffer_capacity {
            Some(capacity) => config.with_ring_buffer(capacity),
            None => config,
        }
    }

    #[cfg(feature = "stdout")]
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    #[cfg(feature = "stderr")]
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    #[cfg(feature = "file")]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    pub fn without_span(mut self) -> Self {
        self.enable_span = false;
        self
    }

    /// Returns the logger and, when one was configured, the last ring buffer
    /// so callers can dump it after a failure
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        logger.set_span_tracking(self.enable_span);
        let mut ring_buffer = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stdout")]
                OutputConfig::Stdout => logger.add_sink(StdoutSink),
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                #[cfg(feature = "file")]
                OutputConfig::File(path) => match FileSink::new(&path) {
                    Ok(sink) => logger.add_sink(sink),
                    Err(err) => eprintln!("lox-log: cannot open {path}: {err}"),
                },
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_config::LogLevel;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.is_empty());
        assert!(config.enable_span);
    }

    #[cfg(feature = "stdout")]
    #[test]
    fn test_dev_preset() {
        let config = LogConfig::dev();
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.contains(&OutputConfig::Stdout));
        assert!(config.outputs.contains(&OutputConfig::RingBuffer(10000)));
    }

    #[cfg(feature = "stderr")]
    #[test]
    fn test_production_preset() {
        let config = LogConfig::production();
        assert_eq!(config.level, Level::Warn);
        assert!(config.outputs.contains(&OutputConfig::Stderr));
        assert!(!config.enable_span);
    }

    #[test]
    fn test_test_preset_is_silent() {
        let (logger, ring) = LogConfig::test().init();
        assert_eq!(logger.level(), Level::Error);
        assert!(ring.is_none());
    }

    #[cfg(feature = "stdout")]
    #[test]
    fn test_with_stdout_is_idempotent() {
        let config = LogConfig::new(Level::Info).with_stdout().with_stdout();
        assert_eq!(config.outputs.len(), 1);
    }

    #[test]
    fn test_init_with_ring_buffer() {
        let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();
        let ring = ring.expect("ring buffer configured");

        crate::debug!(logger, "test message");
        crate::trace!(logger, "filtered out");

        assert_eq!(ring.len(), 1);
        assert_eq!(ring.capacity(), 100);
    }

    #[test]
    fn test_without_span_disables_tracking() {
        let (logger, _) = LogConfig::new(Level::Debug).without_span().init();
        let guard = logger.enter_span("lex");
        assert_eq!(logger.span_depth(), 0);
        drop(guard);
    }

    #[test]
    fn test_from_settings() {
        let settings = LoggingConfig {
            level: LogLevel::Trace,
            ring_buffer_capacity: Some(64),
            stderr: false,
        };
        let config = LogConfig::from_settings(&settings);
        assert_eq!(config.level, Level::Trace);
        assert_eq!(config.outputs, vec![OutputConfig::RingBuffer(64)]);
    }

    #[test]
    fn test_from_default_settings_has_no_outputs() {
        let config = LogConfig::from_settings(&LoggingConfig::default());
        assert_eq!(config.level, Level::Warn);
        assert!(config.outputs.is_empty());
    }
}
