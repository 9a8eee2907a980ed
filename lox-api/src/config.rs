//! Run configuration and the optional global instance used by drivers

use std::sync::Arc;

use lox_config::{LimitConfig, LoxConfig};
use lox_log::{LogConfig, LogRingBuffer, Logger};
use once_cell::sync::OnceCell;

use crate::error::LoxError;

#[derive(Clone)]
pub struct RunConfig {
    pub limits: LimitConfig,
    pub logger: Arc<Logger>,
    /// Set when the logging settings asked for one
    pub ring_buffer: Option<Arc<LogRingBuffer>>,
}

impl RunConfig {
    /// Build the logger described by `config.logging`
    pub fn from_config(config: &LoxConfig) -> Self {
        let (logger, ring_buffer) = LogConfig::from_settings(&config.logging).init();
        Self {
            limits: config.limits,
            logger,
            ring_buffer,
        }
    }

    /// Parse a JSON configuration document and build from it
    pub fn from_json(text: &str) -> Result<Self, LoxError> {
        Ok(Self::from_config(&LoxConfig::from_json(text)?))
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_limits(mut self, limits: LimitConfig) -> Self {
        self.limits = limits;
        self
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("limits", &self.limits)
            .field("log_level", &self.logger.level())
            .field("ring_buffer", &self.ring_buffer.as_ref().map(|r| r.capacity()))
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limits: LimitConfig::default(),
            logger: Logger::noop(),
            ring_buffer: None,
        }
    }
}

static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Install the global configuration; only the first call succeeds
pub fn init(config: RunConfig) -> Result<(), LoxError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| LoxError::AlreadyInitialized)
}

/// Global configuration, falling back to the default when [`init`] was never
/// called
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_log::Level;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.limits.max_nesting_depth, 256);
        assert_eq!(cfg.logger.level(), Level::Error);
        assert!(cfg.ring_buffer.is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = LoxConfig::default();
        config.limits.max_nesting_depth = 12;
        config.logging.ring_buffer_capacity = Some(50);
        config.logging.level = lox_config::LogLevel::Debug;

        let cfg = RunConfig::from_config(&config);
        assert_eq!(cfg.limits.max_nesting_depth, 12);
        assert_eq!(cfg.logger.level(), Level::Debug);
        assert_eq!(cfg.ring_buffer.unwrap().capacity(), 50);
    }

    #[test]
    fn test_from_json() {
        let cfg = RunConfig::from_json(r#"{"limits": {"max_nesting_depth": 3}}"#).unwrap();
        assert_eq!(cfg.limits.max_nesting_depth, 3);

        let err = RunConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, LoxError::Config(_)));
    }

    #[test]
    fn test_builders() {
        let logger = Logger::new(Level::Trace);
        let cfg = RunConfig::default()
            .with_logger(logger)
            .with_limits(LimitConfig {
                max_nesting_depth: 1,
            });
        assert_eq!(cfg.logger.level(), Level::Trace);
        assert_eq!(cfg.limits.max_nesting_depth, 1);
    }

    #[test]
    fn test_run_config_debug() {
        let debug_str = format!("{:?}", RunConfig::default());
        assert!(debug_str.contains("limits"));
        assert!(debug_str.contains("log_level"));
    }

    #[test]
    fn test_global_config() {
        // global state is shared by every test in this binary
        let first = init(RunConfig::default());
        assert!(is_initialized());
        if first.is_ok() {
            assert!(matches!(
                init(RunConfig::default()),
                Err(LoxError::AlreadyInitialized)
            ));
        }
        assert_eq!(config().limits, LimitConfig::default());
    }
}
