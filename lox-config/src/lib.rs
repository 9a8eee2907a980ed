//! Lox Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Lox crates.

use serde::{Deserialize, Serialize};

/// Limits guarding the recursive parts of the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum nesting of groupings and unary operators in one expression
    pub max_nesting_depth: usize,
}

/// Log verbosity, mirrored by `lox_log::Level`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Logging settings consumed by `lox_log::LogConfig::from_settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level that reaches the sinks
    pub level: LogLevel,
    /// Keep the last N records in memory when set
    pub ring_buffer_capacity: Option<usize>,
    /// Echo records to stderr
    pub stderr: bool,
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoxConfig {
    pub limits: LimitConfig,
    pub logging: LoggingConfig,
}

impl LoxConfig {
    /// Parse a JSON document; absent fields fall back to their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize back to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Front-end phase, used to tag log output and diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Lexer,
    Parser,
}

impl Phase {
    /// Get the string name of the phase
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Lexer => "lox::lexer",
            Phase::Parser => "lox::parser",
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: 256,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            ring_buffer_capacity: None,
            stderr: false,
        }
    }
}
