//! Lox - front-end for the Lox language
//!
//! Scans source text into tokens and parses a single expression from them,
//! reporting every problem it finds instead of stopping at the first one.
//!
//! # Architecture
//!
//! ```text
//! lox-config/  - Configuration data (limits, logging settings)
//! lox-log/     - Explicit loggers, sinks and the ring buffer
//! lox-core/    - Pure lexing and parsing logic (no IO)
//! lox-api/     - Orchestration, RunConfig and error reports
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lox_workspace::{analyze, RunConfig};
//!
//! let analysis = analyze("(1 + 2) * 3", &RunConfig::default()).unwrap();
//! assert_eq!(analysis.printed().as_deref(), Some("(* ((+ 1 2)) 3)"));
//! ```

pub use lox_api::*;
pub use lox_log;
