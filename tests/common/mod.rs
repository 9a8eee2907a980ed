//! Helpers shared by the end-to-end suites

use std::sync::Arc;

use lox_workspace::lox_log::{Level, LogRingBuffer, Logger};
use lox_workspace::{analyze, Analysis, RunConfig};

/// Analyze with default limits and a silent logger
pub fn run(source: &str) -> Analysis {
    analyze(source, &RunConfig::default()).expect("front-end stayed in contract")
}

/// Prefix form of the parsed expression, panicking on any diagnostic
pub fn print(source: &str) -> String {
    let analysis = run(source);
    assert!(
        !analysis.has_errors(),
        "{source:?}: {:?}",
        analysis.reports()
    );
    analysis.printed().expect("expression")
}

/// Rendered reports, lexer first
pub fn report_lines(source: &str) -> Vec<String> {
    run(source).reports().iter().map(ToString::to_string).collect()
}

/// Config whose logger records everything at `level` and above
pub fn recording_config(level: Level) -> (RunConfig, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(1024);
    let logger = Logger::new(level).with_sink(ring.clone());
    (RunConfig::default().with_logger(logger), ring)
}
