//! Logging macros
//!
//! Every macro takes the logger first and only formats its message when the
//! level is enabled.

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        if $logger.is_enabled($level) {
            let message = ::std::format!($($arg)*);
            $logger.log($level, ::std::module_path!(), message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Level, LogRingBuffer, Logger};

    #[test]
    fn test_trace_macro() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        trace!(logger, "test trace");
        trace!(logger, "formatted {}", "value");

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.level == Level::Trace));
        assert_eq!(records[1].message, "formatted value");
    }

    #[test]
    fn test_levels_map_to_records() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e = {}", 42);

        let levels: Vec<_> = ring.dump_records().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![Level::Debug, Level::Info, Level::Warn, Level::Error]
        );
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        use std::cell::Cell;
        use std::fmt;

        struct Counted<'a>(&'a Cell<u32>);
        impl fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("counted")
            }
        }

        let calls = Cell::new(0);
        let logger = Logger::new(Level::Warn);

        debug!(logger, "{}", Counted(&calls));
        assert_eq!(calls.get(), 0);

        warn!(logger, "{}", Counted(&calls));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_target_is_call_site_module() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Info).with_sink(ring.clone());

        info!(logger, "where am i");

        let records = ring.dump_records();
        assert_eq!(records[0].target, module_path!());
    }
}
