//! Pluggable destination for enumeration diagnostics.
//!
//! The enumerator reports its decisions through a [`LogSink`] instead of
//! calling a logger directly, so library callers can route messages anywhere
//! or drop them entirely with [`NoopSink`].

use tracing::Level;

/// Receives `(level, message)` pairs from the enumerator.
///
/// # Thread Safety
///
/// Sinks must be `Send + Sync` so an enumerator can be shared across threads.
pub trait LogSink: Send + Sync {
    /// Records a single message at the given level.
    fn log(&self, level: Level, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Forwards messages to the `tracing` macros at the requested level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::TRACE => tracing::trace!("{message}"),
            Level::DEBUG => tracing::debug!("{message}"),
            Level::INFO => tracing::info!("{message}"),
            Level::WARN => tracing::warn!("{message}"),
            _ => tracing::error!("{message}"),
        }
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, level: Level, message: &str) {
        (*self).log(level, message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn log(&self, level: Level, message: &str) {
        self.as_ref().log(level, message);
    }
}

/// Which diagnostics the enumerator emits, and at what level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Level for per-interface include/exclude decisions.
    pub decision_level: Level,
    /// Emit a warning when the OS supplies no interface list.
    pub log_warning: bool,
    /// Emit an error when the OS call fails.
    pub log_error: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            decision_level: Level::TRACE,
            log_warning: true,
            log_error: true,
        }
    }
}

impl LogOptions {
    /// Sets the decision level (builder pattern).
    #[must_use]
    pub const fn with_decision_level(mut self, level: Level) -> Self {
        self.decision_level = level;
        self
    }

    /// Enables or disables the "no interfaces" warning.
    #[must_use]
    pub const fn with_warning(mut self, enabled: bool) -> Self {
        self.log_warning = enabled;
        self
    }

    /// Enables or disables the fetch-failure error.
    #[must_use]
    pub const fn with_error(mut self, enabled: bool) -> Self {
        self.log_error = enabled;
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use tracing::Level;

    use super::LogSink;

    /// Sink that keeps every message for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn records(&self) -> Vec<(Level, String)> {
            self.records.lock().unwrap().clone()
        }

        pub fn messages(&self) -> Vec<String> {
            self.records().into_iter().map(|(_, msg)| msg).collect()
        }

        pub fn count_at(&self, level: Level) -> usize {
            self.records().iter().filter(|(l, _)| *l == level).count()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: Level, message: &str) {
            self.records
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }
}
