//! Log sink that keeps every emitted line for later assertions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use docket_telemetry::{CorrelationId, LogSink};
use tracing::Level;

/// A single line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level the line was emitted at.
    pub level: Level,
    /// Message text.
    pub message: String,
    /// Correlation identifier attached by the logger, if any.
    pub group: Option<CorrelationId>,
}

/// In-memory [`LogSink`] used by tests in place of the tracing sink.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record emitted so far, in order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Message text of every record emitted so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, level: Level, message: &str, correlation: Option<&CorrelationId>) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
            group: correlation.copied(),
        });
    }
}
