//! Correlation-bound loggers handed to pipeline components.
//!
//! # Design
//! - A [`LogSink`] accepts `(level, message, correlation)` triples; components never reach for a
//!   global logger registry.
//! - A [`GroupLogger`] binds a sink to one correlation identifier so every line emitted for a
//!   logical operation (one document's ingestion, say) can be joined later.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use tracing::Level;
use uuid::Uuid;

/// Opaque identifier grouping the log lines of one logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier supplied by the caller.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CorrelationId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

/// Destination for leveled log lines.
pub trait LogSink: Send + Sync {
    /// Record a single line at `level`, tagged with `correlation` when present.
    fn emit(&self, level: Level, message: &str, correlation: Option<&CorrelationId>);
}

/// Sink that forwards every line to the global `tracing` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, message: &str, correlation: Option<&CorrelationId>) {
        let group = correlation.map(tracing::field::display);
        match level {
            Level::ERROR => tracing::error!(group, "{message}"),
            Level::WARN => tracing::warn!(group, "{message}"),
            Level::INFO => tracing::info!(group, "{message}"),
            Level::DEBUG => tracing::debug!(group, "{message}"),
            _ => tracing::trace!(group, "{message}"),
        }
    }
}

/// Logger bound to a sink and, optionally, a correlation identifier.
#[derive(Clone)]
pub struct GroupLogger {
    sink: Arc<dyn LogSink>,
    group: Option<CorrelationId>,
}

impl GroupLogger {
    /// Bind `sink` to a freshly minted correlation identifier.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            group: Some(CorrelationId::new()),
        }
    }

    /// Bind `sink` without any correlation identifier.
    #[must_use]
    pub fn ungrouped(sink: Arc<dyn LogSink>) -> Self {
        Self { sink, group: None }
    }

    /// Logger writing to the global `tracing` dispatcher under a fresh group.
    #[must_use]
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    /// Replace the bound identifier with one supplied by the caller.
    #[must_use]
    pub const fn with_group(mut self, group: CorrelationId) -> Self {
        self.group = Some(group);
        self
    }

    /// Start a new group; subsequent lines carry the returned identifier.
    pub fn renew_group(&mut self) -> CorrelationId {
        let group = CorrelationId::new();
        self.group = Some(group);
        group
    }

    /// Identifier currently attached to emitted lines.
    #[must_use]
    pub const fn group(&self) -> Option<CorrelationId> {
        self.group
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: Level, message: &str) {
        self.sink.emit(level, message, self.group.as_ref());
    }

    /// Emit at debug level.
    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    /// Emit at info level.
    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    /// Emit at warning level.
    pub fn warning(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    /// Emit at error level.
    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

impl fmt::Debug for GroupLogger {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GroupLogger")
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
