#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

//! Telemetry primitives shared across the docket workspace.
//!
//! Layout: `init.rs` (subscriber installation and logging config), `context.rs`
//! (correlation-bound loggers handed to pipeline components), `error.rs`.

pub mod context;
pub mod error;
pub mod init;

pub use context::{CorrelationId, GroupLogger, LogSink, TracingSink};
pub use error::{Result, TelemetryError};
pub use init::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_ENV, LOG_LEVEL_ENV, LogFormat, LoggingConfig, init_logging,
};
