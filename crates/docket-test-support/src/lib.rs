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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across docket suites.
//! Layout: fixtures.rs (temporary directories), recorder.rs (log sink that keeps every line).

pub mod fixtures;
pub mod recorder;

pub use recorder::{LogRecord, RecordingSink};
