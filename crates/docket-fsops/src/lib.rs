//! Timestamp-preserving file copies for the document ingestion pipeline.
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

//! Layout: `path.rs` (canonical resolution), `timestamps.rs` (atime/mtime transfer),
//! `copy.rs` (content copy + timestamp reapplication), `error.rs`.
//!
//! Nothing here inspects file content beyond the byte copy itself, and nothing is
//! retried: every failure surfaces to the caller with the operation and path attached.
//! Concurrent writers to the same destination must be serialised by the caller.

pub mod copy;
pub mod error;
pub mod path;
pub mod timestamps;

pub use copy::copy_file_with_basic_stats;
pub use error::{FsOpsError, FsOpsResult};
pub use path::resolve_path;
pub use timestamps::{FileTimestamps, apply_timestamps, copy_basic_file_stats, read_timestamps};
