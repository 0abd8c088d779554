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

//! Captured execution of external conversion and OCR tools.
//!
//! Layout: `invocation.rs` (argv + environment), `options.rs` (logging/check switches),
//! `output.rs` (captured result and line decoding), `runner.rs` (blocking execution), `error.rs`.

pub mod error;
pub mod invocation;
pub mod options;
pub mod output;
pub mod runner;

pub use error::{ProcessError, RunResult};
pub use invocation::ProcessInvocation;
pub use options::CaptureOptions;
pub use output::{ProcessResult, parse_output_lines};
pub use runner::run_process_with_capture;
