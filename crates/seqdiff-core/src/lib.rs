//! SeqDiff Core - deterministic sequence diffing
//!
//! This crate provides:
//! - The Myers shortest-edit-script engine over any `PartialEq` elements
//! - Run-length merging into kept / removed / added runs with similarity stats
//! - Text normalization and tokenization for chars, words and lines modes
//! - A size-limited comparison boundary with structured logging
//! - Engine configuration loadable from TOML

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod text;

pub use seqdiff_core_types as core_types;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use config::{CompareOptions, EngineConfig};
pub use diff::{
    compare_texts, compare_texts_with_context, diff_sequences, render_summary, DiffMode,
    DiffResult, DiffRun, DiffStats, RunKind,
};
pub use errors::{ExError, ExErrorKind, Result, SeqDiffError};
