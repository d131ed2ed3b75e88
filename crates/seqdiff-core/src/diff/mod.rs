//! Sequence diff engine.
//!
//! Turns two element sequences into a run-length merged edit script with
//! similarity statistics.
//!
//! ## Entry points
//!
//! ```
//! use seqdiff_core::diff::{diff_sequences, render_summary, DiffMode};
//!
//! let a = ["Hello World", "This is line 2", "Goodbye"];
//! let b = ["Hello World", "This is line two", "Goodbye", "New line"];
//! let result = diff_sequences(&a, &b, DiffMode::Lines);
//! assert_eq!(result.stats.similarity, 40.0);
//! println!("{}", render_summary(&result));
//! ```
//!
//! ## Pipeline
//!
//! 1. [`myers::find_edit_script`] — forward O(ND) search, records a trace
//! 2. [`backtrack::backtrack`] — replays the trace into elementary ops
//! 3. [`runs::merge_runs`] — merges adjacent same-kind ops
//! 4. [`stats::compute_stats`] — counts and similarity
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical runs and stats.
//! - **Minimality**: the number of removed plus added elements equals the
//!   edit distance of the forward pass.
//! - **Totality**: the pipeline never fails; size limits and the trace
//!   memory budget are enforced only by [`engine::compare_texts`].

pub mod backtrack;
pub mod engine;
pub mod human_summary;
pub mod model;
pub mod myers;
pub mod runs;
pub mod stats;

pub use engine::{compare_texts, compare_texts_with_context, diff_sequences, edit_script};
pub use human_summary::render_summary;
pub use model::{DiffMode, DiffResult, DiffRun, DiffStats, ElementaryOp, RunKind};
