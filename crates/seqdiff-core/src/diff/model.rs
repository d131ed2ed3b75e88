//! Diff output types.
//!
//! Everything here is created fresh per comparison and never mutated after
//! construction. Serialized field names match the wire contract consumed by
//! CLI and service callers (`kind`, `value`, `count`, `totalChanges`, ...).

use crate::errors::SeqDiffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity at which two texts are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// One element per Unicode scalar value
    Chars,
    /// One element per whitespace-delimited word
    Words,
    /// One element per line
    #[default]
    Lines,
}

impl DiffMode {
    /// Separator used when merging the values of adjacent elements into a run.
    pub fn separator(self) -> &'static str {
        match self {
            DiffMode::Chars => "",
            DiffMode::Words => " ",
            DiffMode::Lines => "\n",
        }
    }

    /// Stable lowercase name (`chars`, `words`, `lines`).
    pub fn as_str(self) -> &'static str {
        match self {
            DiffMode::Chars => "chars",
            DiffMode::Words => "words",
            DiffMode::Lines => "lines",
        }
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffMode {
    type Err = SeqDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "char" | "characters" => Ok(DiffMode::Chars),
            "words" | "word" => Ok(DiffMode::Words),
            "lines" | "line" => Ok(DiffMode::Lines),
            _ => Err(SeqDiffError::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// One elementary edit, borrowing the element it refers to.
///
/// Produced in left-to-right traversal order by the backtracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementaryOp<'a, T> {
    /// Element present in both sequences
    Keep(&'a T),
    /// Element present only in the old sequence
    Delete(&'a T),
    /// Element present only in the new sequence
    Insert(&'a T),
}

impl<'a, T> ElementaryOp<'a, T> {
    /// The run kind this op contributes to.
    pub fn kind(&self) -> RunKind {
        match self {
            ElementaryOp::Keep(_) => RunKind::Kept,
            ElementaryOp::Delete(_) => RunKind::Removed,
            ElementaryOp::Insert(_) => RunKind::Added,
        }
    }

    /// The element carried by this op.
    pub fn element(&self) -> &'a T {
        match *self {
            ElementaryOp::Keep(e) | ElementaryOp::Delete(e) | ElementaryOp::Insert(e) => e,
        }
    }
}

/// Classification of a merged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Kept,
    Removed,
    Added,
}

impl RunKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RunKind::Kept => "kept",
            RunKind::Removed => "removed",
            RunKind::Added => "added",
        }
    }
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal group of same-kind elementary ops.
///
/// No two adjacent runs in a merged list share the same `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRun {
    pub kind: RunKind,
    /// Element values joined with the mode separator
    pub value: String,
    /// Number of elements merged into this run
    pub count: usize,
}

impl DiffRun {
    pub fn new(kind: RunKind, value: impl Into<String>, count: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            count,
        }
    }
}

/// Aggregate counts and similarity over a run list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
    /// `additions + deletions`
    pub total_changes: usize,
    /// Percentage in `[0, 100]`, rounded to two decimals
    pub similarity: f64,
}

/// The complete, serializable outcome of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub mode: DiffMode,
    pub runs: Vec<DiffRun>,
    pub stats: DiffStats,
    /// Length of the shortest edit script found by the forward pass
    pub edit_distance: usize,
}

impl DiffResult {
    /// True when both inputs were element-wise identical.
    pub fn is_identical(&self) -> bool {
        self.stats.total_changes == 0
    }
}
