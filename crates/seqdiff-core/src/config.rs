//! Engine configuration and per-request comparison options.
//!
//! `EngineConfig` is loaded once (defaults, optionally overlaid by a TOML
//! file) and shared read-only by every comparison. `CompareOptions` travel
//! with each request.

use crate::diff::model::DiffMode;
use crate::diff::myers::{max_depth_within, trace_bytes};
use crate::errors::{Result, SeqDiffError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default per-side element cap enforced at the comparison boundary.
pub const DEFAULT_MAX_ELEMENTS: usize = 50_000;

/// Default trace memory budget (256 MiB), which admits edit distances up to
/// 8189 whatever the input lengths.
pub const DEFAULT_MAX_TRACE_BYTES: usize = 256 * 1024 * 1024;

/// Boundary configuration.
///
/// ```toml
/// max_elements = 20000
/// max_trace_bytes = 67108864
/// default_mode = "words"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Largest element count accepted on either side of a comparison
    pub max_elements: usize,
    /// Memory the forward-pass trace may use; bounds the edit distance
    pub max_trace_bytes: usize,
    /// Mode used when a request does not name one
    pub default_mode: DiffMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_trace_bytes: DEFAULT_MAX_TRACE_BYTES,
            default_mode: DiffMode::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the document is not valid TOML, names an unknown
    ///   key, or fails [`EngineConfig::validate`]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// - `Io` — the file cannot be read
    /// - `InvalidConfig` — see [`EngineConfig::from_toml_str`]
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SeqDiffError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — `max_elements` is zero, or `max_trace_bytes` is
    ///   too small for even an identical-input search
    pub fn validate(&self) -> Result<()> {
        if self.max_elements == 0 {
            return Err(SeqDiffError::InvalidConfig {
                reason: "max_elements must be greater than zero".to_string(),
            });
        }
        self.max_edit_depth().map(|_| ())
    }

    /// Largest edit distance whose trace fits in `max_trace_bytes`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the budget is below the depth-0 trace size
    pub fn max_edit_depth(&self) -> Result<usize> {
        max_depth_within(self.max_trace_bytes).ok_or_else(|| SeqDiffError::InvalidConfig {
            reason: format!(
                "max_trace_bytes must be at least {} (got {})",
                trace_bytes(0),
                self.max_trace_bytes
            ),
        })
    }

    /// Options for a request that only overrides the mode.
    pub fn options(&self, mode: Option<DiffMode>) -> CompareOptions {
        CompareOptions {
            mode: mode.unwrap_or(self.default_mode),
            ..CompareOptions::default()
        }
    }
}

/// Per-request comparison options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    pub mode: DiffMode,
    /// Lowercase both texts before tokenizing
    pub ignore_case: bool,
    /// Collapse whitespace runs inside each line and trim lines
    pub ignore_whitespace: bool,
}

impl CompareOptions {
    pub fn new(mode: DiffMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }
}
