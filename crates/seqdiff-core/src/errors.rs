use seqdiff_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SeqDiffError
pub type Result<T> = std::result::Result<T, SeqDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a caller can observe maps to one kind with a stable code.
/// The diff algorithm itself never fails; all kinds originate at the
/// comparison boundary, the configuration layer, or I/O around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Boundary validation
    InvalidMode,
    InputTooLarge,
    EditBudgetExceeded,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidMode => "ERR_INVALID_MODE",
            ExErrorKind::InputTooLarge => "ERR_INPUT_TOO_LARGE",
            ExErrorKind::EditBudgetExceeded => "ERR_EDIT_BUDGET_EXCEEDED",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the
/// context needed to correlate a failure with its request.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the input side (`a` / `b`) the error refers to
    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the input side, if any
    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = &self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised around the diff engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqDiffError {
    /// One side of a comparison exceeds the configured element limit
    #[error("Input {side} has {len} elements, exceeding the limit of {limit}")]
    InputTooLarge {
        side: String,
        len: usize,
        limit: usize,
    },

    /// Unknown comparison mode tag
    #[error("Invalid diff mode: {mode} (expected chars, words or lines)")]
    InvalidMode { mode: String },

    /// The inputs differ by more edits than the trace budget can record
    #[error("Inputs differ by more than {max_depth} edits (trace budget {budget_bytes} bytes)")]
    EditBudgetExceeded {
        max_depth: usize,
        budget_bytes: usize,
    },

    /// Configuration could not be parsed or is out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Reading an input or config file failed
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    /// Rendering a result failed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<SeqDiffError> for ExError {
    fn from(err: SeqDiffError) -> Self {
        let message = err.to_string();
        match err {
            SeqDiffError::InputTooLarge { side, .. } => ExError::new(ExErrorKind::InputTooLarge)
                .with_side(side)
                .with_message(message),

            SeqDiffError::InvalidMode { .. } => {
                ExError::new(ExErrorKind::InvalidMode).with_message(message)
            }

            SeqDiffError::EditBudgetExceeded { .. } => {
                ExError::new(ExErrorKind::EditBudgetExceeded).with_message(message)
            }

            SeqDiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            SeqDiffError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            SeqDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for SeqDiffError {
    fn from(err: serde_json::Error) -> Self {
        SeqDiffError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SeqDiffError {
    fn from(err: toml::de::Error) -> Self {
        SeqDiffError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
