use thiserror::Error;

/// Result type alias using LineageError
pub type Result<T> = std::result::Result<T, LineageError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Validation failures and degraded audit descriptions are data, not errors.
/// These kinds only classify the internal failures that the components
/// swallow (and log) and the ones the CLI surfaces to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Audit snapshots
    /// The snapshot the action needs is absent from the audit entry
    MissingSnapshot,
    /// A snapshot is not a JSON object of the expected shape
    MalformedSnapshot,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingSnapshot => "ERR_MISSING_SNAPSHOT",
            ExErrorKind::MalformedSnapshot => "ERR_MALFORMED_SNAPSHOT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_type: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_type: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add audit entity type context
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    /// Get the entity type context, if any
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_type) = &self.entity_type {
            write!(f, " (entity_type: {})", entity_type)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Which side of an audit entry a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSide {
    Old,
    New,
}

impl std::fmt::Display for SnapshotSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSide::Old => f.write_str("old"),
            SnapshotSide::New => f.write_str("new"),
        }
    }
}

/// Error taxonomy for Lineage internals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineageError {
    /// The action requires a snapshot that the entry does not carry
    #[error("{side} snapshot is missing")]
    SnapshotMissing { side: SnapshotSide },

    /// A snapshot could not be decoded into the entity's shape
    #[error("{side} snapshot is malformed: {reason}")]
    SnapshotMalformed { side: SnapshotSide, reason: String },

    /// Validator configuration is out of range or unparseable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Filesystem failure (CLI surfaces only)
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from LineageError to ExError
impl From<LineageError> for ExError {
    fn from(err: LineageError) -> Self {
        match err {
            LineageError::SnapshotMissing { side } => ExError::new(ExErrorKind::MissingSnapshot)
                .with_message(format!("{} snapshot is missing", side)),

            LineageError::SnapshotMalformed { side, reason } => {
                ExError::new(ExErrorKind::MalformedSnapshot)
                    .with_message(format!("{} snapshot is malformed: {}", side, reason))
            }

            LineageError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            LineageError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_message(format!("{}: {}", path, message)),

            LineageError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to LineageError
impl From<serde_json::Error> for LineageError {
    fn from(err: serde_json::Error) -> Self {
        LineageError::Serialization {
            message: err.to_string(),
        }
    }
}
