use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that can cross a crate boundary is classified by one of
/// these kinds. Each kind maps to a stable error code usable in tests, logs
/// and CI annotations.
///
/// There is no kind for version-string anomalies: unparseable versions
/// degrade to opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Lockfile parsing
    /// Lockfile is not valid TOML or does not have the expected shape
    InvalidLockfile,
    /// A required lockfile key (e.g. `package`, `name`) is absent
    MissingField,

    // Integration/IO
    Io,
    Serialization,
    /// A spawned collaborator (git) could not be run
    ExternalService,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidLockfile => "ERR_INVALID_LOCKFILE",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, path, package name) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    package_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            package_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add filesystem path or git object context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add package name context
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
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

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the package name context, if any
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(name) = &self.package_name {
            write!(f, " (package: {})", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for lockfile reporting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LockDiffError {
    /// Output format selector is not one of the recognized values
    #[error("Unknown output format: {value} (expected `table` or `simple`)")]
    UnknownOutputFormat { value: String },

    /// Log format selector is not one of the recognized values
    #[error("Unknown log format: {value} (expected `pretty` or `json`)")]
    UnknownLogFormat { value: String },

    /// Lockfile document could not be parsed
    #[error("Malformed lockfile: {reason}")]
    MalformedLockfile { reason: String },

    /// A package entry has an empty name
    #[error("Package entry at index {index} has an empty name")]
    EmptyPackageName { index: usize },

    /// Serialization of the report failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LockDiffError> for ExError {
    fn from(err: LockDiffError) -> Self {
        match err {
            LockDiffError::UnknownOutputFormat { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_output_format")
                .with_message(err.to_string()),

            LockDiffError::UnknownLogFormat { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_log_format")
                .with_message(err.to_string()),

            LockDiffError::MalformedLockfile { .. } => ExError::new(ExErrorKind::InvalidLockfile)
                .with_op("parse_lockfile")
                .with_message(err.to_string()),

            LockDiffError::EmptyPackageName { .. } => ExError::new(ExErrorKind::MissingField)
                .with_op("parse_lockfile")
                .with_message(err.to_string()),

            LockDiffError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_message(err.to_string()),
        }
    }
}

/// Conversion from serde_json::Error to LockDiffError
impl From<serde_json::Error> for LockDiffError {
    fn from(err: serde_json::Error) -> Self {
        LockDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
