//! Centralized error handling for the edit buffer and its collaborators
//! Defines the error taxonomy, severity levels, and error codes

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Standard error - the call was rejected but the editor can continue
    Error,
    /// Critical error - an internal invariant failed; indicates a bug
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error, matching the taxonomy the core is specified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `offset`/`len` falls outside `[0, total_size()]` for the call being made.
    InvalidArgument,
    /// Allocation failed while growing the block list or a patch block.
    ResourceExhaustion,
    /// An internal invariant did not hold (arithmetic imbalance across a split).
    PreconditionViolation,
    /// File system or terminal I/O failure, surfaced from outside the core.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "InvalidArgument"),
            Self::ResourceExhaustion => write!(f, "ResourceExhaustion"),
            Self::PreconditionViolation => write!(f, "PreconditionViolation"),
            Self::Io => write!(f, "Io"),
        }
    }
}

/// A structured error returned by the edit buffer or a thin collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g. "E_OFFSET_OOB")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl EditError {
    /// Create a new standard error (severity: Error)
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (severity: Critical)
    pub fn critical(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the most common rejection: an offset/len outside bounds.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, crate::constants::errors::OFFSET_OOB, message)
    }

    /// Shorthand for a terminal/file I/O failure reported as plain text by
    /// the collaborator that hit it (a `crossterm` call, for instance,
    /// reports errors as `Display`, not `std::io::Error`).
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, crate::constants::errors::IO, message)
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditError {}

impl From<std::io::Error> for EditError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, "E_IO", err.to_string())
    }
}

/// Result alias for edit-buffer operations.
pub type Result<T> = std::result::Result<T, EditError>;
