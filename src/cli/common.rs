//! Shared error and exit-code types for CLI command handlers.

use std::fmt;

/// Result alias used by all CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Rejected input (empty sentence, unsupported key, bad flag value).
    Validation = 2,
    /// Output could not be produced (serialization, stream errors).
    Io = 3,
    /// Internal invariant violation; indicates a defect, not bad input.
    Internal = 4,
}

/// Error raised by a CLI command handler, carrying its exit code.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// Input-validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Output/serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Internal consistency failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Internal,
            message: message.into(),
        }
    }

    /// The process exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
