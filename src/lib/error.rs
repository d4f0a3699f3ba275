//! Errors raised while producing long-term diagnostics

use std::io;
use thiserror::Error;

/// Errors that can abort a diagnostic run
///
/// Transport failures are carried verbatim so the caller sees exactly what the
/// underlying stream or connection reported.
#[derive(Error, Debug)]
pub enum DiagnosticError {
    /// Failure of the stream behind a file sink or its echo channel
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure reported by the database engine
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The calibrated parameter set could not be obtained
    #[error("cannot load parameters: {0}")]
    Parameters(String),

    /// The marginal damage computation failed
    #[error("marginal damage computation failed: {0}")]
    Model(String),
}

/// Result type for diagnostic operations
pub type Result<T> = std::result::Result<T, DiagnosticError>;
