//! CLI error types.

use std::fmt;
use std::io;

use gdbatlas::OpenError;

/// Errors that can surface from a CLI run.
#[derive(Debug)]
pub enum CliError {
    /// The container could not be opened.
    Open(OpenError),

    /// The inventory could not be serialized.
    Render(serde_json::Error),

    /// The output file could not be written.
    Output(String, io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Open(e) => write!(f, "{}", e),
            CliError::Render(e) => write!(f, "Failed to serialize inventory: {}", e),
            CliError::Output(path, e) => write!(f, "Failed to write {}: {}", path, e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Open(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Output(_, e) => Some(e),
        }
    }
}

impl From<OpenError> for CliError {
    fn from(e: OpenError) -> Self {
        CliError::Open(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Render(e)
    }
}
