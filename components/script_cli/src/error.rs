//! Error types for the CLI

use core_types::ScriptError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Compilation error
    #[error("compile error: {0}")]
    CompileError(#[from] ScriptError),

    /// File I/O error
    #[error("file error: {0}")]
    IoError(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    ReplError(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
