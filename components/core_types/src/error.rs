//! Compile error types.
//!
//! This module provides the error type shared by all stages of the
//! compiler pipeline. Every error is terminal for the compile call that
//! raised it; no recovery or multi-error reporting is attempted.

use crate::SourcePosition;
use std::fmt;

/// The kind of compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lexical error (e.g. an unterminated string literal)
    LexicalError,
    /// Grammar violation found while parsing
    SyntaxError,
    /// Error raised while emitting target text
    CodegenError,
}

/// A compile error with message and optional source position.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScriptError};
///
/// let error = ScriptError {
///     kind: ErrorKind::LexicalError,
///     message: "unclosed string".to_string(),
///     position: None,
/// };
///
/// assert!(matches!(error.kind, ErrorKind::LexicalError));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub position: Option<SourcePosition>,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(
                f,
                "{} at line {}, column {}",
                self.message, position.line, position.column
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ScriptError {}
