//! Core SimpleScript compiler types.
//!
//! This crate provides the foundational types shared across the compiler
//! components: error representation and source location tracking.
//!
//! # Overview
//!
//! - [`ScriptError`] - Compile errors with kind, message and position
//! - [`ErrorKind`] - Types of compile errors
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, ScriptError};
//!
//! let error = ScriptError {
//!     kind: ErrorKind::SyntaxError,
//!     message: "unexpected 'bar'".to_string(),
//!     position: None,
//! };
//!
//! assert_eq!(error.message, "unexpected 'bar'");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, ScriptError};
pub use source::SourcePosition;
