//! SimpleScript CLI Library
//!
//! Provides the compile session and supporting modules for the
//! SimpleScript command line compiler.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod session;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use session::Session;
