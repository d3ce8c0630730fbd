//! Error construction helpers for the compiler pipeline

use core_types::{ErrorKind, ScriptError, SourcePosition};

/// Create a lexical error at a given position
pub fn lexical_error(message: impl Into<String>, position: Option<SourcePosition>) -> ScriptError {
    ScriptError {
        kind: ErrorKind::LexicalError,
        message: message.into(),
        position,
    }
}

/// Create a syntax error at a given position
pub fn syntax_error(message: impl Into<String>, position: Option<SourcePosition>) -> ScriptError {
    ScriptError {
        kind: ErrorKind::SyntaxError,
        message: message.into(),
        position,
    }
}

/// Create a code emission error
pub fn codegen_error(message: impl Into<String>) -> ScriptError {
    ScriptError {
        kind: ErrorKind::CodegenError,
        message: message.into(),
        position: None,
    }
}

/// Create an undefined-character lexical error
pub fn unexpected_character(ch: char, position: SourcePosition) -> ScriptError {
    lexical_error(format!("unexpected character '{}'", ch), Some(position))
}

/// Create an unexpected token error
pub fn unexpected_token(text: &str, position: Option<SourcePosition>) -> ScriptError {
    syntax_error(format!("unexpected '{}'", text), position)
}

/// Create a missing required token error
pub fn expected_token(text: &str, position: Option<SourcePosition>) -> ScriptError {
    syntax_error(format!("expected '{}'", text), position)
}

/// Create a missing name error (qualifier, loop variable, parameter)
pub fn name_expected(position: Option<SourcePosition>) -> ScriptError {
    syntax_error("name expected", position)
}

/// Create an unexpected end of input error
pub fn unexpected_end(position: Option<SourcePosition>) -> ScriptError {
    syntax_error("unexpected end of input", position)
}
