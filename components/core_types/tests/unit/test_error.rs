//! Unit tests for compile error types

use core_types::{ErrorKind, ScriptError, SourcePosition};

fn sample_position() -> SourcePosition {
    SourcePosition {
        line: 2,
        column: 5,
        offset: 12,
    }
}

#[test]
fn test_error_kinds_are_distinct() {
    assert_ne!(ErrorKind::LexicalError, ErrorKind::SyntaxError);
    assert_ne!(ErrorKind::SyntaxError, ErrorKind::CodegenError);
    assert_ne!(ErrorKind::LexicalError, ErrorKind::CodegenError);
}

#[test]
fn test_error_carries_message() {
    let error = ScriptError {
        kind: ErrorKind::SyntaxError,
        message: "expected 'end'".to_string(),
        position: None,
    };

    assert_eq!(error.message, "expected 'end'");
    assert_eq!(error.kind, ErrorKind::SyntaxError);
}

#[test]
fn test_error_display_includes_position() {
    let error = ScriptError {
        kind: ErrorKind::LexicalError,
        message: "unclosed string".to_string(),
        position: Some(sample_position()),
    };

    assert_eq!(error.to_string(), "unclosed string at line 2, column 5");
}

#[test]
fn test_error_is_std_error() {
    let error = ScriptError {
        kind: ErrorKind::CodegenError,
        message: "string literal contains both quote characters".to_string(),
        position: None,
    };

    let dynamic: &dyn std::error::Error = &error;
    assert!(dynamic.source().is_none());
}
