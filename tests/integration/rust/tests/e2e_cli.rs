//! End-to-End CLI Integration Tests
//!
//! Tests the complete compiler through the script_cli Session API.
//! This is the highest level integration test - source file to final
//! JavaScript text.

use script_cli::{CliError, Session};
use std::io::Write;

/// Test: Inline source compiles to the library's output
#[test]
fn test_e2e_inline_source() {
    let session = Session::new();
    let code = session
        .compile_source("print('hello')")
        .expect("compile failed");

    assert_eq!(code, "print('hello');");
    assert_eq!(code, compiler::compile("print('hello')").unwrap());
}

/// Test: A script file compiles end to end
#[test]
fn test_e2e_script_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "greeting = 'hello'\nfor i in range\n print(greeting)\nend\n"
    )
    .expect("write source");

    let session = Session::new();
    let code = session
        .compile_file(file.path().to_str().expect("temp path"))
        .expect("compile failed");

    assert_eq!(
        code,
        "var greeting, i, range; greeting = 'hello'; for (i in range) { print(greeting); }"
    );
}

/// Test: A malformed file reports a compile error, not a panic
#[test]
fn test_e2e_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "foo bar\n").expect("write source");

    let session = Session::new();
    let error = session
        .compile_file(file.path().to_str().expect("temp path"))
        .expect_err("expected compile failure");

    match error {
        CliError::CompileError(e) => assert_eq!(e.message, "unexpected 'bar'"),
        other => panic!("expected compile error, got {:?}", other),
    }
}

/// Test: A missing file reports an I/O error
#[test]
fn test_e2e_missing_file() {
    let session = Session::new();
    let error = session
        .compile_file("does-not-exist.ss")
        .expect_err("expected io failure");

    assert!(matches!(error, CliError::IoError(_)));
}

/// Test: The compiled text of a file equals compiling its contents
#[test]
fn test_e2e_file_matches_inline() {
    let source = "a = 1\nb = a + 2\nprint(b)\n";

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", source).expect("write source");

    let session = Session::new();
    let from_file = session
        .compile_file(file.path().to_str().expect("temp path"))
        .expect("compile failed");
    let inline = session.compile_source(source).expect("compile failed");

    assert_eq!(from_file, inline);
}
