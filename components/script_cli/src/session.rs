//! Compile session orchestration
//!
//! The Session struct coordinates the compiler components for the CLI
//! and REPL: parser for the tree, declaration context for hoisting,
//! code generator for the emitted JavaScript.

use crate::error::CliResult;
use compiler::{CodeGenerator, CompileOptions, DeclarationContext, Parser};

/// Coordinates compilation of SimpleScript sources for the CLI
pub struct Session {
    /// Hoisting configuration handed to every compile call
    options: CompileOptions,
    /// Whether to print the AST before emitting code
    print_ast: bool,
}

impl Session {
    /// Create a new session with default options
    ///
    /// # Example
    /// ```
    /// use script_cli::Session;
    ///
    /// let session = Session::new();
    /// let code = session.compile_source("a = 1").unwrap();
    /// assert_eq!(code, "var a; a = 1;");
    /// ```
    pub fn new() -> Self {
        Self {
            options: CompileOptions::default(),
            print_ast: false,
        }
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Compile a SimpleScript file to JavaScript text
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or compilation fails
    pub fn compile_file(&self, path: &str) -> CliResult<String> {
        let source = std::fs::read_to_string(path)?;

        self.compile_source(&source)
    }

    /// Compile SimpleScript source text to JavaScript text
    ///
    /// # Errors
    /// Returns `CliError` if compilation fails
    pub fn compile_source(&self, source: &str) -> CliResult<String> {
        let mut parser = Parser::new(source);
        let program = parser.parse_program()?;

        if self.print_ast {
            println!("AST: {:#?}", program);
        }

        let mut context =
            DeclarationContext::with_seeds(&self.options.globals, &self.options.externals);
        context.collect(&program);

        let declarations = context.compile_locals();
        let code = CodeGenerator::new().generate(&program)?;

        if declarations.is_empty() {
            return Ok(code);
        }

        Ok(format!("{} {}", declarations, code))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    #[test]
    fn test_compile_source_matches_library_pipeline() {
        let session = Session::new();
        let source = "if a\n print(a)\n end";
        assert_eq!(
            session.compile_source(source).unwrap(),
            compiler::compile(source).unwrap()
        );
    }

    #[test]
    fn test_compile_source_reports_errors() {
        let session = Session::new();
        let error = session
            .compile_source("foo bar")
            .expect_err("expected compile failure");
        assert!(matches!(error, CliError::CompileError(_)));
        assert_eq!(error.to_string(), "compile error: unexpected 'bar'");
    }

    #[test]
    fn test_compile_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "greeting = 'hello'").expect("write source");
        writeln!(file, "print(greeting)").expect("write source");

        let session = Session::new();
        let code = session
            .compile_file(file.path().to_str().expect("temp path"))
            .expect("compile failed");

        assert_eq!(code, "var greeting; greeting = 'hello'; print(greeting);");
    }

    #[test]
    fn test_compile_file_missing() {
        let session = Session::new();
        let error = session
            .compile_file("no-such-file.ss")
            .expect_err("expected io failure");
        assert!(matches!(error, CliError::IoError(_)));
    }
}
