//! Compile driver: parse, hoist, emit
//!
//! Each call owns its own lexer, parser, tree and context, so compiling
//! independent inputs from several threads needs no coordination.

use crate::codegen::CodeGenerator;
use crate::context::DeclarationContext;
use crate::parser::Parser;
use core_types::ScriptError;

/// Embedder-supplied configuration for a compile call
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Names that already exist in the target environment; never hoisted
    pub globals: Vec<String>,
    /// Builtin names provided by the host (e.g. the output function);
    /// never hoisted
    pub externals: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            globals: Vec::new(),
            externals: vec!["print".to_string()],
        }
    }
}

/// Compile SimpleScript source to JavaScript text with default options
pub fn compile(source: &str) -> Result<String, ScriptError> {
    compile_with_options(source, &CompileOptions::default())
}

/// Compile SimpleScript source to JavaScript text.
///
/// The hoisted declaration of every implicitly declared local name, if
/// any, precedes the rendered commands, separated by one space.
pub fn compile_with_options(
    source: &str,
    options: &CompileOptions,
) -> Result<String, ScriptError> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program()?;

    let mut context = DeclarationContext::with_seeds(&options.globals, &options.externals);
    context.collect(&program);

    let declarations = context.compile_locals();
    let code = CodeGenerator::new().generate(&program)?;

    if declarations.is_empty() {
        return Ok(code);
    }

    Ok(format!("{} {}", declarations, code))
}
