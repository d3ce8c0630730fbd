//! JavaScript code generation from the AST

use crate::ast::{Command, Expression};
use crate::error::codegen_error;
use core_types::ScriptError;

/// Renders a command tree to JavaScript text.
///
/// Rendering is pure string composition, a direct structural mapping of
/// the tree; no name resolution happens here.
#[derive(Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    /// Create a new code generator
    pub fn new() -> Self {
        Self
    }

    /// Render a whole command tree
    pub fn generate(&self, command: &Command) -> Result<String, ScriptError> {
        self.emit_command(command)
    }

    fn emit_command(&self, command: &Command) -> Result<String, ScriptError> {
        match command {
            Command::Expression { expression } => {
                Ok(format!("{};", self.emit_expression(expression)?))
            }
            Command::Assignment {
                target,
                operator,
                value,
            } => Ok(format!(
                "{} {} {};",
                self.emit_expression(target)?,
                operator,
                self.emit_expression(value)?
            )),
            Command::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut code = format!(
                    "if ({}) {{ {} }}",
                    self.emit_expression(condition)?,
                    self.emit_command(then_branch)?
                );

                if let Some(else_branch) = else_branch {
                    code.push_str(" else { ");
                    code.push_str(&self.emit_command(else_branch)?);
                    code.push_str(" }");
                }

                Ok(code)
            }
            Command::While { condition, body } => Ok(format!(
                "while ({}) {{ {} }}",
                self.emit_expression(condition)?,
                self.emit_command(body)?
            )),
            Command::For {
                variable,
                iterable,
                body,
            } => Ok(format!(
                "for ({} in {}) {{ {} }}",
                variable,
                self.emit_expression(iterable)?,
                self.emit_command(body)?
            )),
            Command::Function {
                name,
                parameters,
                body,
            } => Ok(format!(
                "function {}({}) {{ {} }}",
                name.as_deref().unwrap_or(""),
                parameters.join(", "),
                self.emit_command(body)?
            )),
            Command::Return { value } => match value {
                Some(value) => Ok(format!("return {};", self.emit_expression(value)?)),
                None => Ok("return;".to_string()),
            },
            Command::Break => Ok("break;".to_string()),
            Command::Continue => Ok("continue;".to_string()),
            Command::Composite { commands } => {
                let mut parts = Vec::with_capacity(commands.len());
                for command in commands {
                    parts.push(self.emit_command(command)?);
                }
                Ok(parts.join(" "))
            }
        }
    }

    fn emit_expression(&self, expression: &Expression) -> Result<String, ScriptError> {
        match expression {
            Expression::Name { name } => Ok(name.clone()),
            Expression::QualifiedName { base, field } => {
                Ok(format!("{}.{}", self.emit_expression(base)?, field))
            }
            Expression::Indexed { base, index } => Ok(format!(
                "{}[{}]",
                self.emit_expression(base)?,
                self.emit_expression(index)?
            )),
            Expression::Negate { inner } => Ok(format!("-{}", self.emit_expression(inner)?)),
            Expression::Parenthesis { inner } => {
                Ok(format!("({})", self.emit_expression(inner)?))
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => Ok(format!(
                "{} {} {}",
                self.emit_expression(left)?,
                operator,
                self.emit_expression(right)?
            )),
            Expression::Number { literal } => Ok(literal.clone()),
            Expression::String { value } => self.emit_string(value),
            Expression::Call { target, arguments } => {
                let mut parts = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    parts.push(self.emit_expression(argument)?);
                }
                Ok(format!(
                    "{}({})",
                    self.emit_expression(target)?,
                    parts.join(", ")
                ))
            }
        }
    }

    /// Quote a string literal. Single quotes are preferred; double quotes
    /// are used when the value holds a single quote. A value holding both
    /// kinds has no quoted form and is rejected - the lexer cannot
    /// produce one, but the tree can be built directly.
    fn emit_string(&self, value: &str) -> Result<String, ScriptError> {
        let has_single = value.contains('\'');
        let has_double = value.contains('"');

        if !has_single {
            return Ok(format!("'{}'", value));
        }

        if !has_double {
            return Ok(format!("\"{}\"", value));
        }

        Err(codegen_error(
            "string literal contains both quote characters",
        ))
    }
}
