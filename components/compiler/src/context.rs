//! Declaration hoisting for compiled programs

use crate::ast::{Command, Expression};
use std::collections::HashSet;

/// Collects the local names a program implicitly declares.
///
/// Locals keep first-sighting order; the emitted declaration lists them
/// in that order. Globals and externals are pre-seeded by the embedder
/// and are never re-declared. A fresh context is created per compile
/// call, filled by one tree walk and consumed once.
#[derive(Debug, Clone, Default)]
pub struct DeclarationContext {
    locals: Vec<String>,
    globals: HashSet<String>,
    externals: HashSet<String>,
}

impl DeclarationContext {
    /// Create an empty context with no pre-seeded names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-seeded with global and external names
    pub fn with_seeds(globals: &[String], externals: &[String]) -> Self {
        Self {
            locals: Vec::new(),
            globals: globals.iter().cloned().collect(),
            externals: externals.iter().cloned().collect(),
        }
    }

    /// Register a sighted name unless it is already known
    pub fn declare(&mut self, name: &str) {
        if self.globals.contains(name) || self.externals.contains(name) {
            return;
        }

        if !self.locals.iter().any(|local| local == name) {
            self.locals.push(name.to_string());
        }
    }

    /// Names declared so far, in first-sighting order
    pub fn locals(&self) -> &[String] {
        &self.locals
    }

    /// Walk a command tree, registering every name it sights.
    ///
    /// The hoist is flat: function bodies share the program's name set,
    /// and neither function names nor parameter lists register (body
    /// references to parameters do).
    pub fn collect(&mut self, command: &Command) {
        match command {
            Command::Expression { expression } => self.collect_expression(expression),
            Command::Assignment { target, value, .. } => {
                self.collect_expression(target);
                self.collect_expression(value);
            }
            Command::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.collect_expression(condition);
                self.collect(then_branch);
                if let Some(else_branch) = else_branch {
                    self.collect(else_branch);
                }
            }
            Command::While { condition, body } => {
                self.collect_expression(condition);
                self.collect(body);
            }
            Command::For {
                variable,
                iterable,
                body,
            } => {
                self.declare(variable);
                self.collect_expression(iterable);
                self.collect(body);
            }
            Command::Function { body, .. } => self.collect(body),
            Command::Return { value } => {
                if let Some(value) = value {
                    self.collect_expression(value);
                }
            }
            Command::Break | Command::Continue => {}
            Command::Composite { commands } => {
                for command in commands {
                    self.collect(command);
                }
            }
        }
    }

    fn collect_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Name { name } => self.declare(name),
            // qualified fields are property names, not variables
            Expression::QualifiedName { base, .. } => self.collect_expression(base),
            Expression::Indexed { base, index } => {
                self.collect_expression(base);
                self.collect_expression(index);
            }
            Expression::Negate { inner } | Expression::Parenthesis { inner } => {
                self.collect_expression(inner)
            }
            Expression::Binary { left, right, .. } => {
                self.collect_expression(left);
                self.collect_expression(right);
            }
            Expression::Number { .. } | Expression::String { .. } => {}
            Expression::Call { target, arguments } => {
                self.collect_expression(target);
                for argument in arguments {
                    self.collect_expression(argument);
                }
            }
        }
    }

    /// Render the hoisted declaration, or nothing when no local was
    /// sighted
    pub fn compile_locals(&self) -> String {
        if self.locals.is_empty() {
            return String::new();
        }

        format!("var {};", self.locals.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn collect(source: &str) -> DeclarationContext {
        let program = Parser::new(source)
            .parse_program()
            .expect("parsing failed");
        let mut context = DeclarationContext::with_seeds(&[], &["print".to_string()]);
        context.collect(&program);
        context
    }

    #[test]
    fn test_declare_keeps_first_sighting_order() {
        let mut context = DeclarationContext::new();
        context.declare("b");
        context.declare("a");
        context.declare("b");
        assert_eq!(context.locals(), ["b", "a"]);
    }

    #[test]
    fn test_declare_skips_globals_and_externals() {
        let mut context =
            DeclarationContext::with_seeds(&["g".to_string()], &["print".to_string()]);
        context.declare("g");
        context.declare("print");
        context.declare("a");
        assert_eq!(context.locals(), ["a"]);
    }

    #[test]
    fn test_compile_locals_empty() {
        let context = DeclarationContext::new();
        assert_eq!(context.compile_locals(), "");
    }

    #[test]
    fn test_compile_locals_joins_names() {
        let mut context = DeclarationContext::new();
        context.declare("a");
        context.declare("b");
        assert_eq!(context.compile_locals(), "var a, b;");
    }

    #[test]
    fn test_bare_read_registers() {
        assert_eq!(collect("foo").locals(), ["foo"]);
    }

    #[test]
    fn test_assignment_registers_both_sides() {
        assert_eq!(collect("a = b").locals(), ["a", "b"]);
    }

    #[test]
    fn test_qualified_field_does_not_register() {
        assert_eq!(collect("foo.bar").locals(), ["foo"]);
    }

    #[test]
    fn test_index_expression_registers() {
        assert_eq!(collect("a[i]").locals(), ["a", "i"]);
    }

    #[test]
    fn test_externals_do_not_register() {
        assert_eq!(collect("print(x)").locals(), ["x"]);
    }

    #[test]
    fn test_loop_variable_registers() {
        assert_eq!(collect("for x in items\n x\n end").locals(), ["x", "items"]);
    }

    #[test]
    fn test_function_name_and_parameters_do_not_register() {
        assert_eq!(collect("function dup(x)\n return y\n end").locals(), ["y"]);
    }

    #[test]
    fn test_parameter_references_in_body_register() {
        assert_eq!(
            collect("function dup(x)\n return x + x\n end").locals(),
            ["x"]
        );
    }

    #[test]
    fn test_literals_do_not_register() {
        assert!(collect("1 + 'two'").locals().is_empty());
    }
}
