//! Abstract Syntax Tree node definitions
//!
//! The tree is immutable once constructed and owned by a single compile
//! invocation. Rendering and declaration collection live in
//! [`crate::codegen`] and [`crate::context`], so every node kind is
//! handled by an exhaustive match rather than per-node behavior.

/// SimpleScript expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Bare name reference
    Name {
        /// Referenced name
        name: String,
    },

    /// Qualified name (`base.field`)
    QualifiedName {
        /// Expression being qualified
        base: Box<Expression>,
        /// Field name; always originates from a bare name token
        field: String,
    },

    /// Indexed access (`base[index]`)
    Indexed {
        /// Expression being indexed
        base: Box<Expression>,
        /// Index expression
        index: Box<Expression>,
    },

    /// Arithmetic negation (`-inner`)
    Negate {
        /// Negated expression
        inner: Box<Expression>,
    },

    /// Parenthesized sub-expression
    Parenthesis {
        /// Inner expression
        inner: Box<Expression>,
    },

    /// Binary operation; every operator binds with equal,
    /// left-associative strength - there are no precedence levels
    Binary {
        /// Left operand
        left: Box<Expression>,
        /// Operator text, passed through to the output unchanged
        operator: String,
        /// Right operand
        right: Box<Expression>,
    },

    /// Numeric literal, kept exactly as written
    Number {
        /// Literal text
        literal: String,
    },

    /// String literal contents, quotes removed
    String {
        /// Literal contents
        value: String,
    },

    /// Call with ordered arguments
    Call {
        /// Called expression
        target: Box<Expression>,
        /// Argument expressions, in order
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// True for the forms that may legally appear as an assignment
    /// target: bare names, qualified names and indexed accesses.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expression::Name { .. } | Expression::QualifiedName { .. } | Expression::Indexed { .. }
        )
    }
}

/// SimpleScript commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Expression evaluated for its effect
    Expression {
        /// The expression
        expression: Expression,
    },

    /// Assignment to an assignable target
    Assignment {
        /// Assignment target
        target: Expression,
        /// Assignment operator text (`=`, `+=`, ...)
        operator: String,
        /// Assigned value
        value: Expression,
    },

    /// Conditional command
    If {
        /// Condition
        condition: Expression,
        /// Commands run when the condition holds
        then_branch: Box<Command>,
        /// Commands run otherwise
        else_branch: Option<Box<Command>>,
    },

    /// While loop
    While {
        /// Loop condition
        condition: Expression,
        /// Loop body
        body: Box<Command>,
    },

    /// For-in loop
    For {
        /// Loop variable name
        variable: String,
        /// Iterated expression
        iterable: Expression,
        /// Loop body
        body: Box<Command>,
    },

    /// Function declaration
    Function {
        /// Function name, or `None` for an anonymous function
        name: Option<String>,
        /// Parameter names, in order
        parameters: Vec<String>,
        /// Function body
        body: Box<Command>,
    },

    /// Return from the enclosing function
    Return {
        /// Returned value, if any
        value: Option<Expression>,
    },

    /// Break out of the enclosing loop
    Break,

    /// Continue the enclosing loop
    Continue,

    /// Ordered command sequence
    Composite {
        /// The commands, in order
        commands: Vec<Command>,
    },
}

impl Command {
    /// Wrap commands into a sequence. A single command is returned
    /// unwrapped, so a `Composite` never holds exactly one entry; the
    /// empty case only occurs for an empty program or suite body.
    pub fn sequence(mut commands: Vec<Command>) -> Command {
        if commands.len() == 1 {
            commands.remove(0)
        } else {
            Command::Composite { commands }
        }
    }
}
