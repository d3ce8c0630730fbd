//! Recursive descent parser for SimpleScript
//!
//! One token of lookahead is realized through the lexer's pushback
//! stack. Keywords are recognized structurally only: `if`, `while`,
//! `for`, `function`, `return`, `break` and `continue` dispatch commands,
//! `end`, `else` and `in` delimit them; anywhere else the same words
//! parse as ordinary names.

use crate::ast::{Command, Expression};
use crate::error::{expected_token, name_expected, unexpected_end, unexpected_token};
use crate::lexer::{Lexer, Token, TokenKind};
use core_types::ScriptError;

/// SimpleScript parser
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    /// Create a new parser for the given source text
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    /// Parse the whole program into a single command tree.
    ///
    /// Input that cannot start a command is rejected; nothing is ever
    /// silently skipped.
    pub fn parse_program(&mut self) -> Result<Command, ScriptError> {
        let mut commands = Vec::new();

        while let Some(command) = self.parse_command()? {
            commands.push(command);
        }

        Ok(Command::sequence(commands))
    }

    /// Parse one command followed by its line terminator, or `None` at
    /// end of input
    pub fn parse_command(&mut self) -> Result<Option<Command>, ScriptError> {
        self.skip_newlines()?;

        let command = match self.parse_simple_command()? {
            Some(command) => command,
            None => {
                return match self.lexer.next_token()? {
                    Some(token) => Err(self.unexpected(&token)),
                    None => Ok(None),
                };
            }
        };

        self.parse_end_of_command()?;

        Ok(Some(command))
    }

    /// Parse a single expression, or `None` when the next token cannot
    /// start one
    pub fn parse_expression(&mut self) -> Result<Option<Expression>, ScriptError> {
        let mut expression = match self.parse_simple_expression()? {
            Some(expression) => expression,
            None => return Ok(None),
        };

        // a flat left-associative chain: no precedence levels
        while let Some(token) = self.lexer.next_token()? {
            if token.kind != TokenKind::Operator {
                self.lexer.push_token(token);
                break;
            }

            let right = self.require_simple_expression()?;
            expression = Expression::Binary {
                left: Box::new(expression),
                operator: token.value,
                right: Box::new(right),
            };
        }

        Ok(Some(expression))
    }

    fn parse_simple_command(&mut self) -> Result<Option<Command>, ScriptError> {
        let token = match self.lexer.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };

        if token.kind == TokenKind::Name {
            match token.value.as_str() {
                "if" => return self.parse_if().map(Some),
                "while" => return self.parse_while().map(Some),
                "for" => return self.parse_for().map(Some),
                "function" => return self.parse_function().map(Some),
                "return" => return self.parse_return().map(Some),
                "break" => return Ok(Some(Command::Break)),
                "continue" => return Ok(Some(Command::Continue)),
                _ => {}
            }
        }

        self.lexer.push_token(token);

        let expression = match self.parse_expression()? {
            Some(expression) => expression,
            None => return Ok(None),
        };

        if expression.is_assignable() {
            if let Some(operator) = self.try_parse_assignment()? {
                let value = self.require_expression()?;
                return Ok(Some(Command::Assignment {
                    target: expression,
                    operator,
                    value,
                }));
            }
        }

        Ok(Some(Command::Expression { expression }))
    }

    fn parse_if(&mut self) -> Result<Command, ScriptError> {
        let condition = self.require_expression()?;
        let then_branch = Box::new(self.parse_suite(&["else"])?);

        let else_branch = if self.try_parse_name("else")? {
            Some(Box::new(self.parse_suite(&[])?))
        } else {
            None
        };

        Ok(Command::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<Command, ScriptError> {
        let condition = self.require_expression()?;
        let body = Box::new(self.parse_suite(&[])?);

        Ok(Command::While { condition, body })
    }

    fn parse_for(&mut self) -> Result<Command, ScriptError> {
        let variable = self.parse_name()?;
        self.parse_keyword("in")?;
        let iterable = self.require_expression()?;
        let body = Box::new(self.parse_suite(&[])?);

        Ok(Command::For {
            variable,
            iterable,
            body,
        })
    }

    fn parse_function(&mut self) -> Result<Command, ScriptError> {
        let name = self.try_parse_any_name()?;
        self.parse_separator("(")?;
        let parameters = self.parse_name_list()?;
        self.parse_separator(")")?;
        let body = Box::new(self.parse_suite(&[])?);

        Ok(Command::Function {
            name,
            parameters,
            body,
        })
    }

    fn parse_return(&mut self) -> Result<Command, ScriptError> {
        match self.lexer.next_token()? {
            None => Ok(Command::Return { value: None }),
            Some(token) if token.kind == TokenKind::NewLine => {
                self.lexer.push_token(token);
                Ok(Command::Return { value: None })
            }
            Some(token) => {
                self.lexer.push_token(token);
                let value = self.require_expression()?;
                Ok(Command::Return { value: Some(value) })
            }
        }
    }

    /// Parse a suite: a single same-line command, or a newline-delimited
    /// block ending at `end` (consumed) or at one of the follower
    /// keywords (left for the caller).
    fn parse_suite(&mut self, followers: &[&str]) -> Result<Command, ScriptError> {
        if !self.try_parse_newline()? {
            return match self.parse_simple_command()? {
                Some(command) => Ok(command),
                None => Err(self.unexpected_here()?),
            };
        }

        let mut commands = Vec::new();

        loop {
            self.skip_newlines()?;

            let token = match self.lexer.next_token()? {
                Some(token) => token,
                None => {
                    return Err(expected_token(
                        "end",
                        Some(self.lexer.current_position()),
                    ))
                }
            };

            if token.kind == TokenKind::Name {
                if token.value == "end" {
                    break;
                }
                if followers.contains(&token.value.as_str()) {
                    self.lexer.push_token(token);
                    break;
                }
            }

            self.lexer.push_token(token);

            if let Some(command) = self.parse_command()? {
                commands.push(command);
            }
        }

        Ok(Command::sequence(commands))
    }

    fn parse_simple_expression(&mut self) -> Result<Option<Expression>, ScriptError> {
        let mut expression = match self.parse_simple_term()? {
            Some(expression) => expression,
            None => return Ok(None),
        };

        while let Some(token) = self.lexer.next_token()? {
            if token.is_separator(".") {
                let field = self.parse_name()?;
                expression = Expression::QualifiedName {
                    base: Box::new(expression),
                    field,
                };
            } else if token.is_separator("(") {
                let arguments = self.parse_expression_list()?;
                self.parse_separator(")")?;

                // a call ends the postfix chain
                return Ok(Some(Expression::Call {
                    target: Box::new(expression),
                    arguments,
                }));
            } else if token.is_separator("[") {
                let index = self.require_expression()?;
                self.parse_separator("]")?;

                // indexing ends the postfix chain
                return Ok(Some(Expression::Indexed {
                    base: Box::new(expression),
                    index: Box::new(index),
                }));
            } else {
                self.lexer.push_token(token);
                break;
            }
        }

        Ok(Some(expression))
    }

    fn parse_simple_term(&mut self) -> Result<Option<Expression>, ScriptError> {
        let token = match self.lexer.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };

        if token.kind == TokenKind::Operator {
            if token.value == "-" {
                let inner = self.require_simple_term()?;
                return Ok(Some(Expression::Negate {
                    inner: Box::new(inner),
                }));
            }

            // unary plus is a no-op
            if token.value == "+" {
                return self.require_simple_term().map(Some);
            }
        }

        self.lexer.push_token(token);

        self.parse_term()
    }

    fn parse_term(&mut self) -> Result<Option<Expression>, ScriptError> {
        let token = match self.lexer.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };

        match token.kind {
            TokenKind::Integer | TokenKind::Real => Ok(Some(Expression::Number {
                literal: token.value,
            })),
            TokenKind::String => Ok(Some(Expression::String { value: token.value })),
            TokenKind::Name => Ok(Some(Expression::Name { name: token.value })),
            TokenKind::Separator if token.value == "(" => {
                let inner = self.require_expression()?;
                self.parse_separator(")")?;
                Ok(Some(Expression::Parenthesis {
                    inner: Box::new(inner),
                }))
            }
            _ => {
                self.lexer.push_token(token);
                Ok(None)
            }
        }
    }

    fn parse_expression_list(&mut self) -> Result<Vec<Expression>, ScriptError> {
        let mut expressions = Vec::new();

        while let Some(expression) = self.parse_expression()? {
            expressions.push(expression);

            if !self.try_parse_separator(",")? {
                break;
            }
        }

        Ok(expressions)
    }

    fn parse_name_list(&mut self) -> Result<Vec<String>, ScriptError> {
        let mut names = Vec::new();

        while let Some(name) = self.try_parse_any_name()? {
            names.push(name);

            if !self.try_parse_separator(",")? {
                break;
            }
        }

        Ok(names)
    }

    fn require_expression(&mut self) -> Result<Expression, ScriptError> {
        match self.parse_expression()? {
            Some(expression) => Ok(expression),
            None => Err(self.unexpected_here()?),
        }
    }

    fn require_simple_expression(&mut self) -> Result<Expression, ScriptError> {
        match self.parse_simple_expression()? {
            Some(expression) => Ok(expression),
            None => Err(self.unexpected_here()?),
        }
    }

    fn require_simple_term(&mut self) -> Result<Expression, ScriptError> {
        match self.parse_simple_term()? {
            Some(expression) => Ok(expression),
            None => Err(self.unexpected_here()?),
        }
    }

    fn parse_end_of_command(&mut self) -> Result<(), ScriptError> {
        match self.lexer.next_token()? {
            None => Ok(()),
            Some(token) if token.kind == TokenKind::NewLine => Ok(()),
            Some(token) => Err(self.unexpected(&token)),
        }
    }

    fn parse_separator(&mut self, value: &str) -> Result<(), ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.is_separator(value) => Ok(()),
            _ => Err(expected_token(value, Some(self.lexer.current_position()))),
        }
    }

    fn parse_keyword(&mut self, value: &str) -> Result<(), ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.is_name(value) => Ok(()),
            _ => Err(expected_token(value, Some(self.lexer.current_position()))),
        }
    }

    fn parse_name(&mut self) -> Result<String, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.kind == TokenKind::Name => Ok(token.value),
            _ => Err(name_expected(Some(self.lexer.current_position()))),
        }
    }

    fn try_parse_any_name(&mut self) -> Result<Option<String>, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.kind == TokenKind::Name => Ok(Some(token.value)),
            Some(token) => {
                self.lexer.push_token(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn try_parse_name(&mut self, value: &str) -> Result<bool, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.is_name(value) => Ok(true),
            Some(token) => {
                self.lexer.push_token(token);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn try_parse_separator(&mut self, value: &str) -> Result<bool, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.is_separator(value) => Ok(true),
            Some(token) => {
                self.lexer.push_token(token);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn try_parse_newline(&mut self) -> Result<bool, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.kind == TokenKind::NewLine => Ok(true),
            Some(token) => {
                self.lexer.push_token(token);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn try_parse_assignment(&mut self) -> Result<Option<String>, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) if token.kind == TokenKind::Assignment => Ok(Some(token.value)),
            Some(token) => {
                self.lexer.push_token(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Blank lines are no-ops between commands
    fn skip_newlines(&mut self) -> Result<(), ScriptError> {
        while let Some(token) = self.lexer.next_token()? {
            if token.kind != TokenKind::NewLine {
                self.lexer.push_token(token);
                break;
            }
        }

        Ok(())
    }

    fn unexpected(&self, token: &Token) -> ScriptError {
        unexpected_token(&token_text(token), Some(self.lexer.current_position()))
    }

    /// Build the error for a position where something was required but
    /// the next token (or end of input) cannot provide it. The offending
    /// token is consumed; the compile fails anyway.
    fn unexpected_here(&mut self) -> Result<ScriptError, ScriptError> {
        match self.lexer.next_token()? {
            Some(token) => Ok(self.unexpected(&token)),
            None => Ok(unexpected_end(Some(self.lexer.current_position()))),
        }
    }
}

/// Printable form of a token for error messages
fn token_text(token: &Token) -> String {
    match token.kind {
        TokenKind::NewLine => "newline".to_string(),
        _ => token.value.clone(),
    }
}
