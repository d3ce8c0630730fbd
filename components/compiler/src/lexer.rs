//! SimpleScript Lexer - tokenizes source text into tokens

use crate::error::{lexical_error, unexpected_character};
use core_types::{ScriptError, SourcePosition};

/// Single-character separators.
const SEPARATORS: &str = ".,()[]";

/// Operators. Two-character forms are matched before the one-character
/// fallback (maximal munch).
const OPERATORS: &[&str] = &["+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">="];

/// Assignment operators. Checked before operators when combining two
/// characters, so `+=` wins over `+`.
const ASSIGNMENTS: &[&str] = &["=", "+=", "-=", "*=", "/="];

/// Kinds of lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword text
    Name,
    /// Integer literal
    Integer,
    /// Real literal (digits, a dot, digits)
    Real,
    /// String literal contents, quotes removed
    String,
    /// Line break: `"\n"`, `"\r\n"` or `"\r"`
    NewLine,
    /// Single-character separator
    Separator,
    /// Arithmetic or comparison operator
    Operator,
    /// Assignment operator
    Assignment,
}

/// A token produced by the lexer: literal text plus its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Literal text of the token
    pub value: String,
    /// Classification of the token
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// True when the token is a name with the given text
    pub fn is_name(&self, value: &str) -> bool {
        self.kind == TokenKind::Name && self.value == value
    }

    /// True when the token is a separator with the given text
    pub fn is_separator(&self, value: &str) -> bool {
        self.kind == TokenKind::Separator && self.value == value
    }
}

/// Lexer for SimpleScript source text
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    /// Tokens returned by the parser, redelivered most-recently-pushed
    /// first. In practice the depth stays at one or two, but the stack
    /// does not assume it.
    pending: Vec<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source text
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            pending: Vec::new(),
        }
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, ScriptError> {
        if let Some(token) = self.pending.pop() {
            return Ok(Some(token));
        }

        self.skip_spaces();

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        if ch == '"' || ch == '\'' {
            return self.scan_string(ch).map(Some);
        }

        if ch == '\n' || ch == '\r' {
            return Ok(Some(self.scan_newline(ch)));
        }

        if is_symbol_start(ch) {
            return self.scan_symbol(ch).map(Some);
        }

        if SEPARATORS.contains(ch) {
            self.advance();
            return Ok(Some(Token::new(ch.to_string(), TokenKind::Separator)));
        }

        if is_name_start(ch) {
            return Ok(Some(self.scan_name()));
        }

        if ch.is_ascii_digit() {
            return Ok(Some(self.scan_number()));
        }

        Err(unexpected_character(ch, self.current_position()))
    }

    /// Return a token to the lexer; it is redelivered before any further
    /// scanning, most-recently-pushed first
    pub fn push_token(&mut self, token: Token) {
        self.pending.push(token);
    }

    /// Current scanning position, for error construction
    pub fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<Token, ScriptError> {
        let start = self.current_position();
        self.advance();

        // characters accumulate verbatim, no escape processing
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(ch) if ch == quote => return Ok(Token::new(value, TokenKind::String)),
                Some(ch) => value.push(ch),
                None => return Err(lexical_error("unclosed string", Some(start))),
            }
        }
    }

    fn scan_newline(&mut self, first: char) -> Token {
        self.advance();

        if first == '\r' {
            if self.peek() == Some('\n') {
                self.advance();
                return Token::new("\r\n", TokenKind::NewLine);
            }
            return Token::new("\r", TokenKind::NewLine);
        }

        Token::new("\n", TokenKind::NewLine)
    }

    fn scan_symbol(&mut self, first: char) -> Result<Token, ScriptError> {
        let start = self.current_position();
        self.advance();

        if let Some(second) = self.peek() {
            let mut combined = String::with_capacity(2);
            combined.push(first);
            combined.push(second);

            if ASSIGNMENTS.contains(&combined.as_str()) {
                self.advance();
                return Ok(Token::new(combined, TokenKind::Assignment));
            }

            if OPERATORS.contains(&combined.as_str()) {
                self.advance();
                return Ok(Token::new(combined, TokenKind::Operator));
            }
        }

        let single = first.to_string();

        if ASSIGNMENTS.contains(&single.as_str()) {
            return Ok(Token::new(single, TokenKind::Assignment));
        }

        if OPERATORS.contains(&single.as_str()) {
            return Ok(Token::new(single, TokenKind::Operator));
        }

        // '!' and friends only exist as part of a two-character form
        Err(unexpected_character(first, start))
    }

    fn scan_name(&mut self) -> Token {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if !is_name_char(ch) {
                break;
            }
            value.push(ch);
            self.advance();
        }

        Token::new(value, TokenKind::Name)
    }

    fn scan_number(&mut self) -> Token {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            value.push(ch);
            self.advance();
        }

        // a single dot followed by further digits extends the integer
        // into a real; a bare trailing dot stays a separator
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|ch| ch.is_ascii_digit()) {
            value.push('.');
            self.advance();

            while let Some(ch) = self.peek() {
                if !ch.is_ascii_digit() {
                    break;
                }
                value.push(ch);
                self.advance();
            }

            return Token::new(value, TokenKind::Real);
        }

        Token::new(value, TokenKind::Integer)
    }

    fn skip_spaces(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == '\r' || !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek_at(&self, distance: usize) -> Option<char> {
        self.chars.get(self.position + distance).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        // a lone '\r' terminates a line; '\r\n' counts once, on the '\n'
        if ch == '\n' || (ch == '\r' && self.peek() != Some('\n')) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

fn is_symbol_start(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>')
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
