/// Error types for scanning and parsing.
/// Lexical problems are diagnostics and never stop the scan; a syntax error ends the parse.

use crate::token::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken(Token),
    UnexpectedEof,
}

impl ParseError {
    pub fn unexpected(token: Token) -> Self {
        let line = token.line;
        Self { kind: ParseErrorKind::UnexpectedToken(token), line }
    }

    pub fn eof(line: usize) -> Self {
        Self { kind: ParseErrorKind::UnexpectedEof, line }
    }

    /// The offending token, if the input did not simply run out.
    pub fn token(&self) -> Option<&Token> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken(token) => Some(token),
            ParseErrorKind::UnexpectedEof => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken(token) => {
                write!(f, "Syntax error at '{}' (line {})", token.value, self.line)
            }
            ParseErrorKind::UnexpectedEof => write!(f, "Syntax error at EOF"),
        }
    }
}

impl std::error::Error for ParseError {}

/// One illegal character skipped by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexDiagnostic {
    pub character: char,
    pub line: usize,
    pub offset: usize,
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal character '{}'", self.character.escape_default())
    }
}

/// Input rejected before scanning because it exceeds the configured limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTooLong {
    pub len: usize,
    pub limit: usize,
}

impl fmt::Display for InputTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input is {} bytes, limit is {}", self.len, self.limit)?;
        write!(f, "\n  hint: raise it with --max-input or FORSCAN_MAX_INPUT")
    }
}

impl std::error::Error for InputTooLong {}
