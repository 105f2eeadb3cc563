/// Lexer for the for-loop language.
/// Yields tokens lazily; illegal characters are recorded and skipped.

use crate::error::LexDiagnostic;
use crate::token::{keyword, Token, TokenKind, TokenValue};

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: usize,
    diagnostics: Vec<LexDiagnostic>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Rewind to the start of the input and forget earlier diagnostics.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.diagnostics.clear();
    }

    /// Scan the rest of the input into a vector.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<LexDiagnostic> {
        self.diagnostics
    }

    fn next_token(&mut self) -> Option<Token> {
        while let Some(ch) = self.peek() {
            // Skip whitespace
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.pos += 1;
                continue;
            }

            if ch == '\n' {
                self.pos += 1;
                self.line += 1;
                continue;
            }

            if ch.is_ascii_digit() {
                return Some(self.read_number());
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                return Some(self.read_ident());
            }

            // Two-char operators
            let two = match (ch, self.peek_next()) {
                ('<', Some('=')) => Some(TokenKind::Le),
                ('+', Some('+')) => Some(TokenKind::Increment),
                _ => None,
            };
            if let Some(kind) = two {
                return Some(self.symbol(kind, 2));
            }

            // Single-char operators
            let kind = match ch {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ';' => TokenKind::Semicolon,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '=' => TokenKind::Assign,
                _ => {
                    self.illegal(ch);
                    continue;
                }
            };
            return Some(self.symbol(kind, 1));
        }
        None
    }

    fn illegal(&mut self, character: char) {
        log::debug!("Illegal character '{}' at line {}", character.escape_default(), self.line);
        self.diagnostics.push(LexDiagnostic {
            character,
            line: self.line,
            offset: self.pos,
        });
        self.pos += 1;
    }

    fn symbol(&mut self, kind: TokenKind, width: usize) -> Token {
        let start = self.pos;
        self.pos += width;
        let text: String = self.source[start..self.pos].iter().collect();
        Token { kind, value: TokenValue::Text(text), line: self.line, offset: start }
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        let mut value: i64 = 0;
        let mut saturated = false;
        while let Some(c) = self.peek().filter(|c| c.is_ascii_digit()) {
            let digit = i64::from(c as u8 - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => value = v,
                None => {
                    value = i64::MAX;
                    saturated = true;
                }
            }
            self.pos += 1;
        }
        if saturated {
            log::warn!("number at line {} does not fit in 64 bits, using {}", self.line, i64::MAX);
        }
        Token { kind: TokenKind::Number, value: TokenValue::Number(value), line: self.line, offset: start }
    }

    fn read_ident(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.pos += 1;
        }
        let text: String = self.source[start..self.pos].iter().collect();
        let kind = keyword(&text).unwrap_or(TokenKind::Id);
        Token { kind, value: TokenValue::Text(text), line: self.line, offset: start }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
