/// Token types for the for-loop lexer.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Delimiters
    #[serde(rename = "LPAREN")]
    LParen,     // (
    #[serde(rename = "RPAREN")]
    RParen,     // )
    #[serde(rename = "SEMICOLON")]
    Semicolon,  // ;
    #[serde(rename = "LBRACE")]
    LBrace,     // {
    #[serde(rename = "RBRACE")]
    RBrace,     // }

    // Operators
    #[serde(rename = "ASSIGN")]
    Assign,     // =
    #[serde(rename = "LE")]
    Le,         // <=
    #[serde(rename = "INCREMENT")]
    Increment,  // ++

    // Literals and names
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "ID")]
    Id,

    // Keywords
    #[serde(rename = "FOR")]
    For,
    #[serde(rename = "PRINT")]
    Print,
}

impl TokenKind {
    /// Upper-case name used in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Le => "LE",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Id => "ID",
            TokenKind::For => "FOR",
            TokenKind::Print => "PRINT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Increment => write!(f, "'++'"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Id => write!(f, "an identifier"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::Print => write!(f, "'system.out.println'"),
        }
    }
}

/// Reserved words, keyed by their lower-cased spelling.
const RESERVED: &[(&str, TokenKind)] = &[
    ("for", TokenKind::For),
    ("system.out.println", TokenKind::Print),
];

/// Resolve an identifier-shaped lexeme against the reserved table.
/// Matching ignores case.
pub fn keyword(lexeme: &str) -> Option<TokenKind> {
    RESERVED
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(lexeme))
        .map(|(_, kind)| *kind)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{}", s),
            TokenValue::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    /// Character offset of the lexeme, counted from 0.
    pub offset: usize,
}

impl Token {
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

/// Listing form: `LexToken(ID,'i',1,5)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Text(s) => write!(f, "LexToken({},'{}',{},{})", self.kind.name(), s, self.line, self.offset),
            TokenValue::Number(n) => write!(f, "LexToken({},{},{},{})", self.kind.name(), n, self.line, self.offset),
        }
    }
}
