//! Recognizer for single-statement `for` loops.
//!
//! [`tokenize`] never fails; illegal characters are logged and skipped.
//! [`parse`] accepts exactly one loop of the form
//! `for (i = 0; i <= 10; i++) { System.out.println(i); }` and returns its
//! canonical rendering, or the first syntax error.

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod report;
pub mod token;

pub use config::Config;
pub use error::{InputTooLong, LexDiagnostic, ParseError, ParseErrorKind};
pub use report::{check, Report};
pub use token::{Token, TokenKind, TokenValue};

/// Scan the whole source. Illegal characters produce no token.
pub fn tokenize(source: &str) -> Vec<Token> {
    lexer::Lexer::new(source).tokenize()
}

/// Scan the source and also return what was skipped.
pub fn tokenize_with_diagnostics(source: &str) -> (Vec<Token>, Vec<LexDiagnostic>) {
    let mut lexer = lexer::Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.into_diagnostics())
}

/// Parse one loop and render it canonically.
pub fn parse(source: &str) -> Result<String, ParseError> {
    let tokens = tokenize(source);
    let program = parser::Parser::new(tokens).parse_program()?;
    let rendered = pretty::pretty_program(&program);
    log::debug!("rendered loop ({} bytes)", rendered.len());
    Ok(rendered)
}
