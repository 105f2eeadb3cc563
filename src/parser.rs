/// Recursive descent parser for the for-loop grammar.
/// Works over a token slice with a cursor; the first mismatch aborts the parse.

use crate::ast::*;
use crate::error::ParseError;
use crate::token::{Token, TokenKind, TokenValue};

type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// program : FOR '(' init ';' condition ';' increment ')' '{' statement '}'
    pub fn parse_program(&mut self) -> Result<Program> {
        let keyword = self.expect(TokenKind::For)?.text();
        self.expect(TokenKind::LParen)?;
        let init = self.parse_init()?;
        self.expect(TokenKind::Semicolon)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Semicolon)?;
        let increment = self.parse_increment()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::RBrace)?;

        // Exactly one program per input
        if let Some(extra) = self.tokens.get(self.pos) {
            return Err(ParseError::unexpected(extra.clone()));
        }

        Ok(Program { keyword, init, condition, increment, body })
    }

    // ─── Loop header ───

    fn parse_init(&mut self) -> Result<Init> {
        let name = self.expect(TokenKind::Id)?.text();
        self.expect(TokenKind::Assign)?;
        let value = self.expect_number()?;
        Ok(Init { name, value })
    }

    fn parse_condition(&mut self) -> Result<Condition> {
        let name = self.expect(TokenKind::Id)?.text();
        self.expect(TokenKind::Le)?;
        let bound = self.expect_number()?;
        Ok(Condition { name, bound })
    }

    fn parse_increment(&mut self) -> Result<Increment> {
        let name = self.expect(TokenKind::Id)?.text();
        self.expect(TokenKind::Increment)?;
        Ok(Increment { name })
    }

    // ─── Body ───

    fn parse_statement(&mut self) -> Result<Statement> {
        let print = self.expect(TokenKind::Print)?.text();
        self.expect(TokenKind::LParen)?;
        let argument = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement { print, argument })
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let name = self.expect(TokenKind::Id)?.text();
        Ok(Expression::Ident(name))
    }

    // ─── Helpers ───

    fn expect(&mut self, expected: TokenKind) -> Result<&Token> {
        let pos = self.pos;
        match self.tokens.get(pos) {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(&self.tokens[pos])
            }
            Some(token) => {
                log::debug!("expected {}, got {} at line {}", expected, token.kind, token.line);
                Err(ParseError::unexpected(token.clone()))
            }
            None => {
                log::debug!("expected {}, input ended", expected);
                Err(ParseError::eof(self.last_line()))
            }
        }
    }

    fn expect_number(&mut self) -> Result<i64> {
        let token = self.expect(TokenKind::Number)?;
        match token.value {
            TokenValue::Number(n) => Ok(n),
            // The lexer only builds NUMBER tokens with numeric values
            TokenValue::Text(_) => Err(ParseError::unexpected(token.clone())),
        }
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }
}
