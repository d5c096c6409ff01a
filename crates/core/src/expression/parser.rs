//! Recursive-descent parser over the token stream.
//!
//! ```text
//! expr   = term { ("+" | "-") term }
//! term   = unary { ("*" | "/") unary | implicit }
//! unary  = ("+" | "-") unary | power
//! power  = atom [ "^" unary ]
//! atom   = number | "x" | constant | builtin "(" expr ")" | "(" expr ")"
//! ```
//!
//! Implicit multiplication applies when an identifier or `(` directly follows
//! a complete factor, so `2x` and `3(x + 1)` parse as products.
//!
//! Every recursive path passes through `unary`, which caps nesting at
//! [`MAX_DEPTH`] so that hostile input fails instead of exhausting the stack.

use std::f64::consts::{E, PI};

use super::{
    SyntaxError,
    ast::{BinaryOp, Builtin, Node},
    lexer::{Token, TokenKind},
};

/// Maximum nesting of parentheses, calls, signs and exponents.
pub(super) const MAX_DEPTH: usize = 128;

pub(super) fn parse(tokens: &[Token]) -> Result<Node, SyntaxError> {
    if tokens.is_empty() {
        return Err(SyntaxError::Empty);
    }

    let mut parser = Parser {
        tokens,
        next: 0,
        depth: 0,
    };
    let node = parser.expr()?;

    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(SyntaxError::UnexpectedToken {
            found: token.kind.describe(),
            pos: token.pos,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    next: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.next)
    }

    fn bump(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.next);
        if token.is_some() {
            self.next += 1;
        }
        token
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn expr(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.term()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(node),
            };
            self.bump();
            let rhs = self.term()?;
            node = Node::Binary(op, Box::new(node), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.bump();
                    BinaryOp::Mul
                }
                Some(TokenKind::Slash) => {
                    self.bump();
                    BinaryOp::Div
                }
                Some(TokenKind::Ident(_) | TokenKind::LParen) => BinaryOp::Mul,
                _ => return Ok(node),
            };
            let rhs = self.unary()?;
            node = Node::Binary(op, Box::new(node), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Node, SyntaxError> {
        if self.depth == MAX_DEPTH {
            return Err(SyntaxError::TooDeep { limit: MAX_DEPTH });
        }

        self.depth += 1;
        let node = self.signed();
        self.depth -= 1;
        node
    }

    fn signed(&mut self) -> Result<Node, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Minus) => {
                self.bump();
                Ok(Node::Neg(Box::new(self.unary()?)))
            }
            Some(TokenKind::Plus) => {
                self.bump();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, SyntaxError> {
        let base = self.atom()?;
        if matches!(self.peek_kind(), Some(TokenKind::Caret)) {
            self.bump();
            let exponent = self.unary()?;
            return Ok(Node::Binary(
                BinaryOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Node, SyntaxError> {
        let Some(token) = self.bump().cloned() else {
            return Err(SyntaxError::UnexpectedEnd);
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::Ident(name) => self.identifier(name, token.pos),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.close_paren(token.pos)?;
                Ok(inner)
            }
            other => Err(SyntaxError::UnexpectedToken {
                found: other.describe(),
                pos: token.pos,
            }),
        }
    }

    fn identifier(&mut self, name: String, pos: usize) -> Result<Node, SyntaxError> {
        match name.as_str() {
            "x" => return Ok(Node::Variable),
            "pi" => return Ok(Node::Number(PI)),
            "e" => return Ok(Node::Number(E)),
            _ => {}
        }

        let Some(builtin) = Builtin::lookup(&name) else {
            return Err(SyntaxError::UnknownIdentifier { name, pos });
        };

        let open = match self.peek() {
            Some(Token {
                kind: TokenKind::LParen,
                pos,
            }) => *pos,
            _ => return Err(SyntaxError::MissingArgument { name, pos }),
        };
        self.bump();

        let arg = self.expr()?;
        self.close_paren(open)?;
        Ok(Node::Call(builtin, Box::new(arg)))
    }

    fn close_paren(&mut self, open: usize) -> Result<(), SyntaxError> {
        match self.bump() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            _ => Err(SyntaxError::UnclosedParen { pos: open }),
        }
    }
}
