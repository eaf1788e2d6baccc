//! Tokenizer and recursive-descent parser for single-line math expressions.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary | implicit)*
//! unary  := ('-' | '+') unary | power
//! power  := atom ('^' unary)?
//! atom   := number | constant | ident | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! `implicit` multiplication applies when a number, name or `(` directly
//! follows another factor: `2x`, `3(x + 1)`, `x y`.
//!
//! Input length and nesting depth are capped, which also bounds the tree
//! depth that evaluation, printing and differentiation recurse through.

use crate::errors::{CalcError, CalcResult};

use super::ast::{Constant, Expr, Func};

/// Longest accepted expression, in characters
pub const MAX_EXPRESSION_LEN: usize = 1_000;

/// Deepest accepted nesting of parentheses, signs and powers
pub const MAX_NESTING: usize = 128;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    position: usize,
}

fn tokenize(src: &str) -> CalcResult<Vec<Spanned>> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Caret
            }
            '*' | '×' | '·' => Token::Star,
            '/' | '÷' => Token::Slash,
            '^' => Token::Caret,
            '(' | '[' => Token::LParen,
            ')' | ']' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Exponent only when digits follow; a bare `e` is Euler's number
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| CalcError::expression(start, format!("invalid number '{}'", text)))?;
                tokens.push(Spanned {
                    token: Token::Num(value),
                    position: start,
                });
                continue;
            }
            'π' => Token::Ident("pi".to_string()),
            c if c.is_alphabetic() || c == '_' => {
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push(Spanned {
                    token: Token::Ident(name),
                    position: start,
                });
                continue;
            }
            other => {
                return Err(CalcError::expression(start, format!("unexpected character '{}'", other)));
            }
        };
        tokens.push(Spanned { token, position: start });
        i += 1;
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map(|s| s.position).unwrap_or(self.end)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        self.pos += 1;
        token
    }

    fn expect_rparen(&mut self) -> CalcResult<()> {
        match self.peek() {
            Some(Token::RParen) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(CalcError::expression(self.position(), "expected ')'")),
        }
    }

    fn expr(&mut self) -> CalcResult<Expr> {
        let mut left = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    left = Expr::Add(Box::new(left), Box::new(self.term()?));
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    left = Expr::Sub(Box::new(left), Box::new(self.term()?));
                }
                _ => return Ok(left),
            }
        }
    }

    fn term(&mut self) -> CalcResult<Expr> {
        let mut left = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    left = Expr::Mul(Box::new(left), Box::new(self.unary()?));
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    left = Expr::Div(Box::new(left), Box::new(self.unary()?));
                }
                Some(Token::Num(_)) | Some(Token::Ident(_)) | Some(Token::LParen) => {
                    left = Expr::Mul(Box::new(left), Box::new(self.power()?));
                }
                _ => return Ok(left),
            }
        }
    }

    /// Every recursive path runs through here, so this is where depth is counted
    fn unary(&mut self) -> CalcResult<Expr> {
        if self.depth >= MAX_NESTING {
            return Err(CalcError::expression(self.position(), "expression nested too deeply"));
        }
        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> CalcResult<Expr> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> CalcResult<Expr> {
        let base = self.atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> CalcResult<Expr> {
        let position = self.position();
        match self.advance() {
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                let lower = name.to_lowercase();
                if let Some(func) = Func::from_name(&lower).or_else(|| alias(&lower)) {
                    if self.peek() != Some(&Token::LParen) {
                        return Err(CalcError::expression(
                            self.position(),
                            format!("expected '(' after {}", name),
                        ));
                    }
                    self.pos += 1;
                    let arg = self.expr()?;
                    self.expect_rparen()?;
                    return Ok(Expr::Call(func, Box::new(arg)));
                }
                match lower.as_str() {
                    "pi" => Ok(Expr::Const(Constant::Pi)),
                    "e" => Ok(Expr::Const(Constant::E)),
                    _ => Ok(Expr::Var(name)),
                }
            }
            Some(Token::RParen) => Err(CalcError::expression(position, "unexpected ')'")),
            Some(_) => Err(CalcError::expression(position, "expected a number, name or '('")),
            None => Err(CalcError::expression(position, "unexpected end of expression")),
        }
    }
}

fn alias(name: &str) -> Option<Func> {
    match name {
        "log10" => Some(Func::Log10),
        "arcsin" => Some(Func::Asin),
        "arccos" => Some(Func::Acos),
        "arctan" => Some(Func::Atan),
        _ => None,
    }
}

/// Parse a single expression, rejecting trailing input.
pub fn parse(src: &str) -> CalcResult<Expr> {
    if src.chars().count() > MAX_EXPRESSION_LEN {
        return Err(CalcError::expression(
            MAX_EXPRESSION_LEN,
            format!("expression is longer than {} characters", MAX_EXPRESSION_LEN),
        ));
    }
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(CalcError::expression(0, "expression is empty"));
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: src.chars().count(),
        depth: 0,
    };
    let expr = parser.expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(CalcError::expression(parser.position(), "unexpected input after expression"));
    }
    Ok(expr)
}
