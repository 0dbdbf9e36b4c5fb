use crate::{
    ArithmeticError,
    ast::{BinaryOp, Expr},
    lexer::{Spanned, Token, tokenize},
};

/// Parses pure arithmetic text into an [`Expr`] tree.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// expr    := term (("+" | "-") term)*
/// term    := unary (("*" | "/") unary)*
/// unary   := ("+" | "-") unary | primary
/// primary := number | "(" expr ")"
/// ```
///
/// Binary operators are left-associative. The text must not contain the
/// variable or `^`; see [`substitute`](crate::substitute) and
/// [`expand_powers`](crate::expand_powers).
///
/// # Errors
///
/// Returns an [`ArithmeticError`] describing the first lexical or syntax error.
pub fn parse(text: &str) -> Result<Expr, ArithmeticError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, pos: 0 };

    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(spanned) => Err(unexpected(spanned)),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.peek();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expr(&mut self) -> Result<Expr, ArithmeticError> {
        let mut lhs = self.term()?;
        while let Some(op) = self.peek().and_then(|s| additive(s.token)) {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ArithmeticError> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.peek().and_then(|s| multiplicative(s.token)) {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ArithmeticError> {
        match self.peek().map(|s| s.token) {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, ArithmeticError> {
        let spanned = self.advance().ok_or(ArithmeticError::UnexpectedEnd)?;
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::LParen => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ArithmeticError::UnclosedParen {
                        position: spanned.position,
                    }),
                }
            }
            _ => Err(unexpected(spanned)),
        }
    }
}

fn additive(token: Token) -> Option<BinaryOp> {
    match token {
        Token::Plus => Some(BinaryOp::Add),
        Token::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative(token: Token) -> Option<BinaryOp> {
    match token {
        Token::Star => Some(BinaryOp::Mul),
        Token::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

fn unexpected(spanned: Spanned) -> ArithmeticError {
    ArithmeticError::UnexpectedToken {
        position: spanned.position,
        found: spanned.token.to_string(),
    }
}
