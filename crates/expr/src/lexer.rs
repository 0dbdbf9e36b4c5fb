use std::fmt;

use crate::ArithmeticError;

/// A lexical token of pure arithmetic text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
        }
    }
}

/// A token with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) position: usize,
}

/// Splits arithmetic text into tokens, skipping whitespace.
///
/// Number literals are runs of digits and periods (`3`, `0.25`, `.5`, `2.`).
pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned>, ArithmeticError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = position + c.len_utf8();
                while let Some(&(next, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || c == '.') {
                        break;
                    }
                    end = next + c.len_utf8();
                    chars.next();
                }
                let literal = &text[position..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ArithmeticError::InvalidNumber {
                        position,
                        text: literal.to_owned(),
                    })?;
                Token::Number(value)
            }
            found => return Err(ArithmeticError::UnexpectedChar { position, found }),
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Token> {
        tokenize(text)
            .expect("valid tokens")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_numbers() {
        assert_eq!(
            kinds("(1.5 + 2) * -3 / 4"),
            vec![
                Token::LParen,
                Token::Number(1.5),
                Token::Plus,
                Token::Number(2.0),
                Token::RParen,
                Token::Star,
                Token::Minus,
                Token::Number(3.0),
                Token::Slash,
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn records_byte_positions() {
        let tokens = tokenize(" 12 +3").expect("valid tokens");
        let positions: Vec<_> = tokens.iter().map(|spanned| spanned.position).collect();
        assert_eq!(positions, vec![1, 4, 5]);
    }

    #[test]
    fn accepts_bare_decimal_point_forms() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
        assert_eq!(kinds("2."), vec![Token::Number(2.0)]);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(
            tokenize("1+1.2.3"),
            Err(ArithmeticError::InvalidNumber {
                position: 2,
                text: "1.2.3".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("2 % 3"),
            Err(ArithmeticError::UnexpectedChar {
                position: 2,
                found: '%',
            })
        );
    }
}
