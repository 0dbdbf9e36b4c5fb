use thiserror::Error;

/// Errors that can occur when evaluating an expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("expression is blank")]
    Blank,

    #[error("arithmetic evaluation failed: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// Errors raised while rewriting, parsing, or computing arithmetic text.
///
/// Positions are byte offsets into the text of the failing stage, which is
/// the expression after substitution and power expansion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("exponentiation at byte {position} needs a single digit on each side")]
    InvalidPowerOperand { position: usize },

    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedChar { position: usize, found: char },

    #[error("invalid number {text:?} at byte {position}")]
    InvalidNumber { position: usize, text: String },

    #[error("unexpected {found} at byte {position}")]
    UnexpectedToken { position: usize, found: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unclosed parenthesis opened at byte {position}")]
    UnclosedParen { position: usize },

    #[error("division by zero")]
    DivisionByZero,
}
