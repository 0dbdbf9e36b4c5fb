//! Evaluator for single-variable arithmetic expressions such as `x^2 - 4`.
//!
//! # Pipeline
//!
//! Evaluating an expression at `x` runs four stages:
//!
//! 1. **Substitute** every `x` with the invariant decimal rendering of the
//!    value (period separator, no exponent notation).
//! 2. **Expand powers**: each `^` becomes the marker `**`, and the leftmost
//!    `d**e` is repeatedly replaced with the rendered value of `d` raised to
//!    `e`, until no marker remains.
//! 3. **Parse** the remaining pure arithmetic text into an [`Expr`] tree.
//! 4. **Evaluate** the tree in `f64` and narrow the result to `f32`.
//!
//! # Exponentiation Operands
//!
//! The power expansion reads exactly one character on each side of the
//! marker, and both must be decimal digits. After substitution this means:
//!
//! - `x^2` at `x = 3` gives `3^2 = 9`
//! - `x^2` at `x = 1.5` gives `1.5^2` → `1.` followed by `5^2 = 25` → `1.25`
//! - `2^10`, `(x+1)^2` and `x^-1` are not supported; the last two fail with
//!   [`ArithmeticError::InvalidPowerOperand`]
//!
//! Write wider powers as explicit products (`x*x`, `(x+1)*(x+1)`).
//!
//! # Example
//!
//! ```
//! use secant_expr::evaluate;
//!
//! assert_eq!(evaluate("x^2", 3.0), Ok(9.0));
//! assert_eq!(evaluate("2*x+1", 5.0), Ok(11.0));
//! ```

mod ast;
mod error;
mod expression;
mod lexer;
mod parser;
mod power;
mod substitute;

pub use ast::{BinaryOp, Expr};
pub use error::{ArithmeticError, Error};
pub use expression::Expression;
pub use parser::parse;
pub use power::{POWER_MARKER, expand_powers};
pub use substitute::{VARIABLE, format_invariant, substitute};

/// Evaluates `expression` with the variable set to `x`.
///
/// # Errors
///
/// Returns [`Error::Blank`] if the expression is empty or whitespace, and
/// [`Error::Arithmetic`] if the rewritten text cannot be parsed or computed.
pub fn evaluate(expression: &str, x: f64) -> Result<f32, Error> {
    Expression::new(expression)?.eval(x)
}
