use std::{fmt, str::FromStr};

use secant_core::Model;
use tracing::trace;

use crate::{ArithmeticError, Error, expand_powers, parse, substitute};

/// A validated, non-blank single-variable expression.
///
/// As a [`Model`], an expression maps `x: f64` to its value widened back
/// from `f32`, which makes it usable as the secant solver's function oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    /// Creates an expression from its source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Blank`] if the text is empty or only whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::Blank);
        }
        Ok(Self { text })
    }

    /// Returns the source text as supplied.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the pure arithmetic text for `x`, after substitution and
    /// power expansion.
    ///
    /// # Errors
    ///
    /// Returns an error if a power has invalid operands.
    pub fn rewrite(&self, x: f64) -> Result<String, ArithmeticError> {
        expand_powers(&substitute(&self.text, x))
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if the rewritten text cannot be parsed
    /// or computed.
    pub fn eval(&self, x: f64) -> Result<f32, Error> {
        let arithmetic = self.rewrite(x)?;
        let value = parse(&arithmetic)?.eval()?;
        trace!(expression = %self.text, x, %arithmetic, value, "evaluated");

        #[allow(clippy::cast_possible_truncation)]
        let value = value as f32;
        Ok(value)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        self.eval(*input).map(f64::from)
    }
}
