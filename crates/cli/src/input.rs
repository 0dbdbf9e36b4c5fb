//! Validation of the four text fields into solver input.

use std::fmt;

use secant_expr::Expression;
use thiserror::Error;

/// A named input field, used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X0,
    X1,
    Tolerance,
    Function,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X0 => "x0",
            Self::X1 => "x1",
            Self::Tolerance => "tolerance",
            Self::Function => "function",
        })
    }
}

/// Errors that can occur when validating input fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{0} is blank")]
    BlankField(Field),

    #[error("{field} is not a finite number: {value:?}")]
    InvalidNumber { field: Field, value: String },

    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),

    #[error("invalid function: {0}")]
    Function(#[from] secant_expr::Error),
}

/// Validated input for one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInput {
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub expression: Expression,
}

impl SolverInput {
    /// Validates the raw fields.
    ///
    /// Blank fields are reported first, in field order, before any number
    /// is parsed. Numbers use `.` as the decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank, a number does not parse to a
    /// finite value, or the tolerance is not strictly positive.
    pub fn parse(x0: &str, x1: &str, tolerance: &str, function: &str) -> Result<Self, InputError> {
        let fields = [
            (Field::X0, x0),
            (Field::X1, x1),
            (Field::Tolerance, tolerance),
            (Field::Function, function),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(InputError::BlankField(*field));
        }

        let x0 = parse_number(Field::X0, x0)?;
        let x1 = parse_number(Field::X1, x1)?;
        let tolerance = parse_number(Field::Tolerance, tolerance)?;
        if tolerance <= 0.0 {
            return Err(InputError::NonPositiveTolerance(tolerance));
        }

        Ok(Self {
            x0,
            x1,
            tolerance,
            expression: Expression::new(function)?,
        })
    }
}

fn parse_number(field: Field, value: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}
