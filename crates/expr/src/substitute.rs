/// The variable placeholder replaced by the evaluation point.
pub const VARIABLE: char = 'x';

/// Renders a value with `.` as the decimal separator and no exponent.
///
/// Integral values render without a fractional part (`9`, not `9.0`).
#[must_use]
pub fn format_invariant(value: f64) -> String {
    format!("{value}")
}

/// Replaces every [`VARIABLE`] in `text` with the rendering of `x`.
#[must_use]
pub fn substitute(text: &str, x: f64) -> String {
    text.replace(VARIABLE, &format_invariant(x))
}
