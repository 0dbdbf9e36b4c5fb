use tracing::trace;

use crate::{ArithmeticError, substitute::format_invariant};

/// Two-character marker that `^` is rewritten to before expansion.
pub const POWER_MARKER: &str = "**";

/// Expands every exponentiation in `text` into a numeric literal.
///
/// Each `^` is first rewritten to [`POWER_MARKER`]. The leftmost marker is
/// then replaced, together with the single character before it (the base)
/// and the single character after it (the exponent), by the rendered value
/// of `base.powf(exponent)`. This repeats until no marker remains, so
/// `2^2^2` expands to `4^2` and then to `16`.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidPowerOperand`] if a marker sits at
/// either end of the text or either adjacent character is not a decimal digit.
pub fn expand_powers(text: &str) -> Result<String, ArithmeticError> {
    let mut expr = text.replace('^', POWER_MARKER);

    while let Some(position) = expr.find(POWER_MARKER) {
        let invalid = ArithmeticError::InvalidPowerOperand { position };
        let after = position + POWER_MARKER.len();

        let base = expr[..position].chars().next_back().ok_or(invalid.clone())?;
        let exponent = expr[after..].chars().next().ok_or(invalid.clone())?;
        let (Some(base_digit), Some(exponent_digit)) = (base.to_digit(10), exponent.to_digit(10))
        else {
            return Err(invalid);
        };

        let value = f64::from(base_digit).powf(f64::from(exponent_digit));
        let start = position - base.len_utf8();
        let end = after + exponent.len_utf8();
        expr.replace_range(start..end, &format_invariant(value));
        trace!(%expr, "expanded power");
    }

    Ok(expr)
}
