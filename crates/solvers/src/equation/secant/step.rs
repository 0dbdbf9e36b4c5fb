use secant_core::Model;

use super::{Config, Error, IterationRecord};

/// Samples the model at both points and computes the next iterate.
///
/// The returned record carries the step's true relative error.
pub(super) fn step<M>(
    model: &M,
    iter: usize,
    [x0, x1]: [f64; 2],
    config: &Config,
) -> Result<IterationRecord, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let fx0 = model.call(&x0).map_err(Error::model)?;
    let fx1 = model.call(&x1).map_err(Error::model)?;

    let denominator = fx1 - fx0;
    if denominator.abs() < config.min_denominator() {
        return Err(Error::DegenerateStep {
            iter,
            x0,
            x1,
            fx0,
            fx1,
        });
    }

    let x2 = x1 - fx1 * (x1 - x0) / denominator;
    if !x2.is_finite() {
        return Err(Error::Divergence { iter, x2 });
    }

    Ok(IterationRecord {
        iter,
        x0,
        x1,
        fx0,
        fx1,
        x2,
        error: relative_error(x2, x1),
    })
}

/// Returns `|(next - prev) / next|`, or zero when the iterate did not move.
fn relative_error(next: f64, prev: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    if next == prev {
        return 0.0;
    }
    ((next - prev) / next).abs()
}
