//! Secant method for single-variable root finding.
//!
//! # Algorithm
//!
//! Given the two most recent samples `(a, f(a))` and `(b, f(b))`, the next
//! iterate is where the line through them crosses zero:
//!
//! ```text
//! c = b - f(b) * (b - a) / (f(b) - f(a))
//! ```
//!
//! Each step records an [`IterationRecord`] with relative error
//! `|(c - b) / c|`, then advances the pair to `(b, c)`.
//!
//! # Stopping
//!
//! The first step is always taken and its record carries a nominal error of
//! `1.0`, so the tolerance is first tested against a real error on step two.
//! Steps continue while the error exceeds the tolerance and fewer than
//! [`Config::max_iters`] records exist.
//!
//! # Failures
//!
//! - [`Error::DegenerateStep`] — `|f(b) - f(a)|` fell below
//!   [`Config::min_denominator`], checked before dividing
//! - [`Error::Divergence`] — the next iterate is NaN or infinite
//! - [`Error::NonConvergence`] — the iteration cap was reached; carries the
//!   partial iteration log
//! - [`Error::Model`] — the function oracle failed
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per recorded step, including the first.
//! Observers can return [`Action::StopEarly`] to end the solve with
//! [`Status::StoppedByObserver`].
//!
//! The tolerance is not validated here; callers must supply a positive value.

mod action;
mod config;
mod error;
mod event;
mod record;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::IterationRecord;
pub use solution::{Solution, Status};

use secant_core::{Model, Observer};
use tracing::debug;

use step::step;

/// Error value stored in the first record in place of its computed error.
pub const SEED_ERROR: f64 = 1.0;

/// Finds a root of `model` with the secant method, starting from `guesses`.
///
/// Observers see each recorded step.
/// See the [module docs](self) for the stopping rule and failure modes.
///
/// # Errors
///
/// Returns an error if a step is degenerate or diverges, the model fails,
/// or the tolerance is not met within [`Config::max_iters`] steps.
pub fn solve<M, Obs>(
    model: &M,
    guesses: [f64; 2],
    tolerance: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut records = Vec::with_capacity(config.max_iters());

    let mut record = IterationRecord {
        error: SEED_ERROR,
        ..step(model, 1, guesses, config)?
    };

    loop {
        records.push(record);

        let event = Event {
            record: &record,
            tolerance,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iters = records.len(), root = record.x2, "stopped by observer");
            return Ok(Solution::new(Status::StoppedByObserver, records));
        }

        if record.error <= tolerance || records.len() >= config.max_iters() {
            break;
        }

        record = step(model, records.len() + 1, [record.x1, record.x2], config)?;
    }

    if record.error > tolerance {
        debug!(iters = records.len(), error = record.error, "no convergence");
        return Err(Error::NonConvergence {
            iters: records.len(),
            error: record.error,
            records,
        });
    }

    debug!(
        iters = records.len(),
        root = record.x2,
        error = record.error,
        "converged"
    );
    Ok(Solution::new(Status::Converged, records))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if a step is degenerate or diverges, the model fails,
/// or the tolerance is not met within [`Config::max_iters`] steps.
pub fn solve_unobserved<M>(
    model: &M,
    guesses: [f64; 2],
    tolerance: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, guesses, tolerance, config, ())
}
