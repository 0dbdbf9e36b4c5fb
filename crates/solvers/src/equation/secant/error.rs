use std::error::Error as StdError;

use thiserror::Error;

use super::IterationRecord;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("model call failed: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error(
        "degenerate step {iter}: f({x1}) - f({x0}) = {} is below the minimum denominator",
        .fx1 - .fx0
    )]
    DegenerateStep {
        iter: usize,
        x0: f64,
        x1: f64,
        fx0: f64,
        fx1: f64,
    },

    #[error("diverged at step {iter}: next iterate is {x2}")]
    Divergence { iter: usize, x2: f64 },

    #[error("no root found within {iters} iterations (relative error {error})")]
    NonConvergence {
        iters: usize,
        error: f64,
        records: Vec<IterationRecord>,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    /// Returns the partial iteration log carried by the error, if any.
    #[must_use]
    pub fn records(&self) -> Option<&[IterationRecord]> {
        match self {
            Self::NonConvergence { records, .. } => Some(records),
            _ => None,
        }
    }
}
