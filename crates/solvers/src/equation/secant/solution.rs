use super::IterationRecord;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The relative error met the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a secant solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate from the last recorded step.
    pub root: f64,

    /// Relative error of the last recorded step.
    pub error: f64,

    /// Number of recorded steps.
    pub iters: usize,

    /// Every recorded step, in iteration order.
    pub records: Vec<IterationRecord>,
}

impl Solution {
    /// Builds a solution from a non-empty iteration log.
    pub(super) fn new(status: Status, records: Vec<IterationRecord>) -> Self {
        let (root, error) = records
            .last()
            .map_or((f64::NAN, f64::NAN), |last| (last.x2, last.error));

        Self {
            status,
            root,
            error,
            iters: records.len(),
            records,
        }
    }
}
