/// One row of the iteration log.
///
/// `x0` and `x1` are the samples entering the step and `x2` is the iterate
/// it produced. `error` is `|(x2 - x1) / x2|`, except for the first record,
/// which holds [`SEED_ERROR`](super::SEED_ERROR).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationRecord {
    /// Step number, starting at 1.
    pub iter: usize,
    pub x0: f64,
    pub x1: f64,
    pub fx0: f64,
    pub fx1: f64,
    pub x2: f64,
    pub error: f64,
}
