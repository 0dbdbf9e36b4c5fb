use super::IterationRecord;

/// Event emitted by the secant solver after each recorded step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just recorded.
    pub record: &'a IterationRecord,

    /// The tolerance the solver is working toward.
    pub tolerance: f64,
}

impl Event<'_> {
    /// Returns true if this step's error meets the tolerance.
    ///
    /// Always false for the first step unless the tolerance is at least
    /// the nominal seed error.
    #[must_use]
    pub fn is_within_tolerance(&self) -> bool {
        self.record.error <= self.tolerance
    }
}
