//! Step logging for solver runs.

use secant_core::Observer;
use secant_solvers::equation::secant::{Action, Event};
use tracing::trace;

/// Observer that logs every recorded secant step at `TRACE` level.
///
/// Never intervenes; enable with `RUST_LOG=secant_cli=trace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepLogger;

impl<'a> Observer<Event<'a>, Action> for StepLogger {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        let record = event.record;
        trace!(
            iter = record.iter,
            x2 = record.x2,
            error = record.error,
            within_tolerance = event.is_within_tolerance(),
            "secant step"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secant_solvers::equation::secant::{IterationRecord, SEED_ERROR};

    #[test]
    fn never_stops_the_solver() {
        let record = IterationRecord {
            iter: 1,
            x0: 1.0,
            x1: 3.0,
            fx0: -3.0,
            fx1: 5.0,
            x2: 1.75,
            error: SEED_ERROR,
        };
        let mut logger = StepLogger;

        for tolerance in [1e-6, 2.0] {
            let event = Event {
                record: &record,
                tolerance,
            };
            assert_eq!(logger.observe(&event), None);
        }
    }
}
