/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the most recent step as the solution.
    StopEarly,
}
