/// Watches a running solver and may ask it to change course.
///
/// The solver calls [`observe`](Observer::observe) once per event `E` (for
/// the secant solver, once per recorded step). Returning `None` lets the
/// iteration carry on; `Some(action)` hands the solver an action `A` from its
/// own vocabulary, such as a request to stop with the current iterate.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
