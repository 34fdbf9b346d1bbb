/// Watches a root finder iterate by iterate and can end the solve early.
///
/// A solver calls [`Observer::observe`] after each evaluation of the
/// objective (and at other milestones, such as a switch to a fallback
/// method), passing an event that carries the current iterate, `f(x)`, and
/// the current bracket. Returning `Some(action)` asks the solver to act on it,
/// typically to stop and return the current estimate once `|f(x)|` is small
/// enough for the caller; `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, so a trace can be
/// collected with a closure that pushes events into a `Vec`. `()` never acts
/// and backs the unobserved `solve` entry points.
pub trait Observer<E, A> {
    /// Receives one solver event and returns an action, if any.
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
