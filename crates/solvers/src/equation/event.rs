use super::{Method, Point};

/// Events emitted by the Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The solver evaluated `f` and `f'` at a new iterate.
    ///
    /// `iter` is zero for the starting guess. For [`Method::Newton`] the
    /// bracket is the fixed search interval; for [`Method::NewtonSafe`] it is
    /// the current, shrinking bracket.
    Evaluated {
        /// The solver that made the evaluation.
        method: Method,

        /// Iteration counter within that solver.
        iter: usize,

        /// The evaluated point.
        point: Point,

        /// Current bracket as `[low, high]`.
        bracket: [f64; 2],
    },

    /// A Newton step left the interval and the solve continues as
    /// [`Method::NewtonSafe`] from `from`.
    Handoff {
        /// The last in-bounds iterate, where the safeguarded solver starts.
        from: f64,

        /// The search interval.
        bounds: [f64; 2],

        /// Evaluations handed to the safeguarded solver.
        remaining: usize,
    },
}

impl Event {
    /// Returns the x value the event refers to.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::Handoff { from, .. } => *from,
        }
    }
}

/// Actions an observer can take during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,
}
