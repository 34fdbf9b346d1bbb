use std::fmt;

use super::Budget;

/// The solver that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Plain Newton–Raphson.
    Newton,

    /// Newton–Raphson safeguarded by bisection.
    NewtonSafe,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newton => f.write_str("Newton"),
            Self::NewtonSafe => f.write_str("NewtonSafe"),
        }
    }
}

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged to the requested accuracy.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function evaluations spent, including any spent before a handoff.
    pub evals: usize,

    /// The solver that produced `x`.
    pub method: Method,
}

impl Solution {
    pub(super) fn converged(method: Method, x: f64, budget: &Budget) -> Self {
        Self {
            status: Status::Converged,
            x,
            evals: budget.used(),
            method,
        }
    }

    pub(super) fn stopped(method: Method, x: f64, budget: &Budget) -> Self {
        Self {
            status: Status::StoppedByObserver,
            x,
            evals: budget.used(),
            method,
        }
    }
}
