use log::trace;

use rootfind_core::ObjectiveFunction;

use super::{ConfigError, Error, Method};

/// A point with its function value and derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// `f(x)`.
    pub value: f64,

    /// `f'(x)`.
    pub derivative: f64,
}

impl Point {
    /// Returns the Newton step `f(x) / f'(x)` from this point.
    ///
    /// The step is subtracted from `x` to get the next iterate. It is not
    /// finite when the derivative vanishes.
    #[must_use]
    pub fn newton_step(&self) -> f64 {
        self.value / self.derivative
    }
}

/// Evaluation budget for a single solve.
///
/// Each call of the objective at a point counts once, whether or not the
/// derivative is also taken there. `used` never exceeds `max_evals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    max_evals: usize,
    used: usize,
}

impl Budget {
    /// Creates an unspent budget.
    #[must_use]
    pub fn new(max_evals: usize) -> Self {
        Self { max_evals, used: 0 }
    }

    /// Returns the budget ceiling.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the number of evaluations spent so far.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Returns the number of evaluations left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_evals - self.used
    }

    /// Returns true if no evaluations are left.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.used >= self.max_evals
    }

    /// Returns the error reported when this budget runs out.
    pub(super) fn exhausted(&self) -> Error {
        Error::MaxEvals {
            max_evals: self.max_evals,
        }
    }

    /// Counts one evaluation.
    fn record(&mut self) -> Result<(), Error> {
        if self.is_spent() {
            return Err(self.exhausted());
        }
        self.used += 1;
        Ok(())
    }

    /// Charges the evaluations spent by a budget handed off to another solver.
    pub(super) fn absorb(&mut self, delegated: &Budget) {
        self.used = (self.used + delegated.used).min(self.max_evals);
    }
}

/// Evaluates `f(x)` and counts one evaluation.
///
/// The value is returned as is; callers decide how to treat NaN or infinity.
///
/// # Errors
///
/// Returns `Error::MaxEvals` if the budget is spent.
pub(super) fn value<F>(f: &F, x: f64, budget: &mut Budget) -> Result<f64, Error>
where
    F: ObjectiveFunction + ?Sized,
{
    budget.record()?;
    Ok(f.value(x))
}

/// Evaluates `f(x)` and `f'(x)` and counts one evaluation.
///
/// A missing derivative is reported before `f(x)` is called, so it never
/// consumes budget.
///
/// # Errors
///
/// - `ConfigError::DerivativeRequired` if `f` has no derivative
/// - `Error::MaxEvals` if the budget is spent
/// - `Error::NonFiniteValue` if `f(x)` is NaN or infinite
pub(super) fn point<F>(f: &F, x: f64, budget: &mut Budget, method: Method) -> Result<Point, Error>
where
    F: ObjectiveFunction + ?Sized,
{
    if budget.is_spent() {
        return Err(budget.exhausted());
    }

    let derivative = f
        .derivative(x)
        .ok_or(ConfigError::DerivativeRequired { solver: method })?;
    let value = value(f, x, budget)?;
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }

    trace!("{method}: f({x}) = {value}, f'({x}) = {derivative}");
    Ok(Point {
        x,
        value,
        derivative,
    })
}
