//! Newton–Raphson safeguarded by bisection.
//!
//! # Algorithm
//!
//! The solver keeps a bracket `[xl, xh]` with `f(xl) < 0 < f(xh)`. From the
//! current iterate it takes the Newton step `x - f(x)/f'(x)` when that point
//! stays inside the bracket and the step is shrinking faster than bisection
//! would; otherwise it bisects. Every new point replaces the bracket end with
//! the same sign, so the bracket only ever shrinks around the root.
//!
//! The iteration stops when the last step is smaller than the requested
//! accuracy.
//!
//! # Evaluation budget
//!
//! Checking the bracket costs two evaluations (one per endpoint). The starting
//! guess and every later iterate cost one evaluation each, covering both `f`
//! and `f'`.
//!
//! # Observer events
//!
//! The solver emits [`Event::Evaluated`] after the starting guess
//! (`iter == 0`) and after each iterate. The endpoint evaluations are not
//! reported. Returning [`Action::StopEarly`] ends the solve with the point
//! just evaluated.


use log::trace;

use rootfind_core::{ObjectiveFunction, Observer};

use super::{
    Action, Bounds, Budget, Config, ConfigError, Error, Event, Method, Point, Solution, Solver1D,
    bracket::{Bracket, Endpoints},
    evaluate,
};

/// Bracket-preserving Newton–Raphson solver.
///
/// Requires `f(x_min)` and `f(x_max)` to have opposite signs (or one of them
/// to be exactly zero) and an analytic derivative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NewtonSafe {
    config: Config,
}

impl NewtonSafe {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// The kind of step chosen for the next iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepKind {
    Newton,
    Bisection,
}

/// A chosen step: `dx` is the signed step length, `x` the next iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Step {
    kind: StepKind,
    dx: f64,
    x: f64,
}

/// Chooses the next iterate from `point`.
///
/// `dx_old` is the step taken before the most recent one. The Newton step is
/// rejected if it would land outside the bracket, if it or `f'(x)` is not
/// finite, or if `|2 f(x)| > |dx_old f'(x)|`, meaning it is not at least
/// halving faster than bisection.
fn next_step(point: &Point, bracket: &Bracket, dx_old: f64) -> Step {
    let Point {
        x,
        value,
        derivative,
    } = *point;
    let (xl, xh) = (bracket.negative(), bracket.positive());

    let leaves_bracket = ((x - xh) * derivative - value) * ((x - xl) * derivative - value) > 0.0;
    let too_slow = (2.0 * value).abs() > (dx_old * derivative).abs();
    let dx = point.newton_step();

    if leaves_bracket || too_slow || !dx.is_finite() || !derivative.is_finite() {
        let dx = bracket.half_step();
        Step {
            kind: StepKind::Bisection,
            dx,
            x: xl + dx,
        }
    } else {
        Step {
            kind: StepKind::Newton,
            dx,
            x: x - dx,
        }
    }
}

impl Solver1D for NewtonSafe {
    const METHOD: Method = Method::NewtonSafe;

    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn iterate<F, Obs>(
        &self,
        f: &F,
        x_accuracy: f64,
        guess: f64,
        bounds: Bounds,
        budget: &mut Budget,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
        Obs: Observer<Event, Action>,
    {
        if f.derivative(guess).is_none() {
            return Err(ConfigError::DerivativeRequired {
                solver: Self::METHOD,
            }
            .into());
        }

        let [x_min, x_max] = bounds.as_array();
        let f_min = evaluate::value(f, x_min, budget)?;
        let f_max = evaluate::value(f, x_max, budget)?;
        let mut bracket = match Bracket::check(bounds, f_min, f_max)? {
            Endpoints::Root(x) => return Ok(Solution::converged(Self::METHOD, x, budget)),
            Endpoints::Bracket(bracket) => bracket,
        };

        let mut dx_old = bounds.width();
        let mut dx = dx_old;
        let mut current = evaluate::point(f, guess, budget, Self::METHOD)?;
        let mut iter = 0;

        loop {
            let event = Event::Evaluated {
                method: Self::METHOD,
                iter,
                point: current,
                bracket: bracket.as_array(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Solution::stopped(Self::METHOD, current.x, budget));
            }
            iter += 1;

            let step = next_step(&current, &bracket, dx_old);
            dx_old = dx;
            dx = step.dx;
            trace!(
                "NewtonSafe: {:?} step to {} in {:?}",
                step.kind,
                step.x,
                bracket.as_array()
            );

            if dx.abs() < x_accuracy {
                return Ok(Solution::converged(Self::METHOD, step.x, budget));
            }

            current = evaluate::point(f, step.x, budget, Self::METHOD)?;
            bracket.shrink(current.x, current.value);
        }
    }
}
