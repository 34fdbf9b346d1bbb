//! Newton–Raphson iteration with a safeguarded fallback.
//!
//! # Algorithm
//!
//! From the guess, the solver repeatedly steps `x ← x - f(x)/f'(x)` and stops
//! once a step is smaller than the requested accuracy. The bounds are never
//! changed and no sign change across them is required.
//!
//! When a step lands outside the bounds, is not finite because the
//! derivative vanished, or comes from an infinite derivative, Newton stops
//! iterating. It builds a fresh
//! [`NewtonSafe`] whose budget is whatever Newton has not spent, and returns
//! that solver's result for the same bounds, starting from the last in-bounds
//! iterate. The handoff is not an error; an error only surfaces if the
//! safeguarded solve itself fails.
//!
//! # Evaluation budget
//!
//! The guess and each later iterate cost one evaluation each, covering both
//! `f` and `f'`. A missing derivative is detected before anything is spent.
//! If the safeguarded solver runs out of its share, the error names Newton's
//! configured budget.
//!
//! # Observer events
//!
//! [`Event::Evaluated`] follows every evaluation (`iter == 0` for the guess)
//! and [`Event::Handoff`] precedes a handoff. After a handoff the observer
//! keeps receiving the safeguarded solver's events.


use log::debug;

use rootfind_core::{ObjectiveFunction, Observer};

use super::{
    Action, Bounds, Budget, Config, Error, Event, Method, NewtonSafe, Solution, Solver1D,
    evaluate,
};

/// Newton–Raphson solver that falls back to [`NewtonSafe`].
///
/// Requires an analytic derivative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Newton {
    config: Config,
}

impl Newton {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// How the Newton iteration ended.
enum Outcome {
    Done(Solution),
    /// A step left the bounds; continue with the safeguarded solver from `from`.
    Handoff { from: f64 },
}

impl Newton {
    fn newton_iterate<F, Obs>(
        f: &F,
        x_accuracy: f64,
        guess: f64,
        bounds: Bounds,
        budget: &mut Budget,
        observer: &mut Obs,
    ) -> Result<Outcome, Error>
    where
        F: ObjectiveFunction + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let mut current = evaluate::point(f, guess, budget, Method::Newton)?;
        let mut iter = 0;

        loop {
            let event = Event::Evaluated {
                method: Method::Newton,
                iter,
                point: current,
                bracket: bounds.as_array(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Outcome::Done(Solution::stopped(
                    Method::Newton,
                    current.x,
                    budget,
                )));
            }
            iter += 1;

            let dx = current.newton_step();
            let root = current.x - dx;

            // An infinite derivative gives a zero step that would pass as converged.
            if !dx.is_finite() || !current.derivative.is_finite() || !bounds.contains(root) {
                return Ok(Outcome::Handoff { from: current.x });
            }
            if dx.abs() < x_accuracy {
                return Ok(Outcome::Done(Solution::converged(
                    Method::Newton,
                    root,
                    budget,
                )));
            }

            current = evaluate::point(f, root, budget, Method::Newton)?;
        }
    }

    fn hand_off<F, Obs>(
        &self,
        f: &F,
        x_accuracy: f64,
        from: f64,
        bounds: Bounds,
        budget: &mut Budget,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let remaining = budget.remaining();
        debug!(
            "Newton: left [{}, {}], continuing as NewtonSafe from {from} with {remaining} evaluations",
            bounds.x_min(),
            bounds.x_max()
        );

        let event = Event::Handoff {
            from,
            bounds: bounds.as_array(),
            remaining,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(Method::Newton, from, budget));
        }

        if remaining == 0 {
            return Err(budget.exhausted());
        }

        let safe = NewtonSafe::new(self.config.with_max_evals(remaining)?);
        let mut delegated = Budget::new(safe.config().max_evals());
        let result = safe.iterate(f, x_accuracy, from, bounds, &mut delegated, observer);
        budget.absorb(&delegated);

        match result {
            Ok(solution) => Ok(Solution {
                evals: budget.used(),
                ..solution
            }),
            Err(Error::MaxEvals { .. }) => Err(budget.exhausted()),
            Err(error) => Err(error),
        }
    }
}

impl Solver1D for Newton {
    const METHOD: Method = Method::Newton;

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
        match Self::newton_iterate(f, x_accuracy, guess, bounds, budget, observer)? {
            Outcome::Done(solution) => Ok(solution),
            Outcome::Handoff { from } => {
                self.hand_off(f, x_accuracy, from, bounds, budget, observer)
            }
        }
    }
}
