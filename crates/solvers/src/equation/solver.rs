use log::{debug, warn};

use rootfind_core::{ObjectiveFunction, Observer};

use super::{
    Action, Bounds, Budget, Config, ConfigError, Error, Event, Method, Solution, config,
    search::{self, Expansion},
};

/// Shared contract of the one-dimensional solvers.
///
/// A solver value holds only its [`Config`]. Every call to a `solve` method
/// builds its own iteration state and evaluation [`Budget`], so a configured
/// solver can be reused and the same inputs always give the same result.
pub trait Solver1D {
    /// Identifies the solver in logs, events, and errors.
    const METHOD: Method;

    /// Returns the solver configuration.
    fn config(&self) -> &Config;

    /// Returns the solver configuration for modification.
    fn config_mut(&mut self) -> &mut Config;

    /// Runs the iteration on validated inputs, charging `budget`.
    ///
    /// `x_accuracy` is positive, `bounds` are ordered, and `guess` lies within
    /// them. Prefer [`solve`](Self::solve) or
    /// [`solve_observed`](Self::solve_observed), which check those conditions
    /// and log the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver cannot reach the requested accuracy.
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
        Obs: Observer<Event, Action>;

    /// Sets the maximum number of function evaluations per solve.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMaxEvals` if `max_evals` is zero.
    fn set_max_evals(&mut self, max_evals: usize) -> Result<(), ConfigError> {
        let config = self.config().with_max_evals(max_evals)?;
        *self.config_mut() = config;
        Ok(())
    }

    /// Sets a lower limit for [`solve_from_step`](Self::solve_from_step).
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is non-finite or above the upper limit.
    fn set_lower_bound(&mut self, x: f64) -> Result<(), ConfigError> {
        let config = self.config().with_lower_bound(x)?;
        *self.config_mut() = config;
        Ok(())
    }

    /// Sets an upper limit for [`solve_from_step`](Self::solve_from_step).
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is non-finite or below the lower limit.
    fn set_upper_bound(&mut self, x: f64) -> Result<(), ConfigError> {
        let config = self.config().with_upper_bound(x)?;
        *self.config_mut() = config;
        Ok(())
    }

    /// Finds a root of `f` in `bounds`, starting from `guess`.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the accuracy, bounds, guess, or derivative are invalid
    /// - `Error::Bracket` if the solver needs a sign change that is not there
    /// - `Error::MaxEvals` if the evaluation budget runs out
    /// - `Error::NonFiniteValue` if `f` returns NaN or infinity mid-solve
    fn solve<F>(
        &self,
        f: &F,
        x_accuracy: f64,
        guess: f64,
        bounds: [f64; 2],
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
    {
        self.solve_observed(f, x_accuracy, guess, bounds, ())
    }

    /// Finds a root like [`solve`](Self::solve), reporting each step to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    fn solve_observed<F, Obs>(
        &self,
        f: &F,
        x_accuracy: f64,
        guess: f64,
        bounds: [f64; 2],
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let x_accuracy = config::accuracy(x_accuracy)?;
        let [x_min, x_max] = bounds;
        let bounds = Bounds::new(x_min, x_max)?;
        bounds.check_guess(guess)?;

        let mut budget = Budget::new(self.config().max_evals());
        debug!(
            "{}: solving on [{x_min}, {x_max}] from {guess} with {} evaluations",
            Self::METHOD,
            budget.max_evals()
        );

        let result = self.iterate(f, x_accuracy, guess, bounds, &mut budget, &mut observer);
        log_outcome(Self::METHOD, &result);
        result
    }

    /// Finds a root of `f` by first growing a bracket outward from `guess`.
    ///
    /// The first trial interval is one `step` wide. Once `f` changes sign
    /// across it, the solver runs on that interval from its midpoint with
    /// whatever budget the search left. Configured lower and upper limits
    /// bound the search.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the accuracy, step, or guess are invalid
    /// - `Error::Bracket` with `BracketError::NotFound` if no sign change is found
    /// - any error from [`solve`](Self::solve) once a bracket is found
    fn solve_from_step<F>(
        &self,
        f: &F,
        x_accuracy: f64,
        guess: f64,
        step: f64,
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
    {
        self.solve_from_step_observed(f, x_accuracy, guess, step, ())
    }

    /// Like [`solve_from_step`](Self::solve_from_step), reporting each solver
    /// step to `observer`. The bracket search itself emits no events.
    ///
    /// # Errors
    ///
    /// Same as [`solve_from_step`](Self::solve_from_step).
    fn solve_from_step_observed<F, Obs>(
        &self,
        f: &F,
        x_accuracy: f64,
        guess: f64,
        step: f64,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: ObjectiveFunction + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let x_accuracy = config::accuracy(x_accuracy)?;
        let step = config::step(step)?;
        self.config().check_guess(guess)?;

        let mut budget = Budget::new(self.config().max_evals());
        debug!(
            "{}: searching for a bracket from {guess} with step {step}",
            Self::METHOD
        );

        let result = search::expand(f, guess, step, self.config(), &mut budget).and_then(
            |expansion| match expansion {
                Expansion::Root(x) => Ok(Solution::converged(Self::METHOD, x, &budget)),
                Expansion::Bracket(bounds) => {
                    debug!(
                        "{}: bracketed root in [{}, {}] after {} evaluations",
                        Self::METHOD,
                        bounds.x_min(),
                        bounds.x_max(),
                        budget.used()
                    );
                    self.iterate(
                        f,
                        x_accuracy,
                        bounds.midpoint(),
                        bounds,
                        &mut budget,
                        &mut observer,
                    )
                }
            },
        );
        log_outcome(Self::METHOD, &result);
        result
    }
}

fn log_outcome(method: Method, result: &Result<Solution, Error>) {
    match result {
        Ok(solution) => debug!(
            "{method}: {:?} at x = {} after {} evaluations ({})",
            solution.status, solution.x, solution.evals, solution.method
        ),
        Err(Error::MaxEvals { max_evals }) => {
            warn!("{method}: no convergence within {max_evals} evaluations");
        }
        Err(error) => debug!("{method}: {error}"),
    }
}
