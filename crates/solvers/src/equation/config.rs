use thiserror::Error;

use super::Method;

/// Evaluation budget used by [`Config::default`].
pub const DEFAULT_MAX_EVALS: usize = 100;

/// Configuration shared by the one-dimensional solvers.
///
/// `lower_bound` and `upper_bound` are optional hard limits. They only
/// constrain [`Solver1D::solve_from_step`], which grows a bracket outward from
/// a guess; an explicit interval passed to [`Solver1D::solve`] is used as is.
///
/// [`Solver1D::solve`]: super::Solver1D::solve
/// [`Solver1D::solve_from_step`]: super::Solver1D::solve_from_step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_evals: usize,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
}

/// Errors that can occur when configuring a solver or validating its inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("max_evals must be at least 1")]
    ZeroMaxEvals,

    #[error("accuracy must be finite and positive, got {got}")]
    Accuracy { got: f64 },

    #[error("step must be finite and positive, got {got}")]
    Step { got: f64 },

    #[error("bounds must be finite")]
    NonFiniteBound,

    #[error("inverted bounds: x_min={x_min} > x_max={x_max}")]
    InvertedBounds { x_min: f64, x_max: f64 },

    #[error("guess {guess} outside [{x_min}, {x_max}]")]
    GuessOutOfBounds { guess: f64, x_min: f64, x_max: f64 },

    #[error("{solver} requires the function's derivative")]
    DerivativeRequired { solver: Method },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_evals: DEFAULT_MAX_EVALS,
            lower_bound: None,
            upper_bound: None,
        }
    }
}

impl Config {
    /// Creates a config with the given evaluation budget and no limits.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMaxEvals` if `max_evals` is zero.
    pub fn new(max_evals: usize) -> Result<Self, ConfigError> {
        Self::default().with_max_evals(max_evals)
    }

    /// Returns a copy with a different evaluation budget.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMaxEvals` if `max_evals` is zero.
    pub fn with_max_evals(self, max_evals: usize) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::ZeroMaxEvals);
        }
        Ok(Self { max_evals, ..self })
    }

    /// Returns a copy that never searches below `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is non-finite or above the upper bound.
    pub fn with_lower_bound(self, x: f64) -> Result<Self, ConfigError> {
        if !x.is_finite() {
            return Err(ConfigError::NonFiniteBound);
        }
        if let Some(upper) = self.upper_bound
            && x > upper
        {
            return Err(ConfigError::InvertedBounds {
                x_min: x,
                x_max: upper,
            });
        }
        Ok(Self {
            lower_bound: Some(x),
            ..self
        })
    }

    /// Returns a copy that never searches above `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is non-finite or below the lower bound.
    pub fn with_upper_bound(self, x: f64) -> Result<Self, ConfigError> {
        if !x.is_finite() {
            return Err(ConfigError::NonFiniteBound);
        }
        if let Some(lower) = self.lower_bound
            && x < lower
        {
            return Err(ConfigError::InvertedBounds {
                x_min: lower,
                x_max: x,
            });
        }
        Ok(Self {
            upper_bound: Some(x),
            ..self
        })
    }

    /// Returns the maximum number of function evaluations per solve.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the lower search limit, if any.
    #[must_use]
    pub fn lower_bound(&self) -> Option<f64> {
        self.lower_bound
    }

    /// Returns the upper search limit, if any.
    #[must_use]
    pub fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }

    /// Clamps `x` to the configured limits.
    pub(super) fn clamp(&self, x: f64) -> f64 {
        let x = self.lower_bound.map_or(x, |lower| x.max(lower));
        self.upper_bound.map_or(x, |upper| x.min(upper))
    }

    /// Checks that `guess` is finite and within the configured limits.
    pub(super) fn check_guess(&self, guess: f64) -> Result<(), ConfigError> {
        let x_min = self.lower_bound.unwrap_or(f64::NEG_INFINITY);
        let x_max = self.upper_bound.unwrap_or(f64::INFINITY);
        if guess.is_finite() && guess >= x_min && guess <= x_max {
            Ok(())
        } else {
            Err(ConfigError::GuessOutOfBounds {
                guess,
                x_min,
                x_max,
            })
        }
    }
}

/// Validates a requested accuracy, raising it to machine epsilon if smaller.
pub(super) fn accuracy(x_accuracy: f64) -> Result<f64, ConfigError> {
    if !x_accuracy.is_finite() || x_accuracy <= 0.0 {
        return Err(ConfigError::Accuracy { got: x_accuracy });
    }
    Ok(x_accuracy.max(f64::EPSILON))
}

/// Validates the initial step used to search for a bracket.
pub(super) fn step(step: f64) -> Result<f64, ConfigError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ConfigError::Step { got: step });
    }
    Ok(step)
}
