use thiserror::Error;

use super::ConfigError;

/// Errors that can occur when establishing a bracket around a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoint values are NaN or infinite.
    #[error("non-finite endpoint value: f({x_min}) = {f_min}, f({x_max}) = {f_max}")]
    NonFinite {
        x_min: f64,
        f_min: f64,
        x_max: f64,
        f_max: f64,
    },

    /// Endpoint values share a sign.
    #[error("root not bracketed: f({x_min}) = {f_min}, f({x_max}) = {f_max}")]
    NoSignChange {
        x_min: f64,
        f_min: f64,
        x_max: f64,
        f_max: f64,
    },

    /// The outward search ran out of budget or room before finding a sign change.
    #[error(
        "unable to bracket root in {max_evals} function evaluations \
         (last bracket attempt: [{x_min}, {x_max}])"
    )]
    NotFound {
        max_evals: usize,
        x_min: f64,
        x_max: f64,
    },
}

/// A validated search interval `[x_min, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    x_min: f64,
    x_max: f64,
}

impl Bounds {
    /// Creates bounds from finite, ordered endpoints.
    ///
    /// Equal endpoints are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonFiniteBound` or `ConfigError::InvertedBounds`.
    pub fn new(x_min: f64, x_max: f64) -> Result<Self, ConfigError> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(ConfigError::NonFiniteBound);
        }
        if x_min > x_max {
            return Err(ConfigError::InvertedBounds { x_min, x_max });
        }
        Ok(Self { x_min, x_max })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x_min, self.x_max]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.x_min + self.x_max)
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    /// Checks that a starting guess lies in the closed interval.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::GuessOutOfBounds` otherwise.
    pub fn check_guess(&self, guess: f64) -> Result<(), ConfigError> {
        if self.contains(guess) {
            Ok(())
        } else {
            Err(ConfigError::GuessOutOfBounds {
                guess,
                x_min: self.x_min,
                x_max: self.x_max,
            })
        }
    }
}

/// What the endpoint values say about the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Endpoints {
    /// An endpoint is an exact root.
    Root(f64),
    /// The endpoints straddle a root.
    Bracket(Bracket),
}

/// A bracket oriented by the sign of the function.
///
/// `negative` is the end where `f < 0` and `positive` the end where `f > 0`.
/// Either one may be the left end of the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    negative: f64,
    positive: f64,
}

impl Bracket {
    /// Classifies an interval by its endpoint values.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either value is NaN or infinite,
    /// and `BracketError::NoSignChange` if both share a sign.
    #[allow(clippy::float_cmp)]
    pub(super) fn check(bounds: Bounds, f_min: f64, f_max: f64) -> Result<Endpoints, BracketError> {
        let [x_min, x_max] = bounds.as_array();

        if !f_min.is_finite() || !f_max.is_finite() {
            return Err(BracketError::NonFinite {
                x_min,
                f_min,
                x_max,
                f_max,
            });
        }

        if f_min == 0.0 {
            return Ok(Endpoints::Root(x_min));
        }
        if f_max == 0.0 {
            return Ok(Endpoints::Root(x_max));
        }

        if (f_min < 0.0) == (f_max < 0.0) {
            return Err(BracketError::NoSignChange {
                x_min,
                f_min,
                x_max,
                f_max,
            });
        }

        let bracket = if f_min < 0.0 {
            Self {
                negative: x_min,
                positive: x_max,
            }
        } else {
            Self {
                negative: x_max,
                positive: x_min,
            }
        };
        Ok(Endpoints::Bracket(bracket))
    }

    /// Returns the end where `f < 0`.
    pub(super) fn negative(&self) -> f64 {
        self.negative
    }

    /// Returns the end where `f > 0`.
    pub(super) fn positive(&self) -> f64 {
        self.positive
    }

    /// Returns the signed half width, measured from the negative end.
    pub(super) fn half_step(&self) -> f64 {
        0.5 * (self.positive - self.negative)
    }

    /// Returns the bracket as an ordered `[low, high]` array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        if self.negative <= self.positive {
            [self.negative, self.positive]
        } else {
            [self.positive, self.negative]
        }
    }

    /// Replaces the end on the same side as `value`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if value < 0.0 {
            self.negative = x;
        } else {
            self.positive = x;
        }
    }
}
