use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur while solving for a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    Bracket(#[from] BracketError),

    #[error("maximum number of function evaluations ({max_evals}) exceeded")]
    MaxEvals { max_evals: usize },

    #[error("non-finite function value at x={x}: {value}")]
    NonFiniteValue { x: f64, value: f64 },
}
