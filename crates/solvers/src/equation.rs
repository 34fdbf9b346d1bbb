//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! Every solver here works on an [`ObjectiveFunction`] with an analytic
//! derivative, an interval `[x_min, x_max]`, a starting guess inside it, an
//! accuracy on `x`, and a budget of function evaluations.
//!
//! # Solvers
//!
//! - [`Newton`] — pure Newton–Raphson. Fast near a simple root; when a step
//!   leaves the interval it continues as [`NewtonSafe`] with whatever budget
//!   is left.
//! - [`NewtonSafe`] — Newton steps guarded by bisection. Requires a sign
//!   change across the interval and never leaves the shrinking bracket.
//!
//! Both implement [`Solver1D`], which also provides
//! [`Solver1D::solve_from_step`] for searching out a bracket from a guess.
//!
//! [`ObjectiveFunction`]: rootfind_core::ObjectiveFunction

mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod search;
mod solution;
mod solver;

#[cfg(test)]
mod test_utils;

pub mod newton;
pub mod newton_safe;

pub use bracket::{Bounds, BracketError};
pub use config::{Config, ConfigError, DEFAULT_MAX_EVALS};
pub use error::Error;
pub use evaluate::{Budget, Point};
pub use event::{Action, Event};
pub use newton::Newton;
pub use newton_safe::NewtonSafe;
pub use solution::{Method, Solution, Status};
pub use solver::Solver1D;
