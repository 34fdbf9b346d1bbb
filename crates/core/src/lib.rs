//! Core traits for one-dimensional root finding.
//!
//! This crate defines the abstractions the solvers build on:
//!
//! - [`ObjectiveFunction`] — a scalar function with an optional derivative
//! - [`from_fn`] — adapts closures into objective functions
//! - [`Observer`] — receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Differentiable, Function, ObjectiveFunction, from_fn};
pub use observer::Observer;
