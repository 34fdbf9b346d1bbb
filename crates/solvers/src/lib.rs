//! One-dimensional root finders built on [`rootfind_core`].
//!
//! The [`equation`] module provides a plain Newton–Raphson solver that hands
//! off to a bracket-preserving safeguarded Newton solver whenever a step
//! leaves the search interval.

pub mod equation;
