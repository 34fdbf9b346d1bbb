//! Objective functions shared by the integration tests.

use std::cell::Cell;

use rootfind_core::ObjectiveFunction;

/// A polynomial with coefficients in ascending order of degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from `[c0, c1, c2, ...]`.
    #[must_use]
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Creates the monic polynomial with the given roots.
    #[must_use]
    pub fn from_roots(roots: &[f64]) -> Self {
        let coefficients = roots.iter().fold(vec![1.0], |acc, &root| {
            let mut next = vec![0.0; acc.len() + 1];
            for (i, c) in acc.iter().enumerate() {
                next[i + 1] += c;
                next[i] -= c * root;
            }
            next
        });
        Self { coefficients }
    }
}

impl ObjectiveFunction for Polynomial {
    fn value(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        let slope = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, c)| acc * x + c * power as f64);
        Some(slope)
    }
}

/// Wraps an objective and counts how many times its value is requested.
#[derive(Debug)]
pub struct Counting<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F> Counting<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of times `value` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: ObjectiveFunction> ObjectiveFunction for Counting<F> {
    fn value(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.value(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        self.inner.derivative(x)
    }
}
