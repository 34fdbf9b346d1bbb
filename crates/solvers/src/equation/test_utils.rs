use std::cell::Cell;

use rootfind_core::ObjectiveFunction;

/// Wraps an objective and counts how many times its value is requested.
#[derive(Debug)]
pub(crate) struct Counting<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F> Counting<F> {
    pub(crate) fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of times `value` has been called.
    #[must_use]
    pub(crate) fn calls(&self) -> usize {
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

#[cfg(test)]
mod tests {
    use super::*;

    use rootfind_core::from_fn;

    #[test]
    fn counts_values_but_not_derivatives() {
        let f = Counting::new(from_fn(|x: f64| 3.0 * x).with_derivative(|_| 3.0));

        assert_eq!(f.value(1.0), 3.0);
        assert_eq!(f.derivative(1.0), Some(3.0));
        assert_eq!(f.value(2.0), 6.0);
        assert_eq!(f.calls(), 2);
    }
}
