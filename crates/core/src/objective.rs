/// A scalar function of one variable whose root is sought.
///
/// Implementations must be deterministic: the same `x` must always produce the
/// same value, so that repeated solves with the same configuration agree.
///
/// The derivative is optional. Solvers that step along `f'(x)` fail with a
/// configuration error when [`ObjectiveFunction::derivative`] returns `None`.
pub trait ObjectiveFunction {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`, or returns `None` if no derivative is available.
    fn derivative(&self, _x: f64) -> Option<f64> {
        None
    }
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        (**self).derivative(x)
    }
}

/// An objective built from a closure, without a derivative.
///
/// Created with [`from_fn`]. Attach a derivative with
/// [`Function::with_derivative`].
#[derive(Debug, Clone, Copy)]
pub struct Function<F> {
    f: F,
}

/// An objective built from a value closure and a derivative closure.
#[derive(Debug, Clone, Copy)]
pub struct Differentiable<F, D> {
    f: F,
    df: D,
}

/// Wraps a closure as an [`ObjectiveFunction`] with no derivative.
///
/// # Example
///
/// ```rust
/// use rootfind_core::{ObjectiveFunction, from_fn};
///
/// let f = from_fn(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x);
///
/// assert_eq!(f.value(2.0), 2.0);
/// assert_eq!(f.derivative(2.0), Some(4.0));
/// ```
pub const fn from_fn<F>(f: F) -> Function<F>
where
    F: Fn(f64) -> f64,
{
    Function { f }
}

impl<F> Function<F>
where
    F: Fn(f64) -> f64,
{
    /// Attaches an analytic derivative.
    pub fn with_derivative<D>(self, df: D) -> Differentiable<F, D>
    where
        D: Fn(f64) -> f64,
    {
        Differentiable { f: self.f, df }
    }
}

impl<F> ObjectiveFunction for Function<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F, D> ObjectiveFunction for Differentiable<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        Some((self.df)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Cubic with a hand-written derivative.
    struct Cubic;

    impl ObjectiveFunction for Cubic {
        fn value(&self, x: f64) -> f64 {
            x.powi(3) - x - 2.0
        }

        fn derivative(&self, x: f64) -> Option<f64> {
            Some(3.0 * x * x - 1.0)
        }
    }

    #[test]
    fn closure_without_derivative() {
        let f = from_fn(f64::sin);

        assert_relative_eq!(f.value(0.5), 0.5_f64.sin());
        assert!(f.derivative(0.5).is_none());
    }

    #[test]
    fn closure_with_derivative() {
        let f = from_fn(|x: f64| x.exp() - 1.0).with_derivative(f64::exp);

        assert_relative_eq!(f.value(0.0), 0.0);
        assert_relative_eq!(f.derivative(1.0).expect("derivative"), 1.0_f64.exp());
    }

    #[test]
    fn references_forward_to_target() {
        let cubic = Cubic;
        let by_ref = &cubic;

        assert_relative_eq!(by_ref.value(2.0), 4.0);
        assert_eq!(by_ref.derivative(2.0), Some(11.0));
    }

    #[test]
    fn default_derivative_is_none() {
        struct Linear;
        impl ObjectiveFunction for Linear {
            fn value(&self, x: f64) -> f64 {
                2.0 * x
            }
        }

        assert!(Linear.derivative(1.0).is_none());
    }
}
