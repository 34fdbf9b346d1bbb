use log::trace;

use rootfind_core::ObjectiveFunction;

use super::{Bounds, BracketError, Budget, Config, Error, evaluate};

/// Factor by which the trial bracket grows on each outward move.
const GROWTH_FACTOR: f64 = 1.6;

/// Outcome of searching outward from a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Expansion {
    /// A trial point is an exact root.
    Root(f64),
    /// The interval straddles a root.
    Bracket(Bounds),
}

/// Grows an interval outward from `guess` until `f` changes sign.
///
/// The first trial end sits one `step` below the guess when `f(guess) > 0`
/// and one `step` above it otherwise. After that, whichever end has the
/// smaller `|f|` moves outward by `GROWTH_FACTOR` times the current width.
/// All trial points are clamped to the limits in `config`.
///
/// # Errors
///
/// - `BracketError::NotFound` if the budget runs out, or both ends are pinned
///   at the limits, before a sign change is found
/// - `Error::NonFiniteValue` if `f` is NaN or infinite at a trial point
#[allow(clippy::float_cmp)]
pub(super) fn expand<F>(
    f: &F,
    guess: f64,
    step: f64,
    config: &Config,
    budget: &mut Budget,
) -> Result<Expansion, Error>
where
    F: ObjectiveFunction + ?Sized,
{
    let f_guess = sample(f, guess, budget, [guess, guess])?;

    if f_guess == 0.0 {
        return Ok(Expansion::Root(guess));
    }

    let (mut x_min, mut f_min, mut x_max, mut f_max) = if f_guess > 0.0 {
        let x_min = config.clamp(guess - step);
        let f_min = sample(f, x_min, budget, [x_min, guess])?;
        (x_min, f_min, guess, f_guess)
    } else {
        let x_max = config.clamp(guess + step);
        let f_max = sample(f, x_max, budget, [guess, x_max])?;
        (guess, f_guess, x_max, f_max)
    };

    loop {
        if f_min == 0.0 {
            return Ok(Expansion::Root(x_min));
        }
        if f_max == 0.0 {
            return Ok(Expansion::Root(x_max));
        }
        if (f_min < 0.0) != (f_max < 0.0) {
            return Ok(Expansion::Bracket(Bounds::new(x_min, x_max)?));
        }

        let width = (x_max - x_min).max(step);
        let lower = config.clamp(x_min - GROWTH_FACTOR * width);
        let upper = config.clamp(x_max + GROWTH_FACTOR * width);

        let move_lower = match (lower < x_min, upper > x_max) {
            (false, false) => {
                return Err(BracketError::NotFound {
                    max_evals: budget.max_evals(),
                    x_min,
                    x_max,
                }
                .into());
            }
            (true, false) => true,
            (false, true) => false,
            (true, true) => f_min.abs() < f_max.abs(),
        };

        if move_lower {
            x_min = lower;
            f_min = sample(f, x_min, budget, [x_min, x_max])?;
        } else {
            x_max = upper;
            f_max = sample(f, x_max, budget, [x_min, x_max])?;
        }
        trace!("bracket search: [{x_min}, {x_max}] -> [{f_min}, {f_max}]");
    }
}

/// Evaluates a trial point, reporting budget exhaustion as a failed search.
fn sample<F>(f: &F, x: f64, budget: &mut Budget, attempt: [f64; 2]) -> Result<f64, Error>
where
    F: ObjectiveFunction + ?Sized,
{
    let value = evaluate::value(f, x, budget).map_err(|error| match error {
        Error::MaxEvals { max_evals } => Error::Bracket(BracketError::NotFound {
            max_evals,
            x_min: attempt[0],
            x_max: attempt[1],
        }),
        error => error,
    })?;

    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }
    Ok(value)
}
