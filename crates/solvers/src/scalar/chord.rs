//! Chord method: secant lines through a fixed bracket endpoint.
//!
//! The fixed endpoint is the one where `f` and `f″` share a sign, which keeps
//! every iterate on the same side of the root. Iteration starts from the
//! other endpoint.

use nlsolve_core::{Equation, Observer};

use crate::trace::Traced;

use super::{Action, Config, Error, Event, Kind, Solution};

/// Step of the central difference used to estimate `f″` from `f′`.
const DX: f64 = 1e-5;

/// Checks that `[left, right]` passes the root existence heuristic.
///
/// # Errors
///
/// Returns [`Error::NoRootOrAmbiguous`] if [`Equation::root_exists`] fails.
pub fn check(equation: &Equation, left: f64, right: f64) -> Result<(), Error> {
    super::bisection::check(equation, left, right)
}

/// Finds a root of `equation` on `[left, right]` with the chord method.
///
/// # Errors
///
/// Returns [`Error::DegenerateIteration`] if a secant is horizontal, and
/// otherwise fails like the other scalar solvers on non-finite iterates,
/// observer stops, or the iteration cap.
pub fn solve<Obs>(
    equation: &Equation,
    left: f64,
    right: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut observer = Traced::new(observer, config.log());
    let epsilon = config.epsilon();
    let max_iters = config.max_iters_for(Kind::Chord);

    let (fixed, start) = endpoints(equation, left, right);
    let f_fixed = equation.evaluate(fixed);

    let mut x = start;
    let mut f_x = equation.evaluate(x);

    for iter in 1..=max_iters {
        let denominator = f_x - f_fixed;

        #[allow(clippy::float_cmp)]
        if denominator == 0.0 {
            return Err(Error::DegenerateIteration { x, iter });
        }

        let next = x - f_x * (x - fixed) / denominator;
        let residual = equation.evaluate(next);

        Event {
            kind: Kind::Chord,
            iter,
            x: next,
            residual,
            bracket: Some([fixed.min(next), fixed.max(next)]),
        }
        .emit(&mut observer)?;

        if (next - x).abs() < epsilon && residual.abs() < epsilon {
            return Ok(Solution::new(next, residual, iter, config.decimal_places()));
        }

        x = next;
        f_x = residual;
    }

    Err(Error::IterationLimitExceeded { max_iters })
}

/// Runs the chord method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    equation: &Equation,
    left: f64,
    right: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, left, right, config, ())
}

/// Returns `(fixed, start)`.
///
/// The left endpoint is fixed when `f(left) * f″(left) > 0`, otherwise the
/// right one is.
fn endpoints(equation: &Equation, left: f64, right: f64) -> (f64, f64) {
    if equation.evaluate(left) * second_derivative(equation, left) > 0.0 {
        (left, right)
    } else {
        (right, left)
    }
}

fn second_derivative(equation: &Equation, x: f64) -> f64 {
    (equation.derivative(x + DX) - equation.derivative(x - DX)) / (2.0 * DX)
}
