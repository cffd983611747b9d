//! Simple (fixed-point) iteration with automatic relaxation.
//!
//! The equation `f(x) = 0` is rewritten as `x = phi(x)` with
//! `phi(t) = t + lambda * f(t)`, where `lambda = 1 / max(|f′(left)|, |f′(right)|)`.
//! Before iterating, the bracket is sampled to confirm that `phi` is a
//! contraction (`|phi′(x)| < 1`) everywhere on it. A bracket that fails the
//! test is rejected without running a single iteration.

use nlsolve_core::{Equation, Observer};

use crate::trace::Traced;

use super::{Action, Config, Error, Event, Kind, Solution};

/// Number of equally spaced points, endpoints included, used by the
/// contraction test.
pub const SAMPLES: usize = 100;

/// Checks that `[left, right]` passes the root existence heuristic.
///
/// The contraction test runs in [`solve`], since it needs the relaxation
/// parameter.
///
/// # Errors
///
/// Returns [`Error::NoRootOrAmbiguous`] if [`Equation::root_exists`] fails.
pub fn check(equation: &Equation, left: f64, right: f64) -> Result<(), Error> {
    super::bisection::check(equation, left, right)
}

/// Computes the relaxation parameter `lambda` for `[left, right]`.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivativeOnBracket`] if `f′` is zero at both ends.
pub fn relaxation(equation: &Equation, left: f64, right: f64) -> Result<f64, Error> {
    let max_derivative = equation
        .derivative(left)
        .abs()
        .max(equation.derivative(right).abs());

    #[allow(clippy::float_cmp)]
    if max_derivative == 0.0 {
        return Err(Error::ZeroDerivativeOnBracket { left, right });
    }

    Ok(1.0 / max_derivative)
}

/// Samples `|phi′(x)| = |1 + lambda * f′(x)|` at [`SAMPLES`] points.
///
/// # Errors
///
/// Returns [`Error::ConvergenceConditionViolated`] for the first sample where
/// `|phi′|` is not below one, with the sample and the offending magnitude.
pub fn verify_contraction(
    equation: &Equation,
    left: f64,
    right: f64,
    lambda: f64,
) -> Result<(), Error> {
    let last = SAMPLES - 1;

    for i in 0..SAMPLES {
        let x = if i == last {
            right
        } else {
            left + (right - left) * i as f64 / last as f64
        };
        let derivative = (1.0 + lambda * equation.derivative(x)).abs();
        if derivative >= 1.0 || derivative.is_nan() {
            return Err(Error::ConvergenceConditionViolated { x, derivative });
        }
    }

    Ok(())
}

/// Finds a root of `equation` on `[left, right]` by simple iteration.
///
/// Iteration starts from the midpoint and stops once both the step and
/// `|f(x)|` are at most epsilon.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivativeOnBracket`] or
/// [`Error::ConvergenceConditionViolated`] before iterating, and
/// [`Error::IterationLimitExceeded`] if the cap is reached. Non-finite
/// iterates and observer stops fail as in the other scalar solvers.
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
    let max_iters = config.max_iters_for(Kind::SimpleIteration);

    let lambda = relaxation(equation, left, right)?;
    verify_contraction(equation, left, right, lambda)?;

    let phi = |t: f64| t + lambda * equation.evaluate(t);
    let bracket = [left.min(right), left.max(right)];

    let mut x = 0.5 * (left + right);
    for iter in 1..=max_iters {
        let next = phi(x);
        let residual = equation.evaluate(next);

        Event {
            kind: Kind::SimpleIteration,
            iter,
            x: next,
            residual,
            bracket: Some(bracket),
        }
        .emit(&mut observer)?;

        if (next - x).abs() <= epsilon && residual.abs() <= epsilon {
            return Ok(Solution::new(next, residual, iter, config.decimal_places()));
        }

        x = next;
    }

    Err(Error::IterationLimitExceeded { max_iters })
}

/// Runs simple iteration without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn relaxation_uses_the_steeper_end() {
        let eq = Equation::new(|x| 1.0 - x * x, |x| -2.0 * x, "1 - x^2");
        let lambda = relaxation(&eq, 0.5, 2.0).expect("nonzero slope");
        assert_relative_eq!(lambda, 0.25);
    }

    #[test]
    fn relaxation_needs_a_nonzero_slope() {
        let eq = Equation::new(|x| x.powi(3) / 3.0 - x, |x| x * x - 1.0, "x^3/3 - x");
        assert_eq!(
            relaxation(&eq, -1.0, 1.0),
            Err(Error::ZeroDerivativeOnBracket {
                left: -1.0,
                right: 1.0
            })
        );
    }

    #[test]
    fn contraction_test_includes_the_endpoints() {
        // phi′ = 1 - x is below one on (0, 1] but equals one at x = 0.
        let eq = Equation::new(|x| -x * x / 2.0, |x| -x, "-x^2/2");
        let err = verify_contraction(&eq, 0.0, 1.0, 1.0).expect_err("violated at the left end");
        assert_eq!(
            err,
            Error::ConvergenceConditionViolated {
                x: 0.0,
                derivative: 1.0
            }
        );
    }

    #[test]
    fn last_sample_is_the_right_end() {
        // Stepping 99 times by (0.9 - 0.3) / 99 from 0.3 rounds above 0.9,
        // where f′ is undefined.
        let eq = Equation::new(
            |x| 0.6 - x,
            |x| if x > 0.9 { f64::NAN } else { -1.0 },
            "0.6 - x",
        );
        assert_eq!(verify_contraction(&eq, 0.3, 0.9, 1.0), Ok(()));
    }

    #[test]
    fn slow_contraction_hits_the_iteration_cap() {
        // Triple root at zero: phi(x) = x - x³/18.75 creeps toward it far too
        // slowly to meet the tolerance.
        let eq = Equation::new(|x| -x.powi(3), |x| -3.0 * x * x, "-x^3");
        let config = Config::new(1e-9, 9).expect("valid config");

        check(&eq, -1.0, 2.5).expect("valid bracket");
        let lambda = relaxation(&eq, -1.0, 2.5).expect("nonzero slope");
        verify_contraction(&eq, -1.0, 2.5, lambda).expect("phi contracts on the samples");

        let err = solve_unobserved(&eq, -1.0, 2.5, &config).expect_err("cap reached");
        assert_eq!(err, Error::IterationLimitExceeded { max_iters: 50_000 });
    }

    #[test]
    fn increasing_functions_are_not_contractions() {
        // lambda is positive, so phi′ = 1 + lambda f′ > 1 wherever f′ > 0.
        let eq = Equation::new(|x| x - 0.5, |_| 1.0, "x - 0.5");
        let config = Config::default();
        let err = solve_unobserved(&eq, 0.0, 1.0, &config).expect_err("not a contraction");
        assert_eq!(
            err,
            Error::ConvergenceConditionViolated {
                x: 0.0,
                derivative: 2.0
            }
        );
    }

    #[test]
    fn converges_on_a_decreasing_line() {
        let eq = Equation::new(|x| 0.3 - 0.5 * x, |_| -0.5, "0.3 - x/2");
        let config = Config::new(1e-9, 9).expect("valid config");
        let solution = solve_unobserved(&eq, 0.0, 1.0, &config).expect("should converge");

        // lambda = 2 makes phi constant, so the first step lands on the root.
        assert_relative_eq!(solution.root(), 0.6, epsilon = 1e-12);
        assert_eq!(solution.iterations(), 2);
    }
}
