//! Newton-Raphson iteration from a single seed.

use nlsolve_core::{Equation, Observer};

use crate::trace::Traced;

use super::{Action, Config, Error, Event, Kind, Solution};

/// How Newton's stopping rule compares the residual against epsilon.
///
/// [`ResidualTest::Signed`] accepts any `f(x) < epsilon`, so a large negative
/// residual passes as soon as the step is small. It is the default to keep
/// results stable for existing callers. [`ResidualTest::Absolute`] requires
/// `|f(x)| < epsilon`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResidualTest {
    #[default]
    Signed,
    Absolute,
}

impl ResidualTest {
    fn accepts(self, residual: f64, epsilon: f64) -> bool {
        match self {
            ResidualTest::Signed => residual < epsilon,
            ResidualTest::Absolute => residual.abs() < epsilon,
        }
    }
}

/// Newton's method has no bracket precondition, so this always succeeds.
///
/// Choosing a seed inside the basin of attraction is up to the caller.
///
/// # Errors
///
/// Never returns an error.
pub fn check(_equation: &Equation, _seed: f64) -> Result<(), Error> {
    Ok(())
}

/// Finds a root of `equation` by Newton-Raphson iteration from `seed`.
///
/// The solve stops once the step is below epsilon and the residual passes
/// the configured [`ResidualTest`].
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `f′` vanishes at an iterate, and
/// otherwise fails on non-finite iterates, observer stops, or the iteration
/// cap.
pub fn solve<Obs>(
    equation: &Equation,
    seed: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut observer = Traced::new(observer, config.log());
    let epsilon = config.epsilon();
    let residual_test = config.residual_test();
    let max_iters = config.max_iters_for(Kind::Newton);

    let mut x = seed;
    for iter in 1..=max_iters {
        let slope = equation.derivative(x);

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x, iter });
        }

        let next = x - equation.evaluate(x) / slope;
        let residual = equation.evaluate(next);

        Event {
            kind: Kind::Newton,
            iter,
            x: next,
            residual,
            bracket: None,
        }
        .emit(&mut observer)?;

        if (next - x).abs() < epsilon && residual_test.accepts(residual, epsilon) {
            return Ok(Solution::new(next, residual, iter, config.decimal_places()));
        }

        x = next;
    }

    Err(Error::IterationLimitExceeded { max_iters })
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    equation: &Equation,
    seed: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, seed, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sqrt2() -> Equation {
        Equation::new(|x| x * x - 2.0, |x| 2.0 * x, "x^2 - 2")
    }

    #[test]
    fn converges_quadratically() {
        let config = Config::new(1e-12, 12).expect("valid config");
        let mut steps = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            steps.push((event.x - 2.0_f64.sqrt()).abs());
            None
        };

        let solution = solve(&sqrt2(), 1.0, &config, observer).expect("should converge");

        assert_relative_eq!(solution.root(), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(solution.iterations() <= 6);
        // Error roughly squares each step until it reaches machine precision.
        assert!(steps[2] < steps[1] * steps[1] * 2.0);
    }

    #[test]
    fn zero_derivative_is_reported() {
        let config = Config::default();
        let err = solve_unobserved(&sqrt2(), 0.0, &config).expect_err("flat tangent");
        assert_eq!(err, Error::ZeroDerivative { x: 0.0, iter: 1 });
    }

    #[test]
    fn check_always_passes() {
        assert_eq!(check(&sqrt2(), f64::NAN), Ok(()));
    }

    #[test]
    fn signed_test_accepts_large_negative_residual() {
        // A triple root approached from below, scaled so the residual stays
        // large while the steps are already tiny.
        let eq = Equation::new(
            |x| 1e18 * (x - 1.0).powi(3),
            |x| 3e18 * (x - 1.0).powi(2),
            "1e18*(x - 1)^3",
        );
        let config = Config::new(1e-6, 6).expect("valid config");

        let signed = solve_unobserved(&eq, 0.0, &config).expect("signed test stops");
        assert!(signed.residual() < -1.0);

        let absolute = config.with_residual_test(ResidualTest::Absolute);
        let fixed = solve_unobserved(&eq, 0.0, &absolute).expect("absolute test stops");
        assert!(fixed.residual().abs() < 1e-6);
        assert!(fixed.iterations() > signed.iterations());
    }

    #[test]
    fn divergent_seed_hits_the_cap() {
        // Newton on atan overshoots further each step from |x0| > ~1.39.
        let eq = Equation::new(f64::atan, |x| 1.0 / (1.0 + x * x), "atan(x)");
        let config = Config::default().with_max_iters(8).expect("valid config");

        let err = solve_unobserved(&eq, 2.0, &config).expect_err("diverges");
        assert!(matches!(
            err,
            Error::IterationLimitExceeded { max_iters: 8 } | Error::NonFiniteIterate { .. }
        ));
    }
}
