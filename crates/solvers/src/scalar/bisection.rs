//! Bisection on a sign-changing bracket.
//!
//! Each iteration evaluates the midpoint and keeps the half of the bracket
//! across which `f` still changes sign. The bracket shrinks monotonically, so
//! the method cannot diverge.

mod bracket;

use nlsolve_core::{Equation, Observer};

use crate::trace::Traced;

use super::{Action, Config, Error, Event, Kind, Solution};

use bracket::Bracket;

/// Checks that `[left, right]` passes the root existence heuristic.
///
/// # Errors
///
/// Returns [`Error::NoRootOrAmbiguous`] if [`Equation::root_exists`] fails.
pub fn check(equation: &Equation, left: f64, right: f64) -> Result<(), Error> {
    if equation.root_exists(left, right) {
        Ok(())
    } else {
        Err(Error::NoRootOrAmbiguous { left, right })
    }
}

/// Finds a root of `equation` on `[left, right]` by bisection.
///
/// The solve stops at the first midpoint `m` where `f(m)` is exactly zero,
/// or where the half-width of the bracket and `|f(m)|` are both below
/// epsilon. If the bounds become adjacent floats first, `m` is the best
/// representable root and is returned with whatever residual it has.
///
/// # Errors
///
/// Returns an error if `f` does not change sign across the bracket, a
/// midpoint evaluates to a non-finite value, the observer stops the solve, or
/// the iteration cap is reached.
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
    let max_iters = config.max_iters_for(Kind::Bisection);

    let mut bracket = Bracket::new(
        [left, right],
        equation.evaluate(left),
        equation.evaluate(right),
    )
    .ok_or(Error::NoRootOrAmbiguous { left, right })?;

    for iter in 1..=max_iters {
        let mid = bracket.midpoint();
        let residual = equation.evaluate(mid);

        Event {
            kind: Kind::Bisection,
            iter,
            x: mid,
            residual,
            bracket: Some(bracket.as_array()),
        }
        .emit(&mut observer)?;

        #[allow(clippy::float_cmp)]
        let exact = residual == 0.0;
        let converged = bracket.half_width() < epsilon && residual.abs() < epsilon;
        if exact || converged || bracket.is_collapsed(mid) {
            return Ok(Solution::new(mid, residual, iter, config.decimal_places()));
        }

        bracket.shrink(mid, residual);
    }

    Err(Error::IterationLimitExceeded { max_iters })
}

/// Runs bisection without observation.
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

    fn line() -> Equation {
        Equation::new(|x| 0.5 * x - 0.3, |_| 0.5, "x/2 - 0.3")
    }

    #[test]
    fn finds_root_of_a_line() {
        let config = Config::new(1e-6, 6).expect("valid config");
        let solution = solve_unobserved(&line(), 0.0, 1.0, &config).expect("should converge");

        assert_relative_eq!(solution.root(), 0.6, epsilon = 1e-6);
        assert!(solution.residual().abs() < 1e-6);
        assert_eq!(solution.iterations(), 20);
    }

    #[test]
    fn accepts_reversed_bracket() {
        let config = Config::new(1e-6, 6).expect("valid config");
        let forward = solve_unobserved(&line(), 0.0, 1.0, &config).expect("should converge");
        let reversed = solve_unobserved(&line(), 1.0, 0.0, &config).expect("should converge");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn stops_on_exact_zero() {
        let eq = Equation::new(|x| x - 1.0, |_| 1.0, "x - 1");
        let config = Config::default();
        let solution = solve_unobserved(&eq, 0.0, 2.0, &config).expect("should converge");

        assert_relative_eq!(solution.root(), 1.0);
        assert_eq!(solution.iterations(), 1);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let config = Config::default();
        let err = solve_unobserved(&line(), 1.0, 2.0, &config).expect_err("no sign change");
        assert_eq!(
            err,
            Error::NoRootOrAmbiguous {
                left: 1.0,
                right: 2.0
            }
        );
        assert_eq!(check(&line(), 1.0, 2.0), Err(err));
    }

    #[test]
    fn events_report_a_shrinking_bracket() {
        let config = Config::new(1e-3, 3).expect("valid config");
        let mut widths = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            let [left, right] = event.bracket.expect("bisection reports its bracket");
            widths.push(right - left);
            None
        };

        solve(&line(), 0.0, 1.0, &config, observer).expect("should converge");

        assert!(!widths.is_empty());
        assert!(widths.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn steep_function_stops_when_the_bracket_collapses() {
        // No float near the root gets |f| below epsilon, so the bracket
        // narrows to adjacent floats before the residual test can pass.
        let config = Config::new(1e-9, 9).expect("valid config");
        for c in [0.2, 0.3, 0.7, 2.0, 3.0, 5.0] {
            let eq = Equation::new(
                move |x| 1e10 * (x * x - c),
                |x| 2e10 * x,
                "1e10 (x^2 - c)",
            );
            check(&eq, 0.1, 3.0).expect("valid bracket");

            let solution = solve_unobserved(&eq, 0.1, 3.0, &config).expect("should stop");
            assert_relative_eq!(solution.root(), c.sqrt(), max_relative = 1e-15);
            assert!(solution.residual().abs() > 1e-9);
            assert!(solution.iterations() < 64);
        }
    }

    #[test]
    fn respects_iteration_cap() {
        let config = Config::new(1e-12, 12)
            .and_then(|config| config.with_max_iters(5))
            .expect("valid config");
        let err = solve_unobserved(&line(), 0.0, 1.0, &config).expect_err("cap reached");
        assert_eq!(err, Error::IterationLimitExceeded { max_iters: 5 });
    }
}
