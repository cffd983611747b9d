//! Fixed-point iteration for a 2x2 nonlinear [`System`].
//!
//! Both maps are applied to the same point each iteration,
//! `(x, y) <- (phi1(x, y), phi2(x, y))`, and the solve converges once both
//! components of the step and both residuals are within epsilon.
//!
//! Exhausting the iteration cap is reported as [`Error::NoConvergence`],
//! which carries the number of iterations performed.

mod config;
mod error;
mod event;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::Solution;

use nlsolve_core::{Observer, System};

use crate::trace::Traced;

/// Step of the central differences used to estimate the Jacobian.
const DX: f64 = 1e-5;

/// Checks that `seed` is finite and that the iteration maps contract there.
///
/// The test estimates the Jacobian of `(phi1, phi2)` at the seed and requires
/// its infinity norm (largest absolute row sum) to be below one. Passing is
/// a local condition, not a guarantee of convergence.
///
/// # Errors
///
/// Returns [`Error::NonFiniteSeed`] or [`Error::ConvergenceConditionViolated`].
pub fn check(system: &System, seed: [f64; 2]) -> Result<(), Error> {
    let [x, y] = seed;
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::NonFiniteSeed { x, y });
    }

    let norm = jacobian_norm(system, seed);
    if norm >= 1.0 || norm.is_nan() {
        return Err(Error::ConvergenceConditionViolated { norm });
    }

    Ok(())
}

/// Estimates the infinity norm of the Jacobian of `system.step` at `point`.
#[must_use]
pub fn jacobian_norm(system: &System, [x, y]: [f64; 2]) -> f64 {
    let d_dx = {
        let [a1, a2] = system.step([x + DX, y]);
        let [b1, b2] = system.step([x - DX, y]);
        [(a1 - b1) / (2.0 * DX), (a2 - b2) / (2.0 * DX)]
    };
    let d_dy = {
        let [a1, a2] = system.step([x, y + DX]);
        let [b1, b2] = system.step([x, y - DX]);
        [(a1 - b1) / (2.0 * DX), (a2 - b2) / (2.0 * DX)]
    };

    let row1 = d_dx[0].abs() + d_dy[0].abs();
    let row2 = d_dx[1].abs() + d_dy[1].abs();
    row1.max(row2)
}

/// Iterates `system` from `seed` until it converges.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the cap is reached, and fails on a
/// non-finite seed or iterate, or when the observer stops the solve.
pub fn solve<Obs>(
    system: &System,
    seed: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut observer = Traced::new(observer, config.log());
    let epsilon = config.epsilon();

    let [x, y] = seed;
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::NonFiniteSeed { x, y });
    }

    let mut point = seed;
    for iter in 1..=config.max_iters() {
        let next = system.step(point);
        let residuals = system.residuals(next);

        Event {
            iter,
            point: next,
            residuals,
        }
        .emit(&mut observer)?;

        let step_converged = next
            .iter()
            .zip(point)
            .all(|(new, old)| (new - old).abs() <= epsilon);
        let residual_converged = residuals.iter().all(|r| r.abs() <= epsilon);

        if step_converged && residual_converged {
            if config.log() {
                tracing::info!(system = system.label(), iter, "converged");
            }
            return Ok(Solution::new(next, residuals, iter));
        }

        point = next;
    }

    if config.log() {
        tracing::warn!(system = system.label(), iters = config.max_iters(), "no convergence");
    }
    Err(Error::NoConvergence {
        iters: config.max_iters(),
    })
}

/// Runs the system solver without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    system: &System,
    seed: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(system, seed, config, ())
}
