use thiserror::Error;

use super::ConfigError;

/// Errors that can occur while checking or running the system solver.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("seed ({x}, {y}) is not finite")]
    NonFiniteSeed { x: f64, y: f64 },

    #[error("iteration map is not a contraction at the seed: Jacobian norm {norm} >= 1")]
    ConvergenceConditionViolated { norm: f64 },

    #[error("non-finite iterate ({x}, {y}) at iteration {iter}")]
    NonFiniteIterate { x: f64, y: f64, iter: usize },

    #[error("no convergence within {iters} iterations")]
    NoConvergence { iters: usize },

    #[error("stopped by observer at ({x}, {y}) (iteration {iter})")]
    StoppedByObserver { x: f64, y: f64, iter: usize },
}
