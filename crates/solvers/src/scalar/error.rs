use thiserror::Error;

use super::ConfigError;

/// Errors that can occur while checking or running a scalar root finder.
///
/// Every variant carries the values needed to diagnose the failure. The
/// `Display` text is the check message shown to users.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("no root or more than one root on [{left}, {right}]")]
    NoRootOrAmbiguous { left: f64, right: f64 },

    #[error("derivative is zero at x = {x} (iteration {iter})")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("derivative is zero at both ends of [{left}, {right}]")]
    ZeroDerivativeOnBracket { left: f64, right: f64 },

    #[error("convergence condition violated at x = {x}: |phi'(x)| = {derivative} >= 1")]
    ConvergenceConditionViolated { x: f64, derivative: f64 },

    #[error("chord update has a zero denominator at x = {x} (iteration {iter})")]
    DegenerateIteration { x: f64, iter: usize },

    #[error("no convergence within {max_iters} iterations")]
    IterationLimitExceeded { max_iters: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite iterate at x = {x} (iteration {iter})")]
    NonFiniteIterate { x: f64, iter: usize },

    #[error("stopped by observer at x = {x} (iteration {iter})")]
    StoppedByObserver { x: f64, iter: usize },
}
