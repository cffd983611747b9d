use nlsolve_core::decimal_places_for;
use thiserror::Error;

use super::{Kind, ResidualTest};

/// Configuration shared by the scalar root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    decimal_places: usize,
    log: bool,
    max_iters: Option<usize>,
    residual_test: ResidualTest,
}

/// Errors that can occur when validating a scalar solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            decimal_places: 6,
            log: false,
            max_iters: None,
            residual_test: ResidualTest::Signed,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `decimal_places` only affects how a [`Solution`](super::Solution) is
    /// rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(epsilon: f64, decimal_places: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            epsilon,
            decimal_places,
            ..Self::default()
        })
    }

    /// Creates a config whose rendering precision matches `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn from_epsilon(epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, decimal_places_for(epsilon))
    }

    /// Enables or disables per-iteration `tracing` output.
    #[must_use]
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Overrides the method's default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(mut self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        self.max_iters = Some(max_iters);
        Ok(self)
    }

    /// Selects the residual test used by Newton's method.
    #[must_use]
    pub fn with_residual_test(mut self, residual_test: ResidualTest) -> Self {
        self.residual_test = residual_test;
        self
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the number of decimal places used for rendering.
    #[must_use]
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Returns true if iterations are logged.
    #[must_use]
    pub fn log(&self) -> bool {
        self.log
    }

    /// Returns the explicit iteration cap, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns the iteration cap that applies to `kind`.
    #[must_use]
    pub fn max_iters_for(&self, kind: Kind) -> usize {
        self.max_iters.unwrap_or(kind.default_max_iters())
    }

    /// Returns the residual test used by Newton's method.
    #[must_use]
    pub fn residual_test(&self) -> ResidualTest {
        self.residual_test
    }
}
