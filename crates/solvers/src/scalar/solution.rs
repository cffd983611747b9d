use std::fmt;

/// A converged root estimate.
///
/// Produced only by a successful solve and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    root: f64,
    residual: f64,
    iterations: usize,
    decimal_places: usize,
}

impl Solution {
    pub(super) fn new(root: f64, residual: f64, iterations: usize, decimal_places: usize) -> Self {
        Self {
            root,
            residual,
            iterations,
            decimal_places,
        }
    }

    /// Returns the root estimate.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.root
    }

    /// Returns `f(root)`.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the precision used when rendering.
    #[must_use]
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.decimal_places;
        writeln!(f, "x = {:.*}", places, self.root)?;
        writeln!(f, "f(x) = {:.*}", places, self.residual)?;
        write!(f, "iterations: {}", self.iterations)
    }
}
