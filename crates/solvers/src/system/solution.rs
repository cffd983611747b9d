use std::fmt;

/// A converged solution of a 2x2 system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    point: [f64; 2],
    residuals: [f64; 2],
    iterations: usize,
}

impl Solution {
    pub(super) fn new(point: [f64; 2], residuals: [f64; 2], iterations: usize) -> Self {
        Self {
            point,
            residuals,
            iterations,
        }
    }

    /// Returns the solution `(x, y)`.
    #[must_use]
    pub fn point(&self) -> [f64; 2] {
        self.point
    }

    /// Returns `A(x, y)` at the solution.
    #[must_use]
    pub fn residuals(&self) -> [f64; 2] {
        self.residuals
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl fmt::Display for Solution {
    /// Uses the formatter's precision for all four values, if one is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = self.point;
        let [r1, r2] = self.residuals;
        match f.precision() {
            Some(places) => {
                writeln!(f, "x = {x:.places$}, y = {y:.places$}")?;
                writeln!(f, "A(x, y) = ({r1:.places$}, {r2:.places$})")?;
            }
            None => {
                writeln!(f, "x = {x}, y = {y}")?;
                writeln!(f, "A(x, y) = ({r1}, {r2})")?;
            }
        }
        write!(f, "iterations: {}", self.iterations)
    }
}
