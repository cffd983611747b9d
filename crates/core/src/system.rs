use std::fmt;

type ResidualFn = Box<dyn Fn([f64; 2]) -> [f64; 2] + Send + Sync>;
type MapFn = Box<dyn Fn([f64; 2]) -> f64 + Send + Sync>;

/// A 2x2 nonlinear system in fixed-point form.
///
/// The system pairs its residual map `A(x, y) -> [r1, r2]`, whose zeros are
/// the solutions, with two iteration maps `phi1` and `phi2` such that a
/// solution satisfies `x = phi1(x, y)` and `y = phi2(x, y)`.
///
/// Constructing the maps is the caller's job. Solvers only iterate them.
pub struct System {
    residuals: ResidualFn,
    phi: [MapFn; 2],
    label: String,
}

impl System {
    /// Creates a system from its residual map and the two iteration maps.
    pub fn new<R, P1, P2>(residuals: R, phi1: P1, phi2: P2, label: impl Into<String>) -> Self
    where
        R: Fn([f64; 2]) -> [f64; 2] + Send + Sync + 'static,
        P1: Fn([f64; 2]) -> f64 + Send + Sync + 'static,
        P2: Fn([f64; 2]) -> f64 + Send + Sync + 'static,
    {
        Self {
            residuals: Box::new(residuals),
            phi: [Box::new(phi1), Box::new(phi2)],
            label: label.into(),
        }
    }

    /// Returns the residuals `A(x, y)` at `point`.
    #[must_use]
    pub fn residuals(&self, point: [f64; 2]) -> [f64; 2] {
        (self.residuals)(point)
    }

    /// Applies both iteration maps to `point` at once.
    #[must_use]
    pub fn step(&self, point: [f64; 2]) -> [f64; 2] {
        [(self.phi[0])(point), (self.phi[1])(point)]
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_applies_both_maps_to_the_same_point() {
        let system = System::new(
            |[x, y]| [x - y, x + y],
            |[_, y]| y + 1.0,
            |[x, _]| 2.0 * x,
            "demo",
        );

        let [x, y] = system.step([3.0, 5.0]);
        assert_relative_eq!(x, 6.0);
        assert_relative_eq!(y, 6.0);

        let [r1, r2] = system.residuals([3.0, 5.0]);
        assert_relative_eq!(r1, -2.0);
        assert_relative_eq!(r2, 8.0);

        assert_eq!(system.label(), "demo");
    }
}
