use std::fmt;

type ScalarFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// A scalar equation `f(x) = 0` together with its derivative.
///
/// Both functions must be pure and defined over any interval a solver is
/// asked to search. Evaluating outside the domain is a caller error and is
/// not intercepted here.
///
/// The label is only used for display.
pub struct Equation {
    function: ScalarFn,
    derivative: ScalarFn,
    label: String,
}

impl Equation {
    /// Creates an equation from `f`, its derivative `f′`, and a display label.
    pub fn new<F, D>(function: F, derivative: D, label: impl Into<String>) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Box::new(function),
            derivative: Box::new(derivative),
            label: label.into(),
        }
    }

    /// Returns `f(x)`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Returns `f′(x)`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cheap heuristic for a single root on `[left, right]`.
    ///
    /// Returns true when `f` changes sign across the interval and `f′(left)`
    /// is nonzero. The second clause squares the left derivative rather than
    /// comparing both endpoints, so it is a nonzero check and not a
    /// monotonicity test. A `true` result is not a proof of a unique root.
    #[must_use]
    pub fn root_exists(&self, left: f64, right: f64) -> bool {
        let slope = self.derivative(left);
        self.evaluate(left) * self.evaluate(right) < 0.0 && slope * slope > 0.0
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic() -> Equation {
        Equation::new(
            |x| x.powi(3) - 1.89 * x.powi(2) - 2.0 * x + 1.76,
            |x| 3.0 * x.powi(2) - 2.0 * 1.89 * x - 2.0,
            "x^3 - 1.89*x^2 - 2*x + 1.76",
        )
    }

    #[test]
    fn evaluates_function_and_derivative() {
        let eq = cubic();
        assert_relative_eq!(eq.evaluate(0.0), 1.76);
        assert_relative_eq!(eq.evaluate(1.0), -1.13, epsilon = 1e-12);
        assert_relative_eq!(eq.derivative(0.0), -2.0);
        assert_relative_eq!(eq.derivative(1.0), -2.78, epsilon = 1e-12);
    }

    #[test]
    fn root_exists_requires_sign_change() {
        let eq = cubic();
        assert!(eq.root_exists(-2.0, -1.0));
        assert!(eq.root_exists(0.0, 1.0));
        assert!(!eq.root_exists(-1.0, 0.0));
    }

    #[test]
    fn root_exists_requires_nonzero_left_derivative() {
        // Sign change on [-1, 1], but f′(-1) = 0.
        let eq = Equation::new(|x| x * x * x - 3.0 * x - 1.0, |x| 3.0 * x * x - 3.0, "");
        assert!(eq.evaluate(-1.0) * eq.evaluate(1.0) < 0.0);
        assert!(!eq.root_exists(-1.0, 1.0));
    }

    #[test]
    fn root_exists_ignores_right_derivative() {
        // f′(right) = 0 does not matter, only the left endpoint is checked.
        let eq = Equation::new(|x| x * x - 2.0, |x| 2.0 * x, "x^2 - 2");
        assert!(eq.root_exists(2.0, 0.0));
    }

    #[test]
    fn root_exists_is_repeatable() {
        let eq = cubic();
        let first = eq.root_exists(-2.0, -1.0);
        for _ in 0..3 {
            assert_eq!(eq.root_exists(-2.0, -1.0), first);
        }
    }

    #[test]
    fn displays_label() {
        let eq = cubic();
        assert_eq!(eq.to_string(), "x^3 - 1.89*x^2 - 2*x + 1.76");
        assert_eq!(eq.label(), eq.to_string());
        assert!(format!("{eq:?}").contains("1.89"));
    }

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Equation>();
    }
}
