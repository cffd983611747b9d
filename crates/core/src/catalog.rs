use std::f64::consts::E;

use crate::{Equation, System};

/// Ordered tables of predefined equations and systems.
///
/// A catalog is plain configuration owned by the caller. Entries are looked
/// up by their 1-based position, the numbering a selection list shows.
/// Equations and systems are numbered independently.
#[derive(Debug, Default)]
pub struct Catalog {
    equations: Vec<Equation>,
    systems: Vec<System>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog of the four standard test equations and the
    /// standard system.
    ///
    /// Equations:
    ///
    /// 1. `-1.38x³ - 5.42x² + 2.57x + 10.95`
    /// 2. `x³ - 1.89x² - 2x + 1.76`
    /// 3. `x/2 - 2(x + 2.39)^(1/3)`
    /// 4. `-x/2 + eˣ + 5 sin x`
    ///
    /// System:
    ///
    /// 1. `x² + y² - 1 = 0`, `x² - y - 0.5 = 0`, iterated as
    ///    `x = sqrt(1 - y²)` and `y = 0.5 / (1 + y)`. The second map comes
    ///    from subtracting the equations, which leaves `y² + y - 0.5 = 0`.
    ///    The maps reach the root with `x > 0`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with(Equation::new(
                |x| -1.38 * x.powi(3) - 5.42 * x.powi(2) + 2.57 * x + 10.95,
                |x| -1.38 * 3.0 * x.powi(2) - 5.42 * 2.0 * x + 2.57,
                "-1.38*x^3 - 5.42*x^2 + 2.57*x + 10.95",
            ))
            .with(Equation::new(
                |x| x.powi(3) - 1.89 * x.powi(2) - 2.0 * x + 1.76,
                |x| 3.0 * x.powi(2) - 2.0 * 1.89 * x - 2.0,
                "x^3 - 1.89*x^2 - 2*x + 1.76",
            ))
            .with(Equation::new(
                |x| x / 2.0 - 2.0 * (x + 2.39).cbrt(),
                |x| 0.5 - (2.0 / 3.0) / (x + 2.39).cbrt().powi(2),
                "x/2 - 2*(x + 2.39)^(1/3)",
            ))
            .with(Equation::new(
                |x| -x / 2.0 + E.powf(x) + 5.0 * x.sin(),
                |x| -0.5 + E.powf(x) + 5.0 * x.cos(),
                "-x/2 + e^x + 5*sin(x)",
            ))
            .with_system(System::new(
                |[x, y]| [x * x + y * y - 1.0, x * x - y - 0.5],
                |[_, y]| (1.0 - y * y).sqrt(),
                |[_, y]| 0.5 / (1.0 + y),
                "x^2 + y^2 - 1, x^2 - y - 0.5",
            ))
    }

    /// Appends an equation and returns the catalog.
    #[must_use]
    pub fn with(mut self, equation: Equation) -> Self {
        self.push(equation);
        self
    }

    /// Appends an equation.
    pub fn push(&mut self, equation: Equation) {
        self.equations.push(equation);
    }

    /// Returns the equation at 1-based `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Equation> {
        index
            .checked_sub(1)
            .and_then(|position| self.equations.get(position))
    }

    /// Iterates over `(index, equation)` pairs with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Equation)> {
        self.equations
            .iter()
            .enumerate()
            .map(|(position, equation)| (position + 1, equation))
    }

    /// Appends a system and returns the catalog.
    #[must_use]
    pub fn with_system(mut self, system: System) -> Self {
        self.push_system(system);
        self
    }

    /// Appends a system.
    pub fn push_system(&mut self, system: System) {
        self.systems.push(system);
    }

    /// Returns the system at 1-based `index`, if any.
    #[must_use]
    pub fn system(&self, index: usize) -> Option<&System> {
        index
            .checked_sub(1)
            .and_then(|position| self.systems.get(position))
    }

    /// Iterates over `(index, system)` pairs with 1-based indices.
    pub fn systems(&self) -> impl Iterator<Item = (usize, &System)> {
        self.systems
            .iter()
            .enumerate()
            .map(|(position, system)| (position + 1, system))
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns true if the catalog holds neither equations nor systems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty() && self.systems.is_empty()
    }
}
