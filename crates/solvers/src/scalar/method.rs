use nlsolve_core::{Equation, Observer};

use super::{
    Action, Config, Error, Event, Kind, Solution, bisection, chord, newton, simple_iteration,
};

/// A scalar root-finding request: one [`Kind`] applied to one equation.
///
/// A method borrows its equation and never mutates it, so several methods may
/// share an equation and run on separate threads. For [`Kind::Newton`] the
/// `left` bound is the seed and `right` is kept only for display.
#[derive(Debug, Clone, Copy)]
pub struct Method<'a> {
    kind: Kind,
    equation: &'a Equation,
    left: f64,
    right: f64,
    config: Config,
}

impl<'a> Method<'a> {
    /// Creates a method over `[left, right]`, or from seed `left` for Newton.
    #[must_use]
    pub fn new(kind: Kind, equation: &'a Equation, left: f64, right: f64, config: Config) -> Self {
        Self {
            kind,
            equation,
            left,
            right,
            config,
        }
    }

    /// Creates a Newton-Raphson method started from `seed`.
    #[must_use]
    pub fn newton(equation: &'a Equation, seed: f64, config: Config) -> Self {
        Self::new(Kind::Newton, equation, seed, seed, config)
    }

    /// Returns the method's kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the equation being solved.
    #[must_use]
    pub fn equation(&self) -> &'a Equation {
        self.equation
    }

    /// Returns the bounds as given, `[seed, right]` for Newton.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks the method's preconditions without iterating.
    ///
    /// Calling `check` has no side effects, so repeated calls agree. A failed
    /// check means [`solve`](Self::solve) should not be called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRootOrAmbiguous`] for bracketing methods whose
    /// bracket fails [`Equation::root_exists`]. Newton's check always passes.
    pub fn check(&self) -> Result<(), Error> {
        match self.kind {
            Kind::Bisection => bisection::check(self.equation, self.left, self.right),
            Kind::Chord => chord::check(self.equation, self.left, self.right),
            Kind::Newton => newton::check(self.equation, self.left),
            Kind::SimpleIteration => simple_iteration::check(self.equation, self.left, self.right),
        }
    }

    /// Runs the method.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying solver.
    pub fn solve(&self) -> Result<Solution, Error> {
        self.solve_observed(())
    }

    /// Runs the method, reporting each iteration to `observer`.
    ///
    /// When the config's log flag is set, the outcome is logged as well.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying solver.
    pub fn solve_observed<Obs>(&self, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let (equation, left, right, config) = (self.equation, self.left, self.right, &self.config);

        let outcome = match self.kind {
            Kind::Bisection => bisection::solve(equation, left, right, config, observer),
            Kind::Chord => chord::solve(equation, left, right, config, observer),
            Kind::Newton => newton::solve(equation, left, config, observer),
            Kind::SimpleIteration => {
                simple_iteration::solve(equation, left, right, config, observer)
            }
        };

        if config.log() {
            match &outcome {
                Ok(solution) => tracing::info!(
                    method = %self.kind,
                    equation = %equation,
                    root = solution.root(),
                    residual = solution.residual(),
                    iterations = solution.iterations(),
                    "converged"
                ),
                Err(error) => tracing::warn!(
                    method = %self.kind,
                    equation = %equation,
                    %error,
                    "failed"
                ),
            }
        }

        outcome
    }
}
