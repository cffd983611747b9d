use nlsolve_core::Observer;

use crate::traits::{CanStopEarly, HasIteration};

/// Stops a solve once it reaches a fixed number of iterations.
///
/// The solver's own cap ends a run with an iteration-limit error. A budget
/// instead ends it through the observer channel, so the caller sees
/// `StoppedByObserver` together with the last iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    max_iters: usize,
}

impl IterationBudget {
    /// Creates a budget that stops the solve at iteration `max_iters`.
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self { max_iters }
    }

    /// Returns the iteration at which the budget stops a solve.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl<E, A> Observer<E, A> for IterationBudget
where
    E: HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.max_iters).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nlsolve_core::Equation;
    use nlsolve_solvers::{scalar, system};

    #[test]
    fn stops_scalar_solve_at_budget() {
        let eq = Equation::new(|x| x * x - 2.0, |x| 2.0 * x, "x^2 - 2");
        let config = scalar::Config::new(1e-12, 12).expect("valid config");

        let result = scalar::bisection::solve(&eq, 0.0, 2.0, &config, IterationBudget::new(5));
        assert!(matches!(
            result,
            Err(scalar::Error::StoppedByObserver { iter: 5, .. })
        ));
    }

    #[test]
    fn stops_system_solve_at_budget() {
        let divergent = nlsolve_core::System::new(
            |[x, y]| [x - 1.0, y],
            |[x, _]| 2.0 * x - 1.0,
            |[_, y]| y,
            "x = 2x - 1",
        );
        let config = system::Config::default();

        let result = system::solve(&divergent, [0.0, 0.0], &config, IterationBudget::new(3));
        assert!(matches!(
            result,
            Err(system::Error::StoppedByObserver { iter: 3, .. })
        ));
    }

    #[test]
    fn generous_budget_does_not_interfere() {
        let eq = Equation::new(|x| x * x - 2.0, |x| 2.0 * x, "x^2 - 2");
        let config = scalar::Config::default();

        let solution = scalar::newton::solve(&eq, 1.0, &config, IterationBudget::new(100))
            .expect("should converge");
        assert!(solution.iterations() < 100);
    }
}
