use nlsolve_core::Observer;

use crate::trace::Traceable;

use super::Error;

/// Control actions supported by the system solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the solve, which then fails with [`Error::StoppedByObserver`].
    StopEarly,
}

/// Iteration event emitted by the system solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The new iterate `(x, y)`.
    pub point: [f64; 2],
    /// Residuals `A(x, y)` at the new iterate.
    pub residuals: [f64; 2],
}

impl Event {
    pub(super) fn emit<Obs>(self, observer: &mut Obs) -> Result<(), Error>
    where
        Obs: Observer<Event, Action>,
    {
        let [x, y] = self.point;
        let finite = self
            .point
            .iter()
            .chain(&self.residuals)
            .all(|value| value.is_finite());
        if !finite {
            return Err(Error::NonFiniteIterate {
                x,
                y,
                iter: self.iter,
            });
        }

        match observer.observe(&self) {
            Some(Action::StopEarly) => Err(Error::StoppedByObserver {
                x,
                y,
                iter: self.iter,
            }),
            None => Ok(()),
        }
    }
}

impl Traceable for Event {
    fn trace(&self) {
        let [x, y] = self.point;
        let [r1, r2] = self.residuals;
        tracing::debug!(iter = self.iter, x, y, r1, r2, "system iteration");
    }
}
