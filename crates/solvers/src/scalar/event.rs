use nlsolve_core::Observer;

use crate::trace::Traceable;

use super::{Error, Kind};

/// Control actions supported by the scalar root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the solve, which then fails with [`Error::StoppedByObserver`].
    StopEarly,
}

/// Iteration event emitted by the scalar root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The method that produced the event.
    pub kind: Kind,
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The new iterate.
    pub x: f64,
    /// `f(x)` at the new iterate.
    pub residual: f64,
    /// Bracket the iterate was taken from, for bracketing methods.
    pub bracket: Option<[f64; 2]>,
}

impl Event {
    /// Rejects non-finite iterates, then hands the event to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteIterate`] if `x` or the residual is not
    /// finite, or [`Error::StoppedByObserver`] if the observer asks to stop.
    pub(super) fn emit<Obs>(self, observer: &mut Obs) -> Result<(), Error>
    where
        Obs: Observer<Event, Action>,
    {
        if !self.x.is_finite() || !self.residual.is_finite() {
            return Err(Error::NonFiniteIterate {
                x: self.x,
                iter: self.iter,
            });
        }

        match observer.observe(&self) {
            Some(Action::StopEarly) => Err(Error::StoppedByObserver {
                x: self.x,
                iter: self.iter,
            }),
            None => Ok(()),
        }
    }
}

impl Traceable for Event {
    fn trace(&self) {
        tracing::debug!(
            method = %self.kind,
            iter = self.iter,
            x = self.x,
            residual = self.residual,
            "iteration"
        );
    }
}
