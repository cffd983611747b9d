use nlsolve_core::Observer;

use crate::traits::HasResidual;

/// Records every event a solver emits.
///
/// Pass `&mut history` to a solver to keep the recording after the solve.
/// A history never steers the iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct History<E> {
    events: Vec<E>,
}

impl<E> Default for History<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> History<E> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the history and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: HasResidual> History<E> {
    /// Returns the residual of each recorded event.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.events.iter().map(HasResidual::residual).collect()
    }
}

impl<E: Clone, A> Observer<E, A> for History<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

/// Lets a history be lent to a solver and read afterwards.
impl<E: Clone, A> Observer<E, A> for &mut History<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
