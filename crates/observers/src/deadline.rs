use std::time::{Duration, Instant};

use nlsolve_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solve once a wall-clock deadline has passed.
///
/// The clock is read once per iteration, so a single slow evaluation can
/// overrun the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Creates a deadline at the given instant.
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<E, A> Observer<E, A> for Deadline
where
    A: CanStopEarly,
{
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_expired().then(A::stop_early)
    }
}
