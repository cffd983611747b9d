/// Receives per-iteration solver events and may steer the iteration.
///
/// Every solver in the workspace emits one event per iteration. Returning
/// `Some(action)` asks the solver to act (for example to stop early), while
/// `None` lets the iteration continue unchanged. This is how callers add
/// logging, progress reporting, or cancellation budgets without changing a
/// solver's signature.
///
/// Closures of the form `FnMut(&E) -> Option<A>` implement `Observer`, and `()`
/// is a no-op observer that never acts.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> Option<usize> {
        (1..=events).find(|iter| observer.observe(iter).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |iter: &usize| {
                seen.push(*iter);
                (*iter == 4).then_some(Stop::Now)
            },
            10,
        );

        assert_eq!(stopped_at, Some(4));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
