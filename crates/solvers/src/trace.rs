use nlsolve_core::Observer;

/// An event that can describe itself to `tracing`.
pub(crate) trait Traceable {
    fn trace(&self);
}

/// Observer wrapper that logs each event before forwarding it.
///
/// Logging is decided once at construction, so a disabled wrapper costs a
/// branch per iteration and nothing else.
pub(crate) struct Traced<Obs> {
    inner: Obs,
    enabled: bool,
}

impl<Obs> Traced<Obs> {
    pub(crate) fn new(inner: Obs, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl<E, A, Obs> Observer<E, A> for Traced<Obs>
where
    E: Traceable,
    Obs: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.enabled {
            event.trace();
        }
        self.inner.observe(event)
    }
}
