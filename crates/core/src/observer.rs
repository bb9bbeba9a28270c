/// Receives engine events and decides how the run should proceed.
///
/// Observers let callers watch or steer a simulation without changing its
/// API. Exporters, charts, and diagnostics all attach this way.
///
/// `observe` returns `Option<A>`: `Some(action)` requests an engine-specific
/// action (such as stopping early) and `None` lets the run continue.
///
/// Closures implement `Observer`, and `()` is a no-op observer that always
/// returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
