use super::{Action, Event};

/// Watches the width search, one partition trial at a time.
///
/// The solver calls [`watch`](Observer::watch) with each trial's [`Event`]
/// before running the acceptance test. Returning `Some(Action::Cancel)`
/// abandons the search; returning `None` lets it continue. Since the trial
/// loop has no iteration cap, this is where an interactive caller bails out
/// of a search that is taking too long.
///
/// Closures of the right shape implement `Observer`, and `()` is the no-op
/// observer used by
/// [`search_unobserved`](super::search_unobserved).
pub trait Observer {
    /// Inspects a partition trial and optionally cancels the search.
    fn watch(&mut self, event: &Event<'_>) -> Option<Action>;
}

impl<F> Observer for F
where
    F: FnMut(&Event<'_>) -> Option<Action>,
{
    fn watch(&mut self, event: &Event<'_>) -> Option<Action> {
        self(event)
    }
}

/// The no-op observer: every trial continues.
impl Observer for () {
    fn watch(&mut self, _event: &Event<'_>) -> Option<Action> {
        None
    }
}
