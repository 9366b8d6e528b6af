use super::Trial;

/// Iteration event emitted once per partition trial, before the acceptance
/// test.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The trial that was just computed.
    pub trial: &'a Trial,

    /// The exact area `|F(end) - F(start)|` the trial is compared against.
    pub exact_area: f64,
}

/// Actions an observer can take during the width search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the search. The solver returns
    /// [`Error::Cancelled`](super::Error::Cancelled) with the current trial
    /// count.
    Cancel,
}
