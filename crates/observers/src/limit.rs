use diskhead_core::Observer;
use diskhead_policies::walk::{Action, Event};

/// An observer that stops the walk after a fixed number of moves.
///
/// Boundary and wrap legs count as moves. A limit of zero still lets the
/// first move happen, since the walk only consults observers after moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    max_moves: usize,
}

impl Limit {
    /// Creates a limit that stops the walk once `max_moves` legs are done.
    #[must_use]
    pub fn new(max_moves: usize) -> Self {
        Self { max_moves }
    }

    /// Returns the number of legs allowed.
    #[must_use]
    pub fn max_moves(&self) -> usize {
        self.max_moves
    }
}

impl Observer<Event, Action> for Limit {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (event.step >= self.max_moves).then_some(Action::StopEarly)
    }
}

impl Observer<Event, Action> for &mut Limit {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
