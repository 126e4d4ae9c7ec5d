use diskhead_core::{Observer, Stop};
use diskhead_policies::walk::{Action, Event};
use tracing::{debug, trace};

/// An observer that reports every head move through [`tracing`].
///
/// Service stops are logged at `TRACE`, boundary and wrap legs at `DEBUG`.
/// The label identifies the schedule in the log output.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    label: String,
    moves: usize,
}

impl Logger {
    /// Creates a logger whose records carry `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            moves: 0,
        }
    }

    /// Returns how many moves have been logged.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl Observer<Event, Action> for Logger {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.moves += 1;

        match event.stop {
            Stop::Service(cylinder) => trace!(
                label = %self.label,
                step = event.step,
                from = event.from,
                to = cylinder,
                distance = event.distance,
                total = event.total,
                "service"
            ),
            Stop::Boundary(cylinder) => debug!(
                label = %self.label,
                step = event.step,
                from = event.from,
                to = cylinder,
                distance = event.distance,
                total = event.total,
                "run to edge"
            ),
            Stop::Wrap(cylinder) => debug!(
                label = %self.label,
                step = event.step,
                from = event.from,
                to = cylinder,
                distance = event.distance,
                total = event.total,
                "wrap to opposite edge"
            ),
        }

        None
    }
}

impl Observer<Event, Action> for &mut Logger {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
