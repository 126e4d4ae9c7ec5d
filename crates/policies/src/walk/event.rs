use diskhead_core::{Cylinder, Stop};

/// Event emitted by the head walk after each move.
///
/// Steps are 1-based: step 1 is the first move away from the initial head
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The move number.
    pub step: usize,

    /// Where the head was before this move.
    pub from: Cylinder,

    /// Where the head moved to, and why.
    pub stop: Stop,

    /// Distance covered by this move.
    pub distance: u64,

    /// Running seek total, including this move.
    pub total: u64,
}

impl Event {
    /// Returns the head position after this move.
    #[must_use]
    pub fn position(&self) -> Cylinder {
        self.stop.cylinder()
    }
}
