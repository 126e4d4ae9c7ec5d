//! Circular LOOK.
//!
//! Like [C-SCAN](crate::c_scan), but the head never runs past the last
//! request. After the first pass it jumps directly to the farthest remaining
//! request on the other side (the lowest when moving up, the highest when
//! moving down) and keeps sweeping in the original direction. The jump lands
//! on a request, so it counts toward seek time like any other move.

use diskhead_core::{Direction, Input, Observer, ScheduleResult, Stop};

use crate::{
    sweep::Sweep,
    walk::{Action, Event, walk},
};

/// Sweeps in `direction`, jumps back to the farthest remaining request, and
/// continues in the same direction.
///
/// The observer receives an [`Event`] after each move and may return
/// [`Action::StopEarly`].
pub fn schedule<Obs>(input: &Input, direction: Direction, observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    walk(input.head(), plan(input, direction), observer)
}

/// Circular LOOK without observation.
#[must_use]
pub fn schedule_unobserved(input: &Input, direction: Direction) -> ScheduleResult {
    schedule(input, direction, ())
}

pub(crate) fn plan(input: &Input, direction: Direction) -> Vec<Stop> {
    let sweep = Sweep::split(input, direction);

    sweep
        .ahead
        .into_iter()
        .chain(sweep.behind)
        .map(Stop::Service)
        .collect()
}
