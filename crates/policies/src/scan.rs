//! SCAN, the elevator algorithm.
//!
//! # Algorithm
//!
//! The head sweeps in the requested direction, servicing requests as it
//! meets them, and carries on to the disk edge. There it reverses and
//! services the remaining requests on the way back.
//!
//! The edge leg is real head movement and counts toward seek time. It shows
//! up in [`ScheduleResult::stops`] as a [`Stop::Boundary`] but never in
//! [`ScheduleResult::sequence`], which lists serviced requests only.
//!
//! If nothing is left behind the head after the first pass, the sweep ends
//! at the last request and the edge is never visited.

use diskhead_core::{Direction, Input, Observer, ScheduleResult, Stop};

use crate::{
    sweep::Sweep,
    walk::{Action, Event, walk},
};

/// Sweeps to the edge in `direction`, then reverses.
///
/// The observer receives an [`Event`] after each move and may return
/// [`Action::StopEarly`].
pub fn schedule<Obs>(input: &Input, direction: Direction, observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    walk(input.head(), plan(input, direction), observer)
}

/// Sweeps to the edge in `direction`, then reverses, without observation.
#[must_use]
pub fn schedule_unobserved(input: &Input, direction: Direction) -> ScheduleResult {
    schedule(input, direction, ())
}

pub(crate) fn plan(input: &Input, direction: Direction) -> Vec<Stop> {
    let sweep = Sweep::split(input, direction);
    let mut plan: Vec<Stop> = sweep.ahead.iter().copied().map(Stop::Service).collect();

    if sweep.behind.is_empty() {
        return plan;
    }

    let edge = input.geometry().edge(direction);
    if sweep.end_of_first_pass(input.head()) != edge {
        plan.push(Stop::Boundary(edge));
    }

    plan.extend(sweep.behind.iter().rev().copied().map(Stop::Service));
    plan
}
