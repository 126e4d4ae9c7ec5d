//! Circular SCAN.
//!
//! # Algorithm
//!
//! The head sweeps in the requested direction to the disk edge, then jumps
//! straight to the opposite edge and keeps sweeping in the *same* direction.
//! Requests are therefore only ever serviced while moving one way, which
//! gives a more uniform wait than [SCAN](crate::scan).
//!
//! Both the run to the edge and the return jump count toward seek time. The
//! trajectory records them as [`Stop::Boundary`] and [`Stop::Wrap`]; neither
//! appears in the serviced sequence.
//!
//! With nothing left behind the head after the first pass, there is no edge
//! run and no jump.

use diskhead_core::{Direction, Input, Observer, ScheduleResult, Stop};

use crate::{
    sweep::Sweep,
    walk::{Action, Event, walk},
};

/// Sweeps to the edge in `direction`, wraps to the opposite edge, and
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

/// Circular SCAN without observation.
#[must_use]
pub fn schedule_unobserved(input: &Input, direction: Direction) -> ScheduleResult {
    schedule(input, direction, ())
}

pub(crate) fn plan(input: &Input, direction: Direction) -> Vec<Stop> {
    let geometry = input.geometry();
    let sweep = Sweep::split(input, direction);
    let mut plan: Vec<Stop> = sweep.ahead.iter().copied().map(Stop::Service).collect();

    if sweep.behind.is_empty() {
        return plan;
    }

    let edge = geometry.edge(direction);
    if sweep.end_of_first_pass(input.head()) != edge {
        plan.push(Stop::Boundary(edge));
    }
    plan.push(Stop::Wrap(geometry.edge(direction.reversed())));

    plan.extend(sweep.behind.into_iter().map(Stop::Service));
    plan
}
