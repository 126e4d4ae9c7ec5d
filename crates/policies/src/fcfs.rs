//! First-come, first-served.
//!
//! Requests are serviced in exactly the order they were submitted. No
//! reordering happens, so FCFS is the baseline every other policy improves on.

use diskhead_core::{Input, Observer, ScheduleResult, Stop};

use crate::walk::{Action, Event, walk};

/// Services requests in submission order.
///
/// The observer receives an [`Event`] after each move and may return
/// [`Action::StopEarly`].
pub fn schedule<Obs>(input: &Input, observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    walk(input.head(), plan(input), observer)
}

/// Services requests in submission order without observation.
#[must_use]
pub fn schedule_unobserved(input: &Input) -> ScheduleResult {
    schedule(input, ())
}

pub(crate) fn plan(input: &Input) -> Vec<Stop> {
    input
        .requests()
        .as_slice()
        .iter()
        .copied()
        .map(Stop::Service)
        .collect()
}
