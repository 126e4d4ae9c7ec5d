//! Shortest seek time first.
//!
//! The head repeatedly services whichever pending request is nearest to its
//! current position. Ties go to the smaller cylinder, which keeps the policy
//! deterministic regardless of submission order.

use diskhead_core::{Cylinder, Input, Observer, ScheduleResult, Stop};

use crate::walk::{Action, Event, walk};

/// Services the nearest pending request at every step.
///
/// The observer receives an [`Event`] after each move and may return
/// [`Action::StopEarly`].
pub fn schedule<Obs>(input: &Input, observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    walk(input.head(), plan(input), observer)
}

/// Services the nearest pending request at every step, without observation.
#[must_use]
pub fn schedule_unobserved(input: &Input) -> ScheduleResult {
    schedule(input, ())
}

pub(crate) fn plan(input: &Input) -> Vec<Stop> {
    let mut pending = input.requests().sorted();
    let mut current = input.head();
    let mut plan = Vec::with_capacity(pending.len());

    while let Some(index) = nearest(&pending, current) {
        current = pending.remove(index);
        plan.push(Stop::Service(current));
    }

    plan
}

/// Returns the index of the request closest to `current`.
///
/// `pending` is sorted, so the first minimum found is the smaller cylinder.
fn nearest(pending: &[Cylinder], current: Cylinder) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|(_, cylinder)| cylinder.abs_diff(current))
        .map(|(index, _)| index)
}
