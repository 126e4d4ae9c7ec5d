//! The head walk shared by every policy.
//!
//! A policy decides *where* the head goes as a list of [`Stop`]s. The walk
//! moves the head along that plan, emits an [`Event`] per move, and honors
//! [`Action::StopEarly`] from the observer.

mod action;
mod event;

pub use action::Action;
pub use event::Event;

use diskhead_core::{Cylinder, Observer, ScheduleResult, Status, Stop};

/// Moves the head from `head` through `plan`, reporting each move.
pub(crate) fn walk<Obs>(head: Cylinder, plan: Vec<Stop>, mut observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    let mut position = head;
    let mut total = 0_u64;
    let mut stops = Vec::with_capacity(plan.len());

    for (index, stop) in plan.into_iter().enumerate() {
        let distance = u64::from(position.abs_diff(stop.cylinder()));
        total += distance;
        stops.push(stop);

        let event = Event {
            step: index + 1,
            from: position,
            stop,
            distance,
            total,
        };
        position = stop.cylinder();

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return ScheduleResult::from_stops(head, stops, Status::StoppedByObserver);
        }
    }

    let result = ScheduleResult::from_stops(head, stops, Status::Complete);
    debug_assert_eq!(result.total_seek(), total);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Vec<Stop> {
        vec![Stop::Service(20), Stop::Boundary(30), Stop::Service(5)]
    }

    #[test]
    fn walks_whole_plan() {
        let result = walk(10, plan(), ());

        assert_eq!(result.status(), Status::Complete);
        assert_eq!(result.sequence(), &[20, 5]);
        assert_eq!(result.total_seek(), 10 + 10 + 25);
    }

    #[test]
    fn events_track_running_total() {
        let mut events = Vec::new();
        walk(10, plan(), |event: &Event| {
            events.push(*event);
            None
        });

        let totals: Vec<_> = events.iter().map(|e| e.total).collect();
        assert_eq!(totals, vec![10, 20, 45]);
        assert_eq!(events[1].from, 20);
        assert_eq!(events[1].position(), 30);
        assert_eq!(events[2].step, 3);
    }

    #[test]
    fn observer_can_stop_walk() {
        let result = walk(10, plan(), |event: &Event| {
            (event.step == 2).then_some(Action::StopEarly)
        });

        assert_eq!(result.status(), Status::StoppedByObserver);
        assert_eq!(result.stops(), &[Stop::Service(20), Stop::Boundary(30)]);
        assert_eq!(result.sequence(), &[20]);
        assert_eq!(result.total_seek(), 20);
    }
}
