//! LOOK.
//!
//! Like [SCAN](crate::scan), except the head reverses as soon as it services
//! the last request in its current direction instead of running on to the
//! disk edge.

use diskhead_core::{Direction, Input, Observer, ScheduleResult, Stop};

use crate::{
    sweep::Sweep,
    walk::{Action, Event, walk},
};

/// Sweeps in `direction` to the last request, then reverses.
///
/// The observer receives an [`Event`] after each move and may return
/// [`Action::StopEarly`].
pub fn schedule<Obs>(input: &Input, direction: Direction, observer: Obs) -> ScheduleResult
where
    Obs: Observer<Event, Action>,
{
    walk(input.head(), plan(input, direction), observer)
}

/// Sweeps in `direction` to the last request, then reverses, without
/// observation.
#[must_use]
pub fn schedule_unobserved(input: &Input, direction: Direction) -> ScheduleResult {
    schedule(input, direction, ())
}

pub(crate) fn plan(input: &Input, direction: Direction) -> Vec<Stop> {
    let sweep = Sweep::split(input, direction);

    sweep
        .ahead
        .into_iter()
        .chain(sweep.behind.into_iter().rev())
        .map(Stop::Service)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use diskhead_core::RequestSet;

    #[test]
    fn reverses_at_last_request() {
        let input = Input::with_bound(RequestSet::new([70, 20, 40]), 50, 99).unwrap();

        let result = schedule_unobserved(&input, Direction::Up);

        assert_eq!(result.sequence(), &[70, 40, 20]);
        assert_eq!(result.stops().len(), 3);
        assert_eq!(result.total_seek(), 20 + 30 + 20);
    }

    #[test]
    fn downward_first() {
        let input = Input::with_bound(RequestSet::new([70, 20, 40]), 50, 99).unwrap();

        let result = schedule_unobserved(&input, Direction::Down);

        assert_eq!(result.sequence(), &[40, 20, 70]);
        assert_eq!(result.total_seek(), 10 + 20 + 50);
    }
}
