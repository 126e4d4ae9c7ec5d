use diskhead_core::{Cylinder, Direction, Input};

/// Requests split around the head for the sweep-based policies.
///
/// `ahead` holds the requests reached by the initial sweep, in the order the
/// sweep meets them. Requests sitting exactly on the head come first, so
/// they are serviced before anything else whichever way the head moves.
/// `behind` holds the rest, also ordered along `direction`; walking it in
/// reverse is the return sweep.
///
/// Which way the head turns depends only on requests strictly beyond it.
/// When none lies in `direction`, the head turns toward the requests
/// straight away: after any on the head, they all become `ahead`, nearest
/// first, and `behind` is empty. No policy then visits an edge or wraps.
pub(crate) struct Sweep {
    pub ahead: Vec<Cylinder>,
    pub behind: Vec<Cylinder>,
}

impl Sweep {
    pub fn split(input: &Input, direction: Direction) -> Self {
        let head = input.head();
        let sorted = input.requests().sorted();

        let (mut ahead, rest): (Vec<_>, Vec<_>) = sorted.into_iter().partition(|&c| c == head);
        let (mut beyond, mut behind): (Vec<_>, Vec<_>) = match direction {
            Direction::Up => rest.into_iter().partition(|&c| c > head),
            Direction::Down => rest.into_iter().partition(|&c| c < head),
        };
        if direction == Direction::Down {
            beyond.reverse();
            behind.reverse();
        }

        if beyond.is_empty() {
            ahead.extend(behind.into_iter().rev());
            return Self {
                ahead,
                behind: Vec::new(),
            };
        }

        ahead.extend(beyond);
        Self { ahead, behind }
    }

    /// Returns where the head sits after the initial sweep.
    pub fn end_of_first_pass(&self, head: Cylinder) -> Cylinder {
        self.ahead.last().copied().unwrap_or(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use diskhead_core::RequestSet;

    fn input() -> Input {
        Input::with_bound(RequestSet::new([98, 53, 37, 122, 14, 65]), 53, 199).unwrap()
    }

    #[test]
    fn splits_upward() {
        let sweep = Sweep::split(&input(), Direction::Up);

        assert_eq!(sweep.ahead, vec![53, 65, 98, 122]);
        assert_eq!(sweep.behind, vec![14, 37]);
        assert_eq!(sweep.end_of_first_pass(53), 122);
    }

    #[test]
    fn splits_downward() {
        let sweep = Sweep::split(&input(), Direction::Down);

        assert_eq!(sweep.ahead, vec![53, 37, 14]);
        assert_eq!(sweep.behind, vec![122, 98, 65]);
    }

    #[test]
    fn empty_first_pass_turns_toward_requests() {
        let input = Input::with_bound(RequestSet::new([10, 20]), 50, 99).unwrap();
        let sweep = Sweep::split(&input, Direction::Up);

        assert_eq!(sweep.ahead, vec![20, 10]);
        assert!(sweep.behind.is_empty());
        assert_eq!(sweep.end_of_first_pass(50), 10);
    }

    #[test]
    fn requests_on_head_do_not_decide_the_turn() {
        let input = Input::with_bound(RequestSet::new([10, 50, 30]), 50, 99).unwrap();
        let sweep = Sweep::split(&input, Direction::Up);

        assert_eq!(sweep.ahead, vec![50, 30, 10]);
        assert!(sweep.behind.is_empty());
    }
}
