use diskhead_core::{Cylinder, Observer, Stop};
use diskhead_policies::walk::{Action, Event};

/// One point on the head track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Move number, 0 for the starting position.
    pub step: usize,

    /// Head position after the move.
    pub position: Cylinder,

    /// Why the head stopped here, `None` for the starting position.
    pub stop: Option<Stop>,

    /// Running seek total.
    pub total: u64,
}

/// An observer that records the head track of a schedule.
///
/// The track starts with the initial head position (step 0) and gains one
/// [`Sample`] per move, so plotting `step` against `position` draws the
/// familiar seek chart, boundary and wrap legs included.
///
/// # Example
///
/// ```ignore
/// let mut recorder = Recorder::new(input.head());
/// scan::schedule(&input, Direction::Up, &mut recorder);
/// for sample in recorder.samples() {
///     println!("{} -> {}", sample.step, sample.position);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder {
    samples: Vec<Sample>,
}

impl Recorder {
    /// Creates a recorder whose track starts at `head`.
    #[must_use]
    pub fn new(head: Cylinder) -> Self {
        Self {
            samples: vec![Sample {
                step: 0,
                position: head,
                stop: None,
                total: 0,
            }],
        }
    }

    /// Records one move.
    pub fn record(&mut self, event: &Event) {
        self.samples.push(Sample {
            step: event.step,
            position: event.position(),
            stop: Some(event.stop),
            total: event.total,
        });
    }

    /// Returns the recorded track.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the head positions in visiting order.
    pub fn positions(&self) -> impl Iterator<Item = Cylinder> + '_ {
        self.samples.iter().map(|sample| sample.position)
    }

    /// Consumes the recorder and returns the track.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl Observer<Event, Action> for Recorder {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.record(event);
        None
    }
}

/// Allows `&mut Recorder` to be passed to policies that take an observer by
/// value, so the track can be read after the schedule completes.
impl Observer<Event, Action> for &mut Recorder {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use diskhead_core::{Direction, Input, RequestSet};
    use diskhead_policies::{c_scan, scan};

    fn input() -> Input {
        Input::with_bound(RequestSet::new([70, 20]), 50, 99).unwrap()
    }

    #[test]
    fn records_scan_track_with_boundary() {
        let input = input();
        let mut recorder = Recorder::new(input.head());

        let result = scan::schedule(&input, Direction::Up, &mut recorder);

        assert_eq!(recorder.positions().collect::<Vec<_>>(), vec![50, 70, 99, 20]);
        assert_eq!(
            recorder.positions().collect::<Vec<_>>(),
            result.path().collect::<Vec<_>>()
        );
        assert_eq!(recorder.samples()[2].stop, Some(Stop::Boundary(99)));
        assert_eq!(
            recorder.samples().last().map(|s| s.total),
            Some(result.total_seek())
        );
    }

    #[test]
    fn records_wrap_leg() {
        let input = input();
        let mut recorder = Recorder::new(input.head());

        c_scan::schedule(&input, Direction::Up, &mut recorder);

        let stops: Vec<_> = recorder.samples().iter().filter_map(|s| s.stop).collect();
        assert_eq!(
            stops,
            vec![
                Stop::Service(70),
                Stop::Boundary(99),
                Stop::Wrap(0),
                Stop::Service(20)
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn samples_serialize_for_charting() {
        let input = input();
        let mut recorder = Recorder::new(input.head());
        scan::schedule(&input, Direction::Down, &mut recorder);

        let json = serde_json::to_value(recorder.samples()).unwrap();

        assert_eq!(json[0]["position"], 50);
        assert_eq!(json[0]["stop"], serde_json::Value::Null);
        assert_eq!(json[1]["stop"]["kind"], "service");
    }
}
