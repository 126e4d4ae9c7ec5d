use crate::Cylinder;

/// One destination of the head along its trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "cylinder", rename_all = "snake_case")
)]
pub enum Stop {
    /// A pending request serviced at this cylinder.
    Service(Cylinder),

    /// A disk edge touched before reversing or wrapping.
    ///
    /// The distance counts toward seek time, but nothing is serviced here.
    Boundary(Cylinder),

    /// The landing point of a circular return jump.
    ///
    /// The jump distance counts toward seek time, but nothing is serviced here.
    Wrap(Cylinder),
}

impl Stop {
    /// Returns the cylinder the head moves to.
    #[must_use]
    pub fn cylinder(self) -> Cylinder {
        match self {
            Self::Service(c) | Self::Boundary(c) | Self::Wrap(c) => c,
        }
    }

    /// Returns `true` if a request is serviced at this stop.
    #[must_use]
    pub fn is_service(self) -> bool {
        matches!(self, Self::Service(_))
    }
}

/// Indicates how a schedule finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Every request was serviced.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The outcome of running a scheduling policy.
///
/// `sequence` lists only the serviced requests. `stops` is the full
/// trajectory, including boundary and wrap legs, and `total_seek` is always
/// the summed distance along `head → stops`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleResult {
    head: Cylinder,
    sequence: Vec<Cylinder>,
    stops: Vec<Stop>,
    total_seek: u64,
    status: Status,
}

impl ScheduleResult {
    /// Builds a result from a head position and the trajectory it followed.
    #[must_use]
    pub fn from_stops(head: Cylinder, stops: Vec<Stop>, status: Status) -> Self {
        let sequence = stops
            .iter()
            .filter(|stop| stop.is_service())
            .map(|stop| stop.cylinder())
            .collect();

        let total_seek = path_length(head, stops.iter().map(|stop| stop.cylinder()));

        Self {
            head,
            sequence,
            stops,
            total_seek,
            status,
        }
    }

    /// Returns the starting head position.
    #[must_use]
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Returns the serviced cylinders in service order.
    #[must_use]
    pub fn sequence(&self) -> &[Cylinder] {
        &self.sequence
    }

    /// Returns the full trajectory, including boundary and wrap legs.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the total head movement.
    #[must_use]
    pub fn total_seek(&self) -> u64 {
        self.total_seek
    }

    /// Returns how the schedule finished.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the mean head movement per serviced request.
    ///
    /// Returns `0.0` when nothing was serviced.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_seek(&self) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }
        self.total_seek as f64 / self.sequence.len() as f64
    }

    /// Returns every head position in visiting order, starting at the head.
    pub fn path(&self) -> impl Iterator<Item = Cylinder> + '_ {
        std::iter::once(self.head).chain(self.stops.iter().map(|stop| stop.cylinder()))
    }
}

/// Sums the absolute distances between consecutive positions of `head → stops`.
fn path_length(head: Cylinder, stops: impl Iterator<Item = Cylinder>) -> u64 {
    stops
        .fold((head, 0_u64), |(from, total), to| {
            (to, total + u64::from(from.abs_diff(to)))
        })
        .1
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sequence_omits_boundary_and_wrap() {
        let stops = vec![
            Stop::Service(60),
            Stop::Boundary(99),
            Stop::Wrap(0),
            Stop::Service(10),
        ];
        let result = ScheduleResult::from_stops(50, stops, Status::Complete);

        assert_eq!(result.sequence(), &[60, 10]);
        assert_eq!(result.total_seek(), 10 + 39 + 99 + 10);
        assert_eq!(result.path().collect::<Vec<_>>(), vec![50, 60, 99, 0, 10]);
    }

    #[test]
    fn average_seek_per_request() {
        let stops = vec![Stop::Service(10), Stop::Service(40)];
        let result = ScheduleResult::from_stops(0, stops, Status::Complete);

        assert_relative_eq!(result.average_seek(), 20.0);
    }

    #[test]
    fn empty_trajectory_has_no_seek() {
        let result = ScheduleResult::from_stops(7, Vec::new(), Status::StoppedByObserver);

        assert_eq!(result.total_seek(), 0);
        assert_relative_eq!(result.average_seek(), 0.0);
        assert_eq!(result.status(), Status::StoppedByObserver);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stops_serialize_with_kind_tags() {
        let json = serde_json::to_value(Stop::Boundary(199)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "boundary", "cylinder": 199 }));
    }
}
