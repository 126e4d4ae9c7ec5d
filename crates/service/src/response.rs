use std::collections::BTreeMap;

use diskhead_core::{Algorithm, Cylinder, ScheduleResult, Stop};
use diskhead_policies::compare::Report;
use serde::{Deserialize, Serialize};

/// The answer to a [`ScheduleRequest`](crate::ScheduleRequest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Success(Success),
    Failure(Failure),
}

/// A completed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success {
    pub sequence: Vec<Cylinder>,

    pub total_seek: u64,

    /// The full head trajectory, boundary and wrap legs included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<Stop>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal: Option<Optimal>,
}

/// The comparison across algorithms.
///
/// `all_results` is keyed by algorithm, so it serializes in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimal {
    pub algorithm: Algorithm,

    pub seek_time: u64,

    pub all_results: BTreeMap<Algorithm, u64>,
}

/// A rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub error: String,
}

impl Response {
    /// Builds a failure carrying `error`'s message.
    pub fn failure(error: &impl std::fmt::Display) -> Self {
        Self::Failure(Failure {
            error: error.to_string(),
        })
    }

    /// Returns `true` for a successful response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl Success {
    pub(crate) fn new(result: &ScheduleResult, include_head: bool, include_stops: bool) -> Self {
        let mut sequence = Vec::with_capacity(result.sequence().len() + 1);
        if include_head {
            sequence.push(result.head());
        }
        sequence.extend_from_slice(result.sequence());

        Self {
            sequence,
            total_seek: result.total_seek(),
            stops: include_stops.then(|| result.stops().to_vec()),
            optimal: None,
        }
    }
}

impl From<&Report> for Optimal {
    fn from(report: &Report) -> Self {
        Self {
            algorithm: report.optimal_algorithm(),
            seek_time: report.optimal_result().total_seek(),
            all_results: report.all_results().collect(),
        }
    }
}
