//! Runs several policies on one input and picks the cheapest.
//!
//! The input is validated once, when the [`Input`] is built. Every compared
//! policy then runs on that same input, and the [`Report`] names the
//! algorithm with the smallest total seek. Ties go to the algorithm that
//! comes first in canonical order: FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK.
//!
//! # Direction modes
//!
//! With [`Directions::Given`] the sweep policies use the caller's direction.
//! With [`Directions::Best`] each sweep runs both ways and keeps its cheaper
//! run, so no direction is needed at all.

mod config;
mod report;

pub use config::{Config, ConfigError, Directions};
pub use report::{Entry, Report};

use diskhead_core::{Algorithm, Cylinder, Direction, Input, InvalidRequest, RequestSet};
use tracing::debug;

use crate::dispatch::{require_direction, schedule_unobserved};

/// Compares the configured algorithms on a validated input.
///
/// # Errors
///
/// Returns [`InvalidRequest::MissingDirection`] in [`Directions::Given`]
/// mode when a sweep policy is compared and `direction` is `None`. The check
/// happens before any policy runs.
pub fn compare(
    input: &Input,
    direction: Option<Direction>,
    config: &Config,
) -> Result<Report, InvalidRequest> {
    if config.directions() == Directions::Given {
        for &algorithm in config.algorithms() {
            require_direction(algorithm, direction)?;
        }
    }

    let entries = config
        .algorithms()
        .iter()
        .map(|&algorithm| run(algorithm, input, direction, config.directions()))
        .collect::<Result<Vec<_>, _>>()?;

    let report = Report::from_entries(entries);
    debug!(
        optimal = %report.optimal_algorithm(),
        total_seek = report.optimal_result().total_seek(),
        compared = report.entries().len(),
        "comparison complete"
    );

    Ok(report)
}

/// Validates raw arguments and compares all six algorithms.
///
/// # Errors
///
/// Returns an [`InvalidRequest`] if the bound, head, or any request is out of
/// range, the request set is empty, or `direction` is `None`.
pub fn compare_all(
    requests: RequestSet,
    head: Cylinder,
    bound: Cylinder,
    direction: Option<Direction>,
) -> Result<Report, InvalidRequest> {
    let input = Input::with_bound(requests, head, bound)?;
    compare(&input, direction, &Config::default())
}

fn run(
    algorithm: Algorithm,
    input: &Input,
    direction: Option<Direction>,
    mode: Directions,
) -> Result<Entry, InvalidRequest> {
    let entry = match mode {
        Directions::Best if algorithm.requires_direction() => {
            let up = entry(algorithm, input, Some(Direction::Up))?;
            let down = entry(algorithm, input, Some(Direction::Down))?;
            if down.total_seek() < up.total_seek() {
                down
            } else {
                up
            }
        }
        _ => entry(algorithm, input, direction)?,
    };

    debug!(
        algorithm = %entry.algorithm,
        direction = ?entry.direction,
        total_seek = entry.total_seek(),
        "evaluated"
    );

    Ok(entry)
}

fn entry(
    algorithm: Algorithm,
    input: &Input,
    direction: Option<Direction>,
) -> Result<Entry, InvalidRequest> {
    Ok(Entry {
        algorithm,
        direction: direction.filter(|_| algorithm.requires_direction()),
        result: schedule_unobserved(algorithm, input, direction)?,
    })
}
