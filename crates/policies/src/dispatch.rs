use diskhead_core::{
    Algorithm, Cylinder, Direction, Input, InvalidRequest, Observer, RequestSet, ScheduleResult,
    Stop,
};

use crate::{
    c_look, c_scan, fcfs, look, scan, sstf,
    walk::{Action, Event, walk},
};

/// Runs `algorithm` on a validated input.
///
/// FCFS and SSTF ignore `direction`.
///
/// # Errors
///
/// Returns [`InvalidRequest::MissingDirection`] if `algorithm` sweeps and no
/// direction was given.
pub fn schedule<Obs>(
    algorithm: Algorithm,
    input: &Input,
    direction: Option<Direction>,
    observer: Obs,
) -> Result<ScheduleResult, InvalidRequest>
where
    Obs: Observer<Event, Action>,
{
    let plan = plan(algorithm, input, direction)?;
    Ok(walk(input.head(), plan, observer))
}

/// Runs `algorithm` on a validated input without observation.
///
/// # Errors
///
/// Returns [`InvalidRequest::MissingDirection`] if `algorithm` sweeps and no
/// direction was given.
pub fn schedule_unobserved(
    algorithm: Algorithm,
    input: &Input,
    direction: Option<Direction>,
) -> Result<ScheduleResult, InvalidRequest> {
    schedule(algorithm, input, direction, ())
}

/// Validates raw arguments and runs `algorithm` in one call.
///
/// # Errors
///
/// Returns an [`InvalidRequest`] if the bound, head, or any request is out of
/// range, the request set is empty, or a required direction is missing.
pub fn schedule_requests(
    algorithm: Algorithm,
    requests: RequestSet,
    head: Cylinder,
    bound: Cylinder,
    direction: Option<Direction>,
) -> Result<ScheduleResult, InvalidRequest> {
    let input = Input::with_bound(requests, head, bound)?;
    schedule_unobserved(algorithm, &input, direction)
}

/// Returns the direction `algorithm` needs, or `Ok(None)` if it needs none.
pub(crate) fn require_direction(
    algorithm: Algorithm,
    direction: Option<Direction>,
) -> Result<Option<Direction>, InvalidRequest> {
    match (algorithm.requires_direction(), direction) {
        (false, _) => Ok(None),
        (true, Some(direction)) => Ok(Some(direction)),
        (true, None) => Err(InvalidRequest::MissingDirection { algorithm }),
    }
}

fn plan(
    algorithm: Algorithm,
    input: &Input,
    direction: Option<Direction>,
) -> Result<Vec<Stop>, InvalidRequest> {
    let plan = match (algorithm, require_direction(algorithm, direction)?) {
        (Algorithm::Fcfs, _) => fcfs::plan(input),
        (Algorithm::Sstf, _) => sstf::plan(input),
        (Algorithm::Scan, Some(direction)) => scan::plan(input, direction),
        (Algorithm::Look, Some(direction)) => look::plan(input, direction),
        (Algorithm::CScan, Some(direction)) => c_scan::plan(input, direction),
        (Algorithm::CLook, Some(direction)) => c_look::plan(input, direction),
        (_, None) => return Err(InvalidRequest::MissingDirection { algorithm }),
    };
    Ok(plan)
}
