use diskhead_policies::{compare, schedule_unobserved};
use tracing::{debug, warn};

use crate::{
    Config, Error, Response, ScheduleRequest,
    request::Selection,
    response::{Optimal, Success},
};

/// Runs a request and converts every outcome into a [`Response`].
///
/// A named algorithm is run with the request's direction (or the configured
/// default). When `compare` is set, or the algorithm is `compare`, every
/// algorithm is also run and the cheapest is reported under `optimal`; with
/// no single algorithm named, the top-level sequence is the optimal run.
pub fn handle(request: &ScheduleRequest, config: &Config) -> Response {
    match respond(request, config) {
        Ok(success) => {
            debug!(
                total_seek = success.total_seek,
                serviced = success.sequence.len(),
                "request handled"
            );
            Response::Success(success)
        }
        Err(error) => reject(&error),
    }
}

/// Decodes a JSON request body and handles it.
///
/// Malformed JSON becomes a [`Response::Failure`] like any other rejection.
pub fn handle_json(body: &str, config: &Config) -> Response {
    match serde_json::from_str::<ScheduleRequest>(body) {
        Ok(request) => handle(&request, config),
        Err(error) => reject(&Error::from(error)),
    }
}

fn respond(request: &ScheduleRequest, config: &Config) -> Result<Success, Error> {
    let input = request.input()?;
    let direction = request.direction()?.or(config.default_direction);

    let single = match request.selection()? {
        Some(Selection::Single(algorithm)) => Some(algorithm),
        Some(Selection::CompareOnly) => None,
        None if request.compare => None,
        None => return Err(Error::NoAlgorithm),
    };

    let single = single
        .map(|algorithm| schedule_unobserved(algorithm, &input, direction))
        .transpose()?;

    if let (Some(result), false) = (&single, request.compare) {
        return Ok(Success::new(result, config.include_head, config.include_stops));
    }

    let report = compare::compare(&input, direction, &config.comparator())?;
    let mut success = Success::new(
        single.as_ref().unwrap_or(report.optimal_result()),
        config.include_head,
        config.include_stops,
    );
    success.optimal = Some(Optimal::from(&report));

    Ok(success)
}

fn reject(error: &Error) -> Response {
    warn!(%error, "request rejected");
    Response::failure(error)
}
