//! The JSON boundary between an external caller and the diskhead engine.
//!
//! A caller submits a [`ScheduleRequest`] (usually as JSON) and receives a
//! [`Response`]: the serviced sequence and seek total, optionally with a
//! comparison across every algorithm, or `{ "error": ... }` when the request
//! is rejected. [`handle`] never fails; every problem becomes a
//! [`Response::Failure`].
//!
//! The `diskhead` binary wraps [`handle_json`] in a JSON-lines loop over
//! stdin and stdout.

mod config;
mod error;
mod handle;
mod request;
mod response;

pub use config::{CompareDirections, Config};
pub use error::Error;
pub use handle::{handle, handle_json};
pub use request::{Requests, ScheduleRequest};
pub use response::{Failure, Optimal, Response, Success};
