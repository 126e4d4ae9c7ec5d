//! Core types for the diskhead scheduling engine.
//!
//! This crate defines the shared vocabulary that scheduling policies,
//! observers, and the service layer build on:
//!
//! - [`Geometry`] and [`Cylinder`]: the simulated disk and its addresses
//! - [`RequestSet`]: pending requests in submission order
//! - [`Input`]: a validated request set, head position, and geometry
//! - [`Direction`] and [`Algorithm`]: what the caller asks the engine to do
//! - [`ScheduleResult`] and [`Stop`]: the serviced sequence, the head's full
//!   trajectory, and its total seek distance
//! - [`Observer`]: receives per-move events and optionally returns control
//!   actions
//! - [`InvalidRequest`]: the single error kind for rejected input

mod algorithm;
mod direction;
mod error;
mod geometry;
mod input;
mod observer;
mod request;
mod schedule;

pub use algorithm::Algorithm;
pub use direction::Direction;
pub use error::InvalidRequest;
pub use geometry::{Cylinder, Geometry, cylinder_from_i64};
pub use input::Input;
pub use observer::Observer;
pub use request::RequestSet;
pub use schedule::{ScheduleResult, Status, Stop};
