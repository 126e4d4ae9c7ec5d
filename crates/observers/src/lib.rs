//! Reusable observers for diskhead scheduling policies.
//!
//! Every policy in [`diskhead_policies`] accepts an [`Observer`] of
//! [`Event`]s. This crate provides observers that cover the common needs:
//!
//! - [`Recorder`]: collects the head track, one sample per move, for
//!   charting or animating a schedule
//! - [`Logger`]: emits each move through [`tracing`]
//! - [`Limit`]: stops the walk after a fixed number of moves
//!
//! Each observer also implements [`Observer`] for `&mut Self`, so it can be
//! passed to a policy by reference and inspected afterwards.
//!
//! [`Observer`]: diskhead_core::Observer
//! [`Event`]: diskhead_policies::walk::Event

mod limit;
mod logger;
mod recorder;

pub use limit::Limit;
pub use logger::Logger;
pub use recorder::{Recorder, Sample};
