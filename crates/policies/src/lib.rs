//! Disk-head scheduling policies.
//!
//! Each policy turns a validated [`Input`] into a [`ScheduleResult`]: the
//! order in which requests are serviced and the total head movement.
//!
//! # Policies
//!
//! - [`fcfs`]: first come, first served
//! - [`sstf`]: shortest seek time first
//! - [`scan`]: sweep to the edge, then reverse
//! - [`look`]: sweep to the last request, then reverse
//! - [`c_scan`]: sweep to the edge, wrap to the other edge, keep direction
//! - [`c_look`]: sweep to the last request, jump back, keep direction
//!
//! [`schedule`] dispatches on an [`Algorithm`], and [`compare`] runs several
//! policies on one input and reports the cheapest.
//!
//! # Observation
//!
//! Every policy walks the head through the same loop, which emits a
//! [`walk::Event`] after each move. Observers can return
//! [`walk::Action::StopEarly`] to cut the walk short; the result then carries
//! [`Status::StoppedByObserver`]. Each policy also has an `_unobserved` form.
//!
//! [`Input`]: diskhead_core::Input
//! [`ScheduleResult`]: diskhead_core::ScheduleResult
//! [`Algorithm`]: diskhead_core::Algorithm
//! [`Status::StoppedByObserver`]: diskhead_core::Status::StoppedByObserver

mod dispatch;
mod sweep;


pub mod c_look;
pub mod c_scan;
pub mod compare;
pub mod fcfs;
pub mod look;
pub mod scan;
pub mod sstf;
pub mod walk;

pub use compare::{compare, compare_all};
pub use dispatch::{schedule, schedule_requests, schedule_unobserved};
