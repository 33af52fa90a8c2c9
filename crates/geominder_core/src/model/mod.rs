//! Domain model for location reminders.
//!
//! # Responsibility
//! - Define the persisted reminder record and its presentation projection.
//! - Define the success/error outcome returned by every data-access call.
//!
//! # Invariants
//! - Every reminder is identified by a stable string id.
//! - Outcomes carry exactly one of payload or error message.

pub mod location;
pub mod outcome;
pub mod reminder;
