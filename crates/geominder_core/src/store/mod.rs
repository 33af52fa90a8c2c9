//! Local reminder store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Own durable copies of reminder records.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Absence of a record is reported as `None`, never as an error.
//! - `delete_all` is idempotent.

pub mod reminder_store;
