//! Repository layer consumed by presentation logic.
//!
//! # Responsibility
//! - Expose reminder use-cases as async calls returning `DataResult`.
//! - Run local store work on a configurable execution context.
//!
//! # Invariants
//! - No store fault escapes the repository boundary as a Rust error.
//! - An empty collection is a success; a missing single record is an error.

pub mod io_context;
pub mod reminder_repository;
