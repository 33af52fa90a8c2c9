//! Presentation state machines.
//!
//! # Responsibility
//! - Turn UI intents into repository calls.
//! - Publish state snapshots (`watch`) and one-shot UI events (`broadcast`)
//!   for the UI layer to render.
//!
//! # Invariants
//! - View-models never reach into UI objects; they only publish.
//! - View-models never re-raise repository errors; messages are published.

pub mod events;
pub mod reminders_list;
pub mod save_reminder;
pub mod select_location;
