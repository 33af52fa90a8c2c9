//! Core domain logic for Geominder location reminders.
//! This crate is the single source of truth for reminder persistence rules.

pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repository;
pub mod store;

pub use app::{AppConfig, AppError, DatabaseLocation, GeominderApp};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::location::{LatLng, PointOfInterest};
pub use model::outcome::{DataError, DataResult};
pub use model::reminder::{new_reminder_id, Reminder, ReminderDataItem, ReminderId};
pub use presentation::events::{MessageCode, NavigationCommand, UiEvent};
pub use presentation::reminders_list::{RemindersListState, RemindersListViewModel};
pub use presentation::save_reminder::{ReminderDraft, SaveReminderState, SaveReminderViewModel};
pub use presentation::select_location::{LocationPicker, SelectedMarker, DROPPED_PIN_TITLE};
pub use repository::io_context::IoContext;
pub use repository::reminder_repository::{
    LocalReminderRepository, ReminderDataSource, REMINDER_NOT_FOUND,
};
pub use store::reminder_store::{ReminderStore, SqliteReminderStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
