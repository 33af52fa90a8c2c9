//! Application wiring.
//!
//! # Responsibility
//! - Open storage and build the repository from explicit configuration.
//! - Hand out view-models with their collaborators injected.
//!
//! # Invariants
//! - There is no process-wide registry; every component receives its
//!   collaborators through its constructor.
//! - All view-models built by one app share one repository and store.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::presentation::reminders_list::RemindersListViewModel;
use crate::presentation::save_reminder::SaveReminderViewModel;
use crate::presentation::select_location::LocationPicker;
use crate::repository::io_context::IoContext;
use crate::repository::reminder_repository::{LocalReminderRepository, ReminderDataSource};
use crate::store::reminder_store::{SqliteReminderStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// Where reminders are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

/// Explicit configuration for [`GeominderApp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseLocation,
    pub io_context: IoContext,
}

impl AppConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            database: DatabaseLocation::File(path.into()),
            io_context: IoContext::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database: DatabaseLocation::InMemory,
            io_context: IoContext::default(),
        }
    }

    pub fn with_io_context(mut self, io_context: IoContext) -> Self {
        self.io_context = io_context;
        self
    }
}

#[derive(Debug)]
pub enum AppError {
    Db(DbError),
    Store(StoreError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Composition root for the reminder core.
pub struct GeominderApp {
    repository: Arc<LocalReminderRepository<SqliteReminderStore>>,
}

impl GeominderApp {
    /// Opens (and migrates) the configured database and wires the repository.
    pub fn open(config: &AppConfig) -> Result<Self, AppError> {
        let conn = match &config.database {
            DatabaseLocation::File(path) => open_db(path)?,
            DatabaseLocation::InMemory => open_db_in_memory()?,
        };
        let store = Arc::new(SqliteReminderStore::try_new(conn)?);
        let repository = LocalReminderRepository::with_io_context(store, config.io_context);
        info!(
            "event=app_open module=app status=ok io_context={:?}",
            config.io_context
        );
        Ok(Self {
            repository: Arc::new(repository),
        })
    }

    /// Returns the shared repository as the view-model-facing interface.
    pub fn data_source(&self) -> Arc<dyn ReminderDataSource> {
        self.repository.clone()
    }

    pub fn list_view_model(&self) -> RemindersListViewModel {
        RemindersListViewModel::new(self.data_source())
    }

    pub fn save_view_model(&self) -> Arc<SaveReminderViewModel> {
        Arc::new(SaveReminderViewModel::new(self.data_source()))
    }

    /// Builds a location picker feeding the given save view-model.
    pub fn location_picker(&self, save_view_model: Arc<SaveReminderViewModel>) -> LocationPicker {
        LocationPicker::new(save_view_model)
    }
}
