//! Reminder repository contract and local-store implementation.
//!
//! # Responsibility
//! - Translate store presence/absence semantics into `DataResult`.
//! - Keep presentation code storage-agnostic.

use crate::model::outcome::DataResult;
use crate::model::reminder::Reminder;
use crate::repository::io_context::IoContext;
use crate::store::reminder_store::{ReminderStore, StoreResult};
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

/// Message of the error returned when a point lookup finds nothing.
pub const REMINDER_NOT_FOUND: &str = "Reminder not found!";

/// Data source interface the view-models depend on.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// Returns every reminder. An empty store is a success.
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>>;
    /// Persists (inserts or replaces) one reminder.
    async fn save_reminder(&self, reminder: Reminder) -> DataResult<()>;
    /// Looks one reminder up by id; absence is an error.
    async fn get_reminder(&self, id: &str) -> DataResult<Reminder>;
    /// Removes every reminder.
    async fn delete_all_reminders(&self) -> DataResult<()>;
}

/// Repository backed by a local store.
///
/// Holds no reminder state of its own; clones share the same store.
pub struct LocalReminderRepository<S: ReminderStore + 'static> {
    store: Arc<S>,
    io_context: IoContext,
}

impl<S: ReminderStore + 'static> Clone for LocalReminderRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            io_context: self.io_context,
        }
    }
}

impl<S: ReminderStore + 'static> LocalReminderRepository<S> {
    /// Creates a repository running store work on the blocking pool.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_io_context(store, IoContext::default())
    }

    /// Creates a repository running store work on `io_context`.
    pub fn with_io_context(store: Arc<S>, io_context: IoContext) -> Self {
        Self { store, io_context }
    }

    pub fn io_context(&self) -> IoContext {
        self.io_context
    }

    async fn run<T, F>(&self, job: F) -> StoreResult<T>
    where
        F: FnOnce(&S) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        self.io_context.run(move || job(store.as_ref())).await
    }
}

#[async_trait]
impl<S: ReminderStore + 'static> ReminderDataSource for LocalReminderRepository<S> {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        match self.run(|store| store.list_all()).await {
            Ok(reminders) => DataResult::Success(reminders),
            Err(err) => {
                error!("event=reminders_get module=repository status=error error={err}");
                DataResult::error(err.to_string())
            }
        }
    }

    async fn save_reminder(&self, reminder: Reminder) -> DataResult<()> {
        match self.run(move |store| store.insert(&reminder)).await {
            Ok(()) => DataResult::Success(()),
            Err(err) => {
                error!("event=reminder_save module=repository status=error error={err}");
                DataResult::error(err.to_string())
            }
        }
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        let id = id.to_string();
        match self.run(move |store| store.find_by_id(&id)).await {
            Ok(Some(reminder)) => DataResult::Success(reminder),
            Ok(None) => DataResult::error(REMINDER_NOT_FOUND),
            Err(err) => {
                error!("event=reminder_get module=repository status=error error={err}");
                DataResult::error(err.to_string())
            }
        }
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        match self.run(|store| store.delete_all()).await {
            Ok(()) => {
                info!("event=reminders_delete_all module=repository status=ok");
                DataResult::Success(())
            }
            Err(err) => {
                error!("event=reminders_delete_all module=repository status=error error={err}");
                DataResult::error(err.to_string())
            }
        }
    }
}
