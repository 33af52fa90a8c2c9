#![allow(dead_code)]

use async_trait::async_trait;
use geominder_core::{DataResult, Reminder, ReminderDataSource, ReminderDataItem};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Reminder used across scenarios: the Googleplex.
pub fn googleplex_reminder(id: &str) -> Reminder {
    Reminder::with_id(
        id,
        "Reminder title",
        "Reminder description",
        "Googleplex",
        37.42216,
        -122.08427,
    )
}

pub fn googleplex_item() -> ReminderDataItem {
    ReminderDataItem::new(
        Some("Reminder title".to_string()),
        Some("Reminder description".to_string()),
        Some("Googleplex".to_string()),
        Some(37.42216),
        Some(-122.08427),
    )
}

/// In-memory data source double with a switchable error mode.
#[derive(Default)]
pub struct FakeDataSource {
    reminders: Mutex<Vec<Reminder>>,
    return_error: AtomicBool,
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_return_error(&self, value: bool) {
        self.return_error.store(value, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<Reminder> {
        self.reminders.lock().unwrap().clone()
    }

    fn failing(&self) -> bool {
        self.return_error.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        if self.failing() {
            return DataResult::error("Test exception");
        }
        DataResult::Success(self.saved())
    }

    async fn save_reminder(&self, reminder: Reminder) -> DataResult<()> {
        if self.failing() {
            return DataResult::error("Test exception");
        }
        self.reminders.lock().unwrap().push(reminder);
        DataResult::Success(())
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        if self.failing() {
            return DataResult::error("Test exception");
        }
        match self.saved().into_iter().find(|reminder| reminder.id == id) {
            Some(reminder) => DataResult::Success(reminder),
            None => DataResult::error("Reminder not found"),
        }
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        self.reminders.lock().unwrap().clear();
        DataResult::Success(())
    }
}

/// Data source that holds every call until `release` is called once per call.
#[derive(Default)]
pub struct GatedDataSource {
    inner: FakeDataSource,
    gate: Notify,
}

impl GatedDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn saved(&self) -> Vec<Reminder> {
        self.inner.saved()
    }
}

#[async_trait]
impl ReminderDataSource for GatedDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        self.gate.notified().await;
        self.inner.get_reminders().await
    }

    async fn save_reminder(&self, reminder: Reminder) -> DataResult<()> {
        self.gate.notified().await;
        self.inner.save_reminder(reminder).await
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        self.gate.notified().await;
        self.inner.get_reminder(id).await
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        self.inner.delete_all_reminders().await
    }
}
