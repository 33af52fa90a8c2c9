//! Reminder list view-model.
//!
//! # Invariants
//! - `loading` is true only while a fetch started by `load_reminders` is in
//!   flight. Overlapping loads each toggle it independently.
//! - `show_empty` mirrors the emptiness of the published list after a load.
//! - An error never replaces the published list.

use crate::model::outcome::DataResult;
use crate::model::reminder::ReminderDataItem;
use crate::presentation::events::{EventPublisher, UiEvent};
use crate::repository::reminder_repository::ReminderDataSource;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, watch};

/// Observable state of the reminder list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemindersListState {
    pub reminders: Vec<ReminderDataItem>,
    pub loading: bool,
    pub show_empty: bool,
    /// Message of the last failed load; cleared when a new load starts.
    pub last_error_message: Option<String>,
}

pub struct RemindersListViewModel {
    data_source: Arc<dyn ReminderDataSource>,
    state: watch::Sender<RemindersListState>,
    events: EventPublisher,
}

impl RemindersListViewModel {
    pub fn new(data_source: Arc<dyn ReminderDataSource>) -> Self {
        let (state, _) = watch::channel(RemindersListState::default());
        Self {
            data_source,
            state,
            events: EventPublisher::new(),
        }
    }

    /// Subscribes to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<RemindersListState> {
        self.state.subscribe()
    }

    /// Subscribes to one-shot UI events (snack bars).
    pub fn events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> RemindersListState {
        self.state.borrow().clone()
    }

    /// Loads all reminders and publishes the outcome.
    pub async fn load_reminders(&self) {
        let started_at = Instant::now();
        self.state.send_modify(|state| {
            state.loading = true;
            state.last_error_message = None;
        });

        match self.data_source.get_reminders().await {
            DataResult::Success(reminders) => {
                let items: Vec<ReminderDataItem> =
                    reminders.into_iter().map(ReminderDataItem::from).collect();
                info!(
                    "event=reminders_load module=presentation status=ok count={} duration_ms={}",
                    items.len(),
                    started_at.elapsed().as_millis()
                );
                self.state.send_modify(|state| state.reminders = items);
            }
            DataResult::Error { message, .. } => {
                warn!(
                    "event=reminders_load module=presentation status=error duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                self.state
                    .send_modify(|state| state.last_error_message = Some(message.clone()));
                self.events.publish(UiEvent::ShowSnackBar(message));
            }
        }

        self.state.send_modify(|state| {
            state.show_empty = state.reminders.is_empty();
            state.loading = false;
        });
    }
}
