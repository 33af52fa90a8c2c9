//! Save-reminder view-model.
//!
//! # Responsibility
//! - Hold unpersisted draft fields for one entry session.
//! - Validate a reminder before it reaches the repository.
//!
//! # Invariants
//! - At most one validation message is published per validation call; the
//!   title check runs before the location check.
//! - Invalid reminders never reach the repository.

use crate::model::location::PointOfInterest;
use crate::model::outcome::DataResult;
use crate::model::reminder::{has_text, Reminder, ReminderDataItem};
use crate::presentation::events::{EventPublisher, MessageCode, NavigationCommand, UiEvent};
use crate::repository::reminder_repository::ReminderDataSource;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Draft reminder fields; all absent until the user fills them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location_label: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub selected_poi: Option<PointOfInterest>,
}

/// Observable state of the save screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveReminderState {
    pub draft: ReminderDraft,
    pub loading: bool,
}

pub struct SaveReminderViewModel {
    data_source: Arc<dyn ReminderDataSource>,
    state: watch::Sender<SaveReminderState>,
    events: EventPublisher,
}

impl SaveReminderViewModel {
    pub fn new(data_source: Arc<dyn ReminderDataSource>) -> Self {
        let (state, _) = watch::channel(SaveReminderState::default());
        Self {
            data_source,
            state,
            events: EventPublisher::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveReminderState> {
        self.state.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    pub fn state(&self) -> SaveReminderState {
        self.state.borrow().clone()
    }

    pub fn draft(&self) -> ReminderDraft {
        self.state.borrow().draft.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.state.send_modify(|state| state.draft.title = Some(title));
    }

    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.state
            .send_modify(|state| state.draft.description = Some(description));
    }

    /// Stores a location chosen on the map.
    ///
    /// `poi` is `Some` when the user picked a named point of interest rather
    /// than dropping a pin.
    pub fn set_location(
        &self,
        label: impl Into<String>,
        latitude: f64,
        longitude: f64,
        poi: Option<PointOfInterest>,
    ) {
        let label = label.into();
        self.state.send_modify(|state| {
            state.draft.location_label = Some(label);
            state.draft.latitude = Some(latitude);
            state.draft.longitude = Some(longitude);
            state.draft.selected_poi = poi;
        });
    }

    /// Builds a data item from the current draft with a fresh id.
    pub fn current_item(&self) -> ReminderDataItem {
        let draft = self.draft();
        ReminderDataItem::new(
            draft.title,
            draft.description,
            draft.location_label,
            draft.latitude,
            draft.longitude,
        )
    }

    /// Resets every draft field to absent.
    pub fn on_clear(&self) {
        self.state
            .send_modify(|state| state.draft = ReminderDraft::default());
    }

    /// Publishes a UI event on behalf of a collaborating screen.
    pub(crate) fn publish(&self, event: UiEvent) {
        self.events.publish(event);
    }

    /// Checks that `item` has a title and a location label.
    ///
    /// Publishes `EnterTitle` or `SelectLocation` and returns `false` on the
    /// first missing field. Coordinates are not checked here.
    pub fn validate_entered_data(&self, item: &ReminderDataItem) -> bool {
        if !has_text(item.title.as_deref()) {
            self.events
                .publish(UiEvent::ShowSnackBarCode(MessageCode::EnterTitle));
            return false;
        }

        if !has_text(item.location.as_deref()) {
            self.events
                .publish(UiEvent::ShowSnackBarCode(MessageCode::SelectLocation));
            return false;
        }

        true
    }

    /// Validates and persists `item`.
    ///
    /// Returns whether the reminder was saved. On success publishes a
    /// `ReminderSaved` toast followed by a back navigation; on a repository
    /// error publishes its message and stays on the screen.
    pub async fn save_reminder(&self, item: &ReminderDataItem) -> bool {
        if !self.validate_entered_data(item) {
            info!("event=reminder_save module=presentation status=rejected reason=validation");
            return false;
        }

        self.state.send_modify(|state| state.loading = true);
        let outcome = self.data_source.save_reminder(Reminder::from(item)).await;
        self.state.send_modify(|state| state.loading = false);

        match outcome {
            DataResult::Success(()) => {
                info!("event=reminder_save module=presentation status=ok");
                self.events
                    .publish(UiEvent::ShowToast(MessageCode::ReminderSaved));
                self.events
                    .publish(UiEvent::Navigate(NavigationCommand::Back));
                true
            }
            DataResult::Error { message, .. } => {
                warn!("event=reminder_save module=presentation status=error");
                self.events.publish(UiEvent::ShowSnackBar(message));
                false
            }
        }
    }
}
