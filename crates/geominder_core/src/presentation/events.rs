//! One-shot UI events shared by all view-models.

use log::trace;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Localizable message identifiers published by view-models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCode {
    EnterTitle,
    SelectLocation,
    ReminderSaved,
    SelectPoi,
    PermissionDenied,
}

impl MessageCode {
    /// Default English text for the message.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::EnterTitle => "Please enter title",
            Self::SelectLocation => "Please select location",
            Self::ReminderSaved => "Reminder Saved !",
            Self::SelectPoi => "Please select a point of interest",
            Self::PermissionDenied => {
                "Location permission is needed to show your position on the map"
            }
        }
    }
}

/// Navigation requested by a view-model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCommand {
    /// Pop the current screen.
    Back,
    /// Pop back to the named destination.
    BackTo(String),
    /// Open the named destination.
    To(String),
}

/// Transient UI event; consumed once by whoever is subscribed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    ShowSnackBar(String),
    ShowSnackBarCode(MessageCode),
    ShowToast(MessageCode),
    Navigate(NavigationCommand),
}

/// Broadcast publisher for [`UiEvent`]s.
///
/// Publishing with no subscriber drops the event.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    tx: broadcast::Sender<UiEvent>,
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            trace!("event=ui_event_dropped module=presentation status=ok reason=no_subscriber");
        }
    }
}
