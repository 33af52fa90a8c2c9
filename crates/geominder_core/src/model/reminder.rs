//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the local store.
//! - Define the view-facing item and conversions between the two shapes.
//!
//! # Invariants
//! - `id` is unique across the store and never changes after creation.
//! - `latitude`/`longitude` are meaningful only together with `location`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a reminder.
///
/// Kept as a plain string because ids may come from callers (import, tests)
/// as well as from the generator in [`new_reminder_id`].
pub type ReminderId = String;

/// Generates a fresh random reminder id.
pub fn new_reminder_id() -> ReminderId {
    Uuid::new_v4().to_string()
}

/// Persisted reminder record.
///
/// Fields stay optional so a record can be written from any draft state;
/// completeness is enforced by the save flow, not by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable location label (POI name or dropped pin).
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a generated id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::with_id(
            new_reminder_id(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a reminder with a caller-provided id.
    pub fn with_id(
        id: impl Into<ReminderId>,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            description: Some(description.into()),
            location: Some(location.into()),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Returns whether the reminder has both a title and a location label.
    pub fn is_complete(&self) -> bool {
        has_text(self.title.as_deref()) && has_text(self.location.as_deref())
    }
}

/// Reminder projection consumed by list and save screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDataItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: ReminderId,
}

impl ReminderDataItem {
    /// Creates an item with a generated id, as the save screen does for a
    /// fresh entry session.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            title,
            description,
            location,
            latitude,
            longitude,
            id: new_reminder_id(),
        }
    }
}

impl From<Reminder> for ReminderDataItem {
    fn from(value: Reminder) -> Self {
        Self {
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
            id: value.id,
        }
    }
}

impl From<&ReminderDataItem> for Reminder {
    fn from(value: &ReminderDataItem) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            description: value.description.clone(),
            location: value.location.clone(),
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Returns true for present, non-empty text.
pub(crate) fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}
