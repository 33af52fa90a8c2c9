//! Location picker: turns map interaction into save-screen draft data.
//!
//! # Invariants
//! - At most one marker is selected; each tap or long press replaces it.
//! - Confirming without a marker changes no draft field.

use crate::model::location::{LatLng, PointOfInterest};
use crate::presentation::events::{MessageCode, NavigationCommand, UiEvent};
use crate::presentation::save_reminder::SaveReminderViewModel;
use log::info;
use std::sync::Arc;

/// Title given to a marker dropped with a long press.
pub const DROPPED_PIN_TITLE: &str = "Dropped Pin";

/// Marker currently selected on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMarker {
    pub title: String,
    pub position: LatLng,
    /// Set when the marker came from a point-of-interest tap.
    pub poi: Option<PointOfInterest>,
}

pub struct LocationPicker {
    save_view_model: Arc<SaveReminderViewModel>,
    marker: Option<SelectedMarker>,
}

impl LocationPicker {
    pub fn new(save_view_model: Arc<SaveReminderViewModel>) -> Self {
        Self {
            save_view_model,
            marker: None,
        }
    }

    pub fn selected_marker(&self) -> Option<&SelectedMarker> {
        self.marker.as_ref()
    }

    /// Selects a point of interest, titled with its name.
    pub fn on_poi_click(&mut self, poi: PointOfInterest) {
        self.marker = Some(SelectedMarker {
            title: poi.name.clone(),
            position: poi.position,
            poi: Some(poi),
        });
    }

    /// Drops a pin at an arbitrary coordinate.
    pub fn on_map_long_click(&mut self, position: LatLng) {
        self.marker = Some(SelectedMarker {
            title: DROPPED_PIN_TITLE.to_string(),
            position,
            poi: None,
        });
    }

    /// Reacts to the fine-location permission answer.
    pub fn on_permission_result(&self, granted: bool) {
        if !granted {
            self.save_view_model
                .publish(UiEvent::ShowSnackBarCode(MessageCode::PermissionDenied));
        }
    }

    /// Hands the selected marker to the save screen and navigates back.
    ///
    /// Returns `false` and asks the user to pick a location when nothing is
    /// selected.
    pub fn confirm(&self) -> bool {
        let Some(marker) = self.marker.as_ref() else {
            self.save_view_model
                .publish(UiEvent::ShowSnackBarCode(MessageCode::SelectPoi));
            return false;
        };

        info!(
            "event=location_select module=presentation status=ok from_poi={}",
            marker.poi.is_some()
        );
        self.save_view_model.set_location(
            marker.title.clone(),
            marker.position.latitude,
            marker.position.longitude,
            marker.poi.clone(),
        );
        self.save_view_model
            .publish(UiEvent::Navigate(NavigationCommand::Back));
        true
    }
}
