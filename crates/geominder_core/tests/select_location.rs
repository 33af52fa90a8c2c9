mod common;

use common::FakeDataSource;
use geominder_core::{
    LatLng, LocationPicker, MessageCode, NavigationCommand, PointOfInterest,
    SaveReminderViewModel, UiEvent, DROPPED_PIN_TITLE,
};
use std::sync::Arc;

fn picker() -> (LocationPicker, Arc<SaveReminderViewModel>) {
    let vm = Arc::new(SaveReminderViewModel::new(Arc::new(FakeDataSource::new())));
    (LocationPicker::new(Arc::clone(&vm)), vm)
}

#[test]
fn confirm_without_marker_asks_for_a_point_of_interest() {
    let (picker, vm) = picker();
    let mut events = vm.events();

    assert!(!picker.confirm());
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarCode(MessageCode::SelectPoi)
    );
    assert_eq!(vm.draft().location_label, None);
    assert_eq!(vm.draft().latitude, None);
}

#[test]
fn confirm_poi_fills_draft_and_navigates_back() {
    let (mut picker, vm) = picker();
    let mut events = vm.events();
    let poi = PointOfInterest::new("Googleplex", LatLng::new(37.42216, -122.08427));

    picker.on_poi_click(poi.clone());
    assert!(picker.confirm());

    let draft = vm.draft();
    assert_eq!(draft.location_label.as_deref(), Some("Googleplex"));
    assert_eq!(draft.latitude, Some(37.42216));
    assert_eq!(draft.longitude, Some(-122.08427));
    assert_eq!(draft.selected_poi, Some(poi));
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::Navigate(NavigationCommand::Back)
    );
}

#[test]
fn long_click_replaces_previous_marker_with_dropped_pin() {
    let (mut picker, vm) = picker();
    picker.on_poi_click(PointOfInterest::new("Cafe", LatLng::new(1.0, 1.0)));
    picker.on_map_long_click(LatLng::new(48.8584, 2.2945));

    let marker = picker.selected_marker().unwrap();
    assert_eq!(marker.title, DROPPED_PIN_TITLE);
    assert_eq!(marker.poi, None);

    assert!(picker.confirm());
    let draft = vm.draft();
    assert_eq!(draft.location_label.as_deref(), Some(DROPPED_PIN_TITLE));
    assert_eq!(draft.latitude, Some(48.8584));
    assert_eq!(draft.selected_poi, None);
}

#[test]
fn denied_permission_publishes_explanation() {
    let (picker, vm) = picker();
    let mut events = vm.events();

    picker.on_permission_result(true);
    assert!(events.try_recv().is_err());

    picker.on_permission_result(false);
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarCode(MessageCode::PermissionDenied)
    );
}
