use geominder_core::{
    AppConfig, AppError, DataResult, GeominderApp, IoContext, LatLng, PointOfInterest,
    ReminderDataSource,
};
use rusqlite::Connection;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reminders_survive_reopening_the_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reminders.sqlite3");

    let saved_id = {
        let app = GeominderApp::open(&AppConfig::file(&path)).unwrap();
        let save_vm = app.save_view_model();
        save_vm.set_title("Reminder title");
        save_vm.set_description("Reminder description");

        let mut picker = app.location_picker(save_vm.clone());
        picker.on_poi_click(PointOfInterest::new(
            "Googleplex",
            LatLng::new(37.42216, -122.08427),
        ));
        assert!(picker.confirm());

        let item = save_vm.current_item();
        assert!(save_vm.save_reminder(&item).await);
        item.id
    };

    let app = GeominderApp::open(&AppConfig::file(&path)).unwrap();
    let list_vm = app.list_view_model();
    list_vm.load_reminders().await;

    let state = list_vm.state();
    assert_eq!(state.reminders.len(), 1);
    assert_eq!(state.reminders[0].id, saved_id);
    assert_eq!(state.reminders[0].location.as_deref(), Some("Googleplex"));
}

#[tokio::test]
async fn view_models_share_one_repository() {
    let app =
        GeominderApp::open(&AppConfig::in_memory().with_io_context(IoContext::Immediate)).unwrap();
    let save_vm = app.save_view_model();
    let list_vm = app.list_view_model();

    save_vm.set_title("Water plants");
    save_vm.set_location("Home", 1.0, 2.0, None);
    assert!(save_vm.save_reminder(&save_vm.current_item()).await);

    list_vm.load_reminders().await;
    assert_eq!(list_vm.state().reminders.len(), 1);

    assert!(app.data_source().delete_all_reminders().await.is_success());
    list_vm.load_reminders().await;
    assert!(list_vm.state().show_empty);
    assert_eq!(
        app.data_source().get_reminders().await,
        DataResult::Success(Vec::new())
    );
}

#[test]
fn open_rejects_database_from_newer_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    let result = GeominderApp::open(&AppConfig::file(&path));
    assert!(matches!(result, Err(AppError::Db(_))));
}
