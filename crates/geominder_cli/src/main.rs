//! Command-line driver for the reminder core.
//!
//! # Responsibility
//! - Exercise `geominder_core` against a real SQLite file.
//! - Keep output line-oriented and deterministic for quick local checks.

use clap::{Parser, Subcommand};
use geominder_core::{
    init_logging, AppConfig, DataResult, GeominderApp, LatLng, LocationPicker, MessageCode,
    PointOfInterest, ReminderDataItem, ReminderDataSource, UiEvent,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "geominder", version, about = "Location reminder store")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "GEOMINDER_DB", default_value = "geominder.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "GEOMINDER_LOG_DIR")]
    log_dir: Option<String>,

    #[arg(long, env = "GEOMINDER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Saves a reminder at a point of interest or dropped pin.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Point-of-interest name; a dropped pin is used when omitted.
        #[arg(long)]
        poi: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Lists every reminder.
    List,
    /// Shows one reminder by id.
    Show { id: String },
    /// Deletes every reminder.
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let app = match GeominderApp::open(&AppConfig::file(&cli.db)) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to open {}: {err}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };

    let ok = match cli.command {
        Command::Add {
            title,
            description,
            poi,
            lat,
            lon,
        } => add(&app, title, description, poi, LatLng::new(lat, lon)).await,
        Command::List => list(&app).await,
        Command::Show { id } => show(&app, &id).await,
        Command::Clear => match app.data_source().delete_all_reminders().await {
            DataResult::Success(()) => {
                println!("cleared");
                true
            }
            DataResult::Error { message, .. } => {
                eprintln!("error: {message}");
                false
            }
        },
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn add(
    app: &GeominderApp,
    title: String,
    description: String,
    poi: Option<String>,
    position: LatLng,
) -> bool {
    let save_vm = app.save_view_model();
    let mut events = save_vm.events();
    save_vm.set_title(title);
    save_vm.set_description(description);

    let mut picker: LocationPicker = app.location_picker(save_vm.clone());
    match poi {
        Some(name) => picker.on_poi_click(PointOfInterest::new(name, position)),
        None => picker.on_map_long_click(position),
    }
    picker.confirm();

    let item = save_vm.current_item();
    let saved = save_vm.save_reminder(&item).await;

    while let Ok(event) = events.try_recv() {
        match event {
            UiEvent::ShowSnackBar(message) => eprintln!("error: {message}"),
            UiEvent::ShowSnackBarCode(code) | UiEvent::ShowToast(code) => {
                print_message(code);
            }
            UiEvent::Navigate(_) => {}
        }
    }

    if saved {
        println!("id={}", item.id);
        save_vm.on_clear();
    }
    saved
}

async fn list(app: &GeominderApp) -> bool {
    let list_vm = app.list_view_model();
    list_vm.load_reminders().await;
    let state = list_vm.state();

    if let Some(message) = state.last_error_message {
        eprintln!("error: {message}");
        return false;
    }
    if state.show_empty {
        println!("no reminders");
        return true;
    }
    for item in &state.reminders {
        print_item(item);
    }
    true
}

async fn show(app: &GeominderApp, id: &str) -> bool {
    match app.data_source().get_reminder(id).await {
        DataResult::Success(reminder) => {
            print_item(&ReminderDataItem::from(reminder));
            true
        }
        DataResult::Error { message, .. } => {
            eprintln!("error: {message}");
            false
        }
    }
}

fn print_item(item: &ReminderDataItem) {
    println!(
        "{}\t{}\t{}\t{}\t{},{}",
        item.id,
        item.title.as_deref().unwrap_or(""),
        item.description.as_deref().unwrap_or(""),
        item.location.as_deref().unwrap_or(""),
        item.latitude.map(|v| v.to_string()).unwrap_or_default(),
        item.longitude.map(|v| v.to_string()).unwrap_or_default(),
    );
}

fn print_message(code: MessageCode) {
    println!("{}", code.default_text());
}
