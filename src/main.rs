use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use yocode::Level;
use yocode::core::action::{Action, update};
use yocode::core::catalog::Catalog;
use yocode::core::config::{self, CliOverrides};
use yocode::core::settings::{FileSettingsStore, Theme, UiLanguage};
use yocode::core::state::App;

#[derive(Parser)]
#[command(name = "yocode", about = "Browse programming languages to learn")]
struct Args {
    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Interface language
    #[arg(long = "lang", value_enum)]
    language: Option<UiLanguage>,

    /// Start filtered to a level (skips the welcome dialog)
    #[arg(long, value_enum)]
    level: Option<Level>,

    /// Catalog file to use instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Do not show the welcome dialog
    #[arg(long)]
    no_welcome: bool,

    /// Print the filtered catalog as JSON and exit
    #[arg(long)]
    list: bool,

    /// Text query applied with --list
    #[arg(long, requires = "list")]
    query: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to yocode.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("yocode.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // Reading only: nothing is written until the interactive app starts
    let (mut store, config_error) = FileSettingsStore::open(config::config_path());
    let cli = CliOverrides {
        theme: args.theme,
        language: args.language,
        catalog: args.catalog.clone(),
        no_welcome: args.no_welcome,
    };
    let resolved = config::resolve(store.config(), &cli);
    info!("YoCode starting up with {:?}", resolved);

    let catalog = resolved
        .catalog_file
        .as_deref()
        .and_then(|path| match Catalog::load(path) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!("Failed to load catalog {}, using built-in: {}", path.display(), e);
                None
            }
        });

    let mut app = App::from_config(&resolved, catalog);
    if let Some(level) = args.level {
        update(&mut app, level.action());
    }

    if args.list {
        if let Some(query) = args.query {
            update(&mut app, Action::QuerySubmitted(query));
        }
        let json = serde_json::to_string_pretty(&app.visible_entries())
            .map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    match config_error {
        // Already logged with the parse details
        Some(_) => app.status_message = app.locale.strings().config_ignored.to_string(),
        None => {
            if let Some(path) = store.path() {
                config::ensure_config_file(path);
            }
        }
    }

    let show_welcome = resolved.welcome_dialog && args.level.is_none();
    yocode::tui::run(app, &mut store, show_welcome)
}
