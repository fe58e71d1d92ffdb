use sryping::app::AppState;
use sryping::config::SessionConfig;
use sryping::logging;
use sryping::settings::load_from_cli;
use sryping::storage::ConfigFile;
use sryping::ui::run_ui;

fn main() -> std::io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let config_file = settings
        .config_path
        .clone()
        .map(ConfigFile::new)
        .unwrap_or_else(ConfigFile::default_location);
    logging::init(&logging::log_path(config_file.path()));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sryping starting");

    let session = SessionConfig {
        redraw_every: settings.redraw_every,
        ..SessionConfig::default()
    };
    let app = AppState::load(config_file, session);

    run_ui(app)
}
