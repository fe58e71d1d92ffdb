use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `SRYPING_LOG=debug`.
pub const LOG_ENV: &str = "SRYPING_LOG";
const LOG_FILE_NAME: &str = "sryping.log";

/// `sryping.log` in the directory of the config file.
pub fn log_path(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is logged when the file cannot be opened.
pub fn init(path: &Path) -> bool {
    let Some(file) = open_log_file(path) else {
        return false;
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
