use crate::config::PingMode;
use crate::data_model::target::TargetRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const CONFIG_DIR_NAME: &str = "sryping";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not encode settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk settings document. Every mutation rewrites the whole file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default)]
    pub ping_mode: PingMode,
    #[serde(default)]
    pub saved_pings: Vec<TargetRecord>,
}

/// Loosely typed view of the config file used while loading.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    ping_mode: Option<Value>,
    #[serde(default)]
    saved_pings: Vec<Value>,
}

impl RawConfig {
    fn into_persisted(self) -> PersistedConfig {
        let ping_mode = match self.ping_mode {
            None => PingMode::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                warn!(error = %err, "unknown ping mode, using default");
                PingMode::default()
            }),
        };
        let saved_pings = self
            .saved_pings
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| {
                serde_json::from_value::<TargetRecord>(value)
                    .map_err(|err| warn!(position, error = %err, "dropping unreadable saved ping"))
                    .ok()
            })
            .collect();
        PersistedConfig {
            ping_mode,
            saved_pings,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/sryping/config.json`, or `./config.json` when the
    /// platform has no config directory.
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files yield the defaults. Inside a readable
    /// document the mode and each saved ping are decoded on their own, so one
    /// bad entry only loses itself.
    pub fn load(&self) -> PersistedConfig {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return PersistedConfig::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "config file unreadable, using defaults");
                return PersistedConfig::default();
            }
        };
        match serde_json::from_str::<RawConfig>(&content) {
            Ok(raw) => raw.into_persisted(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "config file is malformed, using defaults");
                PersistedConfig::default()
            }
        }
    }

    pub fn save(&self, state: &PersistedConfig) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), saved = state.saved_pings.len(), "config written");
        Ok(())
    }
}
