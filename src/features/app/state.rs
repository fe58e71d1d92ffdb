use crate::config::{PingMode, SessionConfig};
use crate::data_model::target::{SavedTarget, TargetPatch, TargetRecord, ValidationError};
use crate::features::targets::SavedTargets;
use crate::storage::{ConfigFile, PersistedConfig, StorageError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Application-wide state: the ping mode and saved pings, mirrored to disk.
///
/// Every mutation is applied to a copy, written out, and only then kept, so a
/// failed write leaves both memory and disk as they were.
pub struct AppState {
    mode: PingMode,
    targets: SavedTargets,
    session: SessionConfig,
    config_file: ConfigFile,
}

impl AppState {
    pub fn load(config_file: ConfigFile, session: SessionConfig) -> Self {
        let persisted = config_file.load();
        let targets = SavedTargets::from_records(&persisted.saved_pings);
        info!(
            path = %config_file.path().display(),
            mode = %persisted.ping_mode,
            saved = targets.len(),
            "loaded settings"
        );
        Self {
            mode: persisted.ping_mode,
            targets,
            session,
            config_file,
        }
    }

    pub fn mode(&self) -> PingMode {
        self.mode
    }

    pub fn targets(&self) -> &SavedTargets {
        &self.targets
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session
    }

    pub fn toggle_mode(&mut self) -> Result<PingMode, StoreError> {
        let mode = self.mode.toggle();
        self.commit(mode, self.targets.clone())?;
        info!(%mode, "ping mode changed");
        Ok(mode)
    }

    pub fn create_target(&mut self, record: &TargetRecord) -> Result<usize, StoreError> {
        let mut targets = self.targets.clone();
        let index = targets.create(record)?;
        self.commit(self.mode, targets)?;
        info!(index, name = %record.name.trim(), "saved ping created");
        Ok(index)
    }

    pub fn edit_target(&mut self, index: usize, patch: &TargetPatch) -> Result<(), StoreError> {
        let mut targets = self.targets.clone();
        targets.edit(index, patch)?;
        self.commit(self.mode, targets)?;
        info!(index, "saved ping updated");
        Ok(())
    }

    pub fn delete_target(&mut self, index: usize) -> Result<SavedTarget, StoreError> {
        let mut targets = self.targets.clone();
        let removed = targets.delete(index)?;
        self.commit(self.mode, targets)?;
        info!(index, name = removed.name(), "saved ping deleted");
        Ok(removed)
    }

    fn commit(&mut self, mode: PingMode, targets: SavedTargets) -> Result<(), StoreError> {
        let persisted = PersistedConfig {
            ping_mode: mode,
            saved_pings: targets.to_records(),
        };
        self.config_file.save(&persisted)?;
        self.mode = mode;
        self.targets = targets;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::target::{MethodKind, ProbeMethod};
    use std::fs;
    use tempfile::tempdir;

    fn record(name: &str, host: &str, method: MethodKind, port: Option<u32>) -> TargetRecord {
        TargetRecord {
            name: name.to_string(),
            host: host.to_string(),
            method,
            port,
        }
    }

    #[test]
    fn created_target_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());

        state
            .create_target(&record("Home Router", "192.168.1.1", MethodKind::Icmp, None))
            .unwrap();

        let reloaded = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        let entry = reloaded.targets().get(0).expect("saved entry");
        assert_eq!(entry.name(), "Home Router");
        assert_eq!(entry.target().host(), "192.168.1.1");
        assert_eq!(entry.target().method(), ProbeMethod::Icmp);
        assert_eq!(reloaded.targets().len(), 1);
    }

    #[test]
    fn invalid_port_is_rejected_and_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());

        let err = state
            .create_target(&record("Web", "example.com", MethodKind::Tcp, Some(70000)))
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidPort { value: 70000 })
        ));
        assert!(state.targets().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn editing_to_icmp_removes_port_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        state
            .create_target(&record("Web", "example.com", MethodKind::Tcp, Some(8080)))
            .unwrap();

        let patch = TargetPatch {
            method: Some(MethodKind::Icmp),
            ..TargetPatch::default()
        };
        state.edit_target(0, &patch).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entry = &json["saved_pings"][0];
        assert_eq!(entry["method"], "ICMP");
        assert!(entry.get("port").is_none());
    }

    #[test]
    fn toggle_mode_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        assert_eq!(state.mode(), PingMode::Smart);

        assert_eq!(state.toggle_mode().unwrap(), PingMode::Extended);

        let reloaded = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        assert_eq!(reloaded.mode(), PingMode::Extended);
    }

    #[test]
    fn delete_persists_and_reports_bad_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        state
            .create_target(&record("A", "a.example", MethodKind::Icmp, None))
            .unwrap();
        state
            .create_target(&record("B", "b.example", MethodKind::Icmp, None))
            .unwrap();

        let removed = state.delete_target(0).unwrap();
        assert_eq!(removed.name(), "A");
        assert!(matches!(
            state.delete_target(3),
            Err(StoreError::Validation(ValidationError::IndexOutOfRange { .. }))
        ));

        let reloaded = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        assert_eq!(reloaded.targets().len(), 1);
        assert_eq!(reloaded.targets().get(0).unwrap().name(), "B");
    }

    #[test]
    fn failed_write_rolls_back_memory() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("config.json");
        fs::create_dir(&path).unwrap();
        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());

        let err = state
            .create_target(&record("A", "a.example", MethodKind::Icmp, None))
            .unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(state.targets().is_empty());

        assert!(state.toggle_mode().is_err());
        assert_eq!(state.mode(), PingMode::Smart);
    }

    #[test]
    fn unreadable_entry_does_not_cost_the_others() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"ping_mode": "Extended", "saved_pings": [
                {"name": "A", "host": "a.example", "method": "ICMP"},
                {"name": "Bad", "host": "b.example", "method": "tcp", "port": 80},
                {"name": "C", "host": "c.example", "method": "TCP", "port": 443}
            ]}"#,
        )
        .unwrap();

        let mut state = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        assert_eq!(state.mode(), PingMode::Extended);
        assert_eq!(state.targets().len(), 2);

        state
            .create_target(&record("D", "d.example", MethodKind::Icmp, None))
            .unwrap();

        let reloaded = AppState::load(ConfigFile::new(&path), SessionConfig::default());
        let names: Vec<_> = reloaded.targets().list().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert_eq!(reloaded.mode(), PingMode::Extended);
    }
}
