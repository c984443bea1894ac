//! # Business Settings Repository
//!
//! Stores the [`BusinessSettings`] record in `business_settings_v1.json`
//! (the browser build kept the same record under the local-storage key
//! `businessSettings:v1`).
//!
//! Loading is forgiving: a missing file yields the default settings, and
//! an unreadable or corrupt file logs a warning and also yields the
//! default rather than surfacing an error to the caller.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::BusinessSettings;
use std::fs;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{JsonConnection, SCHEMA_VERSION};
use crate::storage::traits::SettingsStorage;

const SETTINGS_FILE: &str = "business_settings_v1.json";

/// On-disk envelope: the settings record plus migration metadata.
#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    schema_version: String,
    /// RFC 3339 timestamp of the last save.
    updated_at: String,
    #[serde(flatten)]
    settings: BusinessSettings,
}

/// JSON-file-backed implementation of [`SettingsStorage`].
#[derive(Clone)]
pub struct SettingsRepository {
    connection: Arc<JsonConnection>,
}

impl SettingsRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl SettingsStorage for SettingsRepository {
    fn load_settings(&self) -> Result<BusinessSettings> {
        let path = self.connection.file_path(SETTINGS_FILE);
        if !path.exists() {
            debug!("No settings store at {:?}, using defaults", path);
            return Ok(BusinessSettings::default());
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read settings store {:?}: {}", path, e);
                return Ok(BusinessSettings::default());
            }
        };

        match serde_json::from_str::<SettingsFile>(&raw) {
            Ok(file) => {
                debug!("Loaded settings from {:?}", path);
                Ok(file.settings)
            }
            Err(e) => {
                warn!("Corrupt settings store {:?}: {}", path, e);
                Ok(BusinessSettings::default())
            }
        }
    }

    fn save_settings(&self, settings: &BusinessSettings) -> Result<()> {
        let file = SettingsFile {
            schema_version: SCHEMA_VERSION.to_string(),
            updated_at: Utc::now().to_rfc3339(),
            settings: settings.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        self.connection.write_atomic(SETTINGS_FILE, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DayKey, TimeField};
    use tempfile::TempDir;

    fn setup_repo() -> (SettingsRepository, Arc<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(JsonConnection::new(temp_dir.path()).expect("Failed to create connection"));
        (SettingsRepository::new(connection.clone()), connection, temp_dir)
    }

    #[test]
    fn test_load_without_store_returns_default() {
        let (repo, _conn, _temp_dir) = setup_repo();
        let settings = repo.load_settings().unwrap();
        assert_eq!(settings, BusinessSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (repo, _conn, _temp_dir) = setup_repo();

        let mut settings = BusinessSettings::default();
        settings.business_name = "Fade Factory".to_string();
        settings.timezone = "America/New_York".to_string();
        settings.hours = settings.hours.with_time(DayKey::Mon, TimeField::End, "18:30");
        settings.hours_hint = Some(settings.hours.summary());
        settings.onboarding_complete = true;

        repo.save_settings(&settings).unwrap();
        let loaded = repo.load_settings().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_settings_survive_reopen() {
        let (repo, _conn, temp_dir) = setup_repo();

        let mut settings = BusinessSettings::default();
        settings.business_name = "Fade Factory".to_string();
        repo.save_settings(&settings).unwrap();

        // New connection over the same directory, as after an app restart.
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let repo2 = SettingsRepository::new(connection);
        assert_eq!(repo2.load_settings().unwrap().business_name, "Fade Factory");
    }

    #[test]
    fn test_corrupt_store_loads_default() {
        let (repo, conn, _temp_dir) = setup_repo();
        std::fs::write(conn.file_path(SETTINGS_FILE), "not json at all{{{").unwrap();

        let settings = repo.load_settings().unwrap();
        assert_eq!(settings, BusinessSettings::default());
    }

    #[test]
    fn test_partial_store_fills_defaults() {
        let (repo, conn, _temp_dir) = setup_repo();
        // A record written by an older version without rules or hours.
        conn.write_atomic(
            SETTINGS_FILE,
            r#"{"schema_version":"1.0","updated_at":"2025-01-01T00:00:00Z","business_name":"Shear Genius"}"#,
        )
        .unwrap();

        let settings = repo.load_settings().unwrap();
        assert_eq!(settings.business_name, "Shear Genius");
        assert_eq!(settings.timezone, "America/Chicago");
        assert!(!settings.onboarding_complete);
    }

    #[test]
    fn test_saved_file_carries_schema_version() {
        let (repo, conn, _temp_dir) = setup_repo();
        repo.save_settings(&BusinessSettings::default()).unwrap();

        let raw = std::fs::read_to_string(conn.file_path(SETTINGS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["schema_version"], "1.0");
        assert!(value["updated_at"].is_string());
    }
}
