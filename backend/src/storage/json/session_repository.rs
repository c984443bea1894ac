//! # Session Role Repository
//!
//! Stores the current [`AppRole`] in `app_role_v1.json` (local-storage
//! key `appRole:v1` in the browser build). The role is stored as a raw
//! string and parsed on the way out, so anything unrecognized reads as
//! `Public` instead of failing.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::AppRole;
use std::fs;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{JsonConnection, SCHEMA_VERSION};
use crate::storage::traits::SessionStorage;

const ROLE_FILE: &str = "app_role_v1.json";

#[derive(Debug, Serialize, Deserialize)]
struct RoleFile {
    schema_version: String,
    updated_at: String,
    role: String,
}

/// JSON-file-backed implementation of [`SessionStorage`].
#[derive(Clone)]
pub struct SessionRepository {
    connection: Arc<JsonConnection>,
}

impl SessionRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl SessionStorage for SessionRepository {
    fn get_role(&self) -> Result<AppRole> {
        let path = self.connection.file_path(ROLE_FILE);
        if !path.exists() {
            return Ok(AppRole::Public);
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read role store {:?}: {}", path, e);
                return Ok(AppRole::Public);
            }
        };

        match serde_json::from_str::<RoleFile>(&raw) {
            Ok(file) => Ok(AppRole::parse(&file.role)),
            Err(e) => {
                warn!("Corrupt role store {:?}: {}", path, e);
                Ok(AppRole::Public)
            }
        }
    }

    fn set_role(&self, role: AppRole) -> Result<()> {
        let file = RoleFile {
            schema_version: SCHEMA_VERSION.to_string(),
            updated_at: Utc::now().to_rfc3339(),
            role: role.as_str().to_string(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        self.connection.write_atomic(ROLE_FILE, &contents)
    }

    fn clear_role(&self) -> Result<()> {
        let path = self.connection.file_path(ROLE_FILE);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Cleared role store {:?}", path);
        }
        Ok(())
    }
}
