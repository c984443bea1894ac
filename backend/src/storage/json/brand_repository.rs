//! # Brand Settings Repository
//!
//! Stores [`BrandSettings`] in `brand_settings_v1.json` (local-storage
//! key `brand_settings_v1` in the browser build). Same forgiving load
//! behavior as the settings store: missing or corrupt files yield the
//! default brand.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::BrandSettings;
use std::fs;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{JsonConnection, SCHEMA_VERSION};
use crate::storage::traits::BrandStorage;

const BRAND_FILE: &str = "brand_settings_v1.json";

#[derive(Debug, Serialize, Deserialize)]
struct BrandFile {
    schema_version: String,
    updated_at: String,
    #[serde(flatten)]
    brand: BrandSettings,
}

/// JSON-file-backed implementation of [`BrandStorage`].
#[derive(Clone)]
pub struct BrandRepository {
    connection: Arc<JsonConnection>,
}

impl BrandRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl BrandStorage for BrandRepository {
    fn load_brand(&self) -> Result<BrandSettings> {
        let path = self.connection.file_path(BRAND_FILE);
        if !path.exists() {
            debug!("No brand store at {:?}, using defaults", path);
            return Ok(BrandSettings::default());
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read brand store {:?}: {}", path, e);
                return Ok(BrandSettings::default());
            }
        };

        match serde_json::from_str::<BrandFile>(&raw) {
            Ok(file) => Ok(file.brand),
            Err(e) => {
                warn!("Corrupt brand store {:?}: {}", path, e);
                Ok(BrandSettings::default())
            }
        }
    }

    fn save_brand(&self, brand: &BrandSettings) -> Result<()> {
        let file = BrandFile {
            schema_version: SCHEMA_VERSION.to_string(),
            updated_at: Utc::now().to_rfc3339(),
            brand: brand.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        self.connection.write_atomic(BRAND_FILE, &contents)
    }
}
