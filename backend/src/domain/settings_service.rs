//! Business settings access and updates.

use anyhow::Result;
use shared::BusinessSettings;
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::{UpdateSettingsCommand, UpdateSettingsResult};
use crate::storage::json::{JsonConnection, SettingsRepository};
use crate::storage::traits::SettingsStorage;

/// Service for reading and updating the persisted business settings.
#[derive(Clone)]
pub struct SettingsService {
    settings_repository: SettingsRepository,
}

impl SettingsService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            settings_repository: SettingsRepository::new(connection),
        }
    }

    /// Current settings, or the defaults when nothing is stored yet.
    pub fn get_settings(&self) -> Result<BusinessSettings> {
        self.settings_repository.load_settings()
    }

    /// Apply a field-wise patch over the current settings and persist
    /// the result. `None` fields are left as they are.
    pub fn update_settings(&self, command: UpdateSettingsCommand) -> Result<UpdateSettingsResult> {
        let mut settings = self.settings_repository.load_settings()?;

        if let Some(business_name) = command.business_name {
            settings.business_name = business_name;
        }
        if let Some(timezone) = command.timezone {
            settings.timezone = timezone;
        }
        if let Some(hours) = command.hours {
            settings.hours = hours;
        }
        if let Some(rules) = command.rules {
            settings.rules = rules;
        }
        if let Some(hours_hint) = command.hours_hint {
            settings.hours_hint = Some(hours_hint);
        }
        if let Some(onboarding_complete) = command.onboarding_complete {
            settings.onboarding_complete = onboarding_complete;
        }

        self.settings_repository.save_settings(&settings)?;
        info!("Updated business settings for '{}'", settings.business_name);

        Ok(UpdateSettingsResult { settings })
    }

    /// Drop back to the default settings.
    pub fn reset_settings(&self) -> Result<BusinessSettings> {
        let settings = BusinessSettings::default();
        self.settings_repository.save_settings(&settings)?;
        info!("Reset business settings to defaults");
        Ok(settings)
    }
}
