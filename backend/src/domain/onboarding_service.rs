//! Owner onboarding: validate the collected setup and persist it.

use anyhow::Result;
use shared::{BrandSettings, BusinessSettings};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::commands::{CompleteOnboardingCommand, CompleteOnboardingResult};
use crate::domain::timezone;
use crate::storage::json::{BrandRepository, JsonConnection, SettingsRepository};
use crate::storage::traits::{BrandStorage, SettingsStorage};

/// Validation failures for the onboarding flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("Business name must not be blank")]
    BlankBusinessName,
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("Timezone is not in the supported US list: {0}")]
    UnsupportedTimezone(String),
    #[error("Business hours are invalid: enable at least one day and keep end after start")]
    InvalidHours,
}

/// Service driving the owner onboarding flow.
#[derive(Clone)]
pub struct OnboardingService {
    settings_repository: SettingsRepository,
    brand_repository: BrandRepository,
}

impl OnboardingService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            settings_repository: SettingsRepository::new(connection.clone()),
            brand_repository: BrandRepository::new(connection),
        }
    }

    /// Validate and persist the onboarding result.
    ///
    /// On success the settings record carries the structured hours, the
    /// derived hours hint, and `onboarding_complete = true`; the brand
    /// record carries the chosen name, mode and primary color.
    pub fn complete_onboarding(
        &self,
        command: CompleteOnboardingCommand,
    ) -> Result<CompleteOnboardingResult> {
        info!("Completing onboarding for '{}'", command.business_name);

        Self::validate(&command)?;

        let mut settings = self.settings_repository.load_settings()?;
        settings.business_name = command.business_name.trim().to_string();
        settings.timezone = command.timezone.clone();
        settings.hours_hint = Some(command.hours.summary());
        settings.hours = command.hours;
        settings.onboarding_complete = true;
        self.settings_repository.save_settings(&settings)?;

        let brand = BrandSettings {
            business_name: settings.business_name.clone(),
            mode: command.mode,
            primary_color: command.primary_color,
        };
        self.brand_repository.save_brand(&brand)?;

        info!(
            "Onboarding complete: {} ({})",
            settings.business_name,
            settings.hours_hint.as_deref().unwrap_or_default()
        );

        Ok(CompleteOnboardingResult { settings, brand })
    }

    /// Restore both stores to their defaults, as the onboarding reset
    /// button does.
    pub fn reset(&self) -> Result<()> {
        warn!("Resetting settings and brand to defaults");
        self.settings_repository
            .save_settings(&BusinessSettings::default())?;
        self.brand_repository.save_brand(&BrandSettings::default())?;
        Ok(())
    }

    fn validate(command: &CompleteOnboardingCommand) -> Result<(), OnboardingError> {
        if command.business_name.trim().is_empty() {
            return Err(OnboardingError::BlankBusinessName);
        }
        if !timezone::is_known_iana(&command.timezone) {
            return Err(OnboardingError::UnknownTimezone(command.timezone.clone()));
        }
        if !timezone::is_us_timezone(&command.timezone) {
            return Err(OnboardingError::UnsupportedTimezone(
                command.timezone.clone(),
            ));
        }
        if !command.hours.is_valid() {
            return Err(OnboardingError::InvalidHours);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BusinessHours, DayKey, ThemeMode};
    use tempfile::TempDir;

    fn setup_service() -> (OnboardingService, Arc<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(JsonConnection::new(temp_dir.path()).expect("Failed to create connection"));
        (OnboardingService::new(connection.clone()), connection, temp_dir)
    }

    fn valid_command() -> CompleteOnboardingCommand {
        CompleteOnboardingCommand {
            business_name: "  Fade Factory  ".to_string(),
            timezone: "America/New_York".to_string(),
            hours: BusinessHours::default(),
            mode: ThemeMode::Light,
            primary_color: "#1976d2".to_string(),
        }
    }

    #[test]
    fn test_complete_onboarding_persists_everything() {
        let (service, connection, _temp_dir) = setup_service();

        let result = service.complete_onboarding(valid_command()).unwrap();
        assert_eq!(result.settings.business_name, "Fade Factory");
        assert_eq!(result.settings.timezone, "America/New_York");
        assert_eq!(
            result.settings.hours_hint.as_deref(),
            Some("Mon–Fri 9:00 AM–5:00 PM")
        );
        assert!(result.settings.onboarding_complete);
        assert_eq!(result.brand.business_name, "Fade Factory");
        assert_eq!(result.brand.mode, ThemeMode::Light);

        // Both stores are readable through fresh repositories.
        let settings = SettingsRepository::new(connection.clone())
            .load_settings()
            .unwrap();
        assert_eq!(settings, result.settings);
        let brand = BrandRepository::new(connection).load_brand().unwrap();
        assert_eq!(brand, result.brand);
    }

    #[test]
    fn test_blank_name_rejected() {
        let (service, _conn, _temp_dir) = setup_service();
        let mut command = valid_command();
        command.business_name = "   ".to_string();

        let err = service.complete_onboarding(command).unwrap_err();
        assert_eq!(
            err.downcast::<OnboardingError>().unwrap(),
            OnboardingError::BlankBusinessName
        );
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let (service, _conn, _temp_dir) = setup_service();
        let mut command = valid_command();
        command.timezone = "America/Gotham".to_string();

        let err = service.complete_onboarding(command).unwrap_err();
        assert_eq!(
            err.downcast::<OnboardingError>().unwrap(),
            OnboardingError::UnknownTimezone("America/Gotham".to_string())
        );
    }

    #[test]
    fn test_non_us_timezone_rejected() {
        let (service, _conn, _temp_dir) = setup_service();
        let mut command = valid_command();
        command.timezone = "Europe/Madrid".to_string();

        let err = service.complete_onboarding(command).unwrap_err();
        assert_eq!(
            err.downcast::<OnboardingError>().unwrap(),
            OnboardingError::UnsupportedTimezone("Europe/Madrid".to_string())
        );
    }

    #[test]
    fn test_all_days_closed_rejected() {
        let (service, _conn, _temp_dir) = setup_service();
        let mut command = valid_command();
        for day in DayKey::ALL {
            command.hours = command.hours.with_day_enabled(day, false);
        }

        let err = service.complete_onboarding(command).unwrap_err();
        assert_eq!(
            err.downcast::<OnboardingError>().unwrap(),
            OnboardingError::InvalidHours
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (service, connection, _temp_dir) = setup_service();
        service.complete_onboarding(valid_command()).unwrap();

        service.reset().unwrap();

        let settings = SettingsRepository::new(connection.clone())
            .load_settings()
            .unwrap();
        assert_eq!(settings, BusinessSettings::default());
        let brand = BrandRepository::new(connection).load_brand().unwrap();
        assert_eq!(brand, BrandSettings::default());
    }
}
