//! Command and result types for the domain services.

use shared::{BrandSettings, BusinessHours, BusinessSettings, SchedulingRules, ThemeMode};

/// Everything the onboarding flow collects before finishing.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteOnboardingCommand {
    pub business_name: String,
    /// IANA timezone id drawn from the US options list.
    pub timezone: String,
    pub hours: BusinessHours,
    pub mode: ThemeMode,
    pub primary_color: String,
}

/// Stored records produced by completing onboarding.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteOnboardingResult {
    pub settings: BusinessSettings,
    pub brand: BrandSettings,
}

/// Field-wise patch applied over the current settings. `None` fields are
/// left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSettingsCommand {
    pub business_name: Option<String>,
    pub timezone: Option<String>,
    pub hours: Option<BusinessHours>,
    pub rules: Option<SchedulingRules>,
    pub hours_hint: Option<String>,
    pub onboarding_complete: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSettingsResult {
    pub settings: BusinessSettings,
}
