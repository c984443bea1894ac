//! Domain services for the scheduling app.

pub mod commands;
pub mod onboarding_service;
pub mod session_service;
pub mod settings_service;
pub mod timezone;

pub use onboarding_service::{OnboardingError, OnboardingService};
pub use session_service::SessionService;
pub use settings_service::SettingsService;
