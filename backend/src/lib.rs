//! # Stylist Studio Backend
//!
//! Settings core for the salon scheduling app. The domain services and
//! their file-backed stores live here; the presentation layer owns the
//! pickers and threads values through the pure model in `shared`.
//!
//! Everything is synchronous: there is no server, and every model
//! transition is a pure value-in/value-out function.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::JsonConnection;

/// Backend entry point wiring all services over one data directory.
pub struct Backend {
    pub onboarding_service: domain::OnboardingService,
    pub settings_service: domain::SettingsService,
    pub session_service: domain::SessionService,
}

impl Backend {
    /// Create a backend storing its data under the given directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);

        Ok(Backend {
            onboarding_service: domain::OnboardingService::new(connection.clone()),
            settings_service: domain::SettingsService::new(connection.clone()),
            session_service: domain::SessionService::new(connection),
        })
    }
}
