//! # Storage Traits
//!
//! Abstractions over the persisted settings stores so the domain layer
//! never references a storage mechanism directly. All operations are
//! synchronous; there is no server and no shared mutable state beyond
//! the files themselves.

use anyhow::Result;
use shared::{AppRole, BrandSettings, BusinessSettings};

/// Interface for the business settings store.
///
/// `load_settings` always returns a structurally complete value: a
/// missing or unreadable store yields the documented default rather
/// than an error. Saving is fire-and-forget from the domain's
/// perspective; callers re-save after every transition they want to
/// survive a restart.
pub trait SettingsStorage: Send + Sync {
    /// Load the current settings, or the default when none exist.
    fn load_settings(&self) -> Result<BusinessSettings>;

    /// Persist the given settings.
    fn save_settings(&self, settings: &BusinessSettings) -> Result<()>;
}

/// Interface for the brand/theme preference store.
pub trait BrandStorage: Send + Sync {
    /// Load the current brand preferences, or the default when none exist.
    fn load_brand(&self) -> Result<BrandSettings>;

    /// Persist the given brand preferences.
    fn save_brand(&self, brand: &BrandSettings) -> Result<()>;
}

/// Interface for the session role store.
pub trait SessionStorage: Send + Sync {
    /// Current role; `Public` when nothing is stored or the store holds junk.
    fn get_role(&self) -> Result<AppRole>;

    /// Persist the given role.
    fn set_role(&self, role: AppRole) -> Result<()>;

    /// Remove any stored role, dropping the session back to `Public`.
    fn clear_role(&self) -> Result<()>;
}
