//! # JSON Storage Module
//!
//! File-based storage for the app's persisted stores. The browser build
//! kept these records in local storage under versioned keys; here each
//! key becomes one JSON file in the data directory:
//!
//! ```text
//! data/
//! ├── business_settings_v1.json
//! ├── brand_settings_v1.json
//! └── app_role_v1.json
//! ```
//!
//! ## Features
//!
//! - One file per store, written atomically (temp file + rename)
//! - Missing or unreadable files load as the documented defaults
//! - Each file carries a schema version and updated-at stamp for
//!   future migrations

pub mod brand_repository;
pub mod connection;
pub mod session_repository;
pub mod settings_repository;

pub use brand_repository::BrandRepository;
pub use connection::JsonConnection;
pub use session_repository::SessionRepository;
pub use settings_repository::SettingsRepository;

/// Current on-disk schema version for all stores.
pub(crate) const SCHEMA_VERSION: &str = "1.0";
