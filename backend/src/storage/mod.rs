//! Storage layer for the scheduling app.
//!
//! The domain layer only sees the traits in [`traits`]; the JSON
//! implementation mirrors the browser build's local-storage stores, one
//! file per store.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{BrandStorage, SessionStorage, SettingsStorage};
