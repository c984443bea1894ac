//! Session role tracking (public visitor, client, or owner).

use anyhow::Result;
use shared::AppRole;
use std::sync::Arc;
use tracing::info;

use crate::storage::json::{JsonConnection, SessionRepository};
use crate::storage::traits::SessionStorage;

/// Service for the signed-in role of the current session.
#[derive(Clone)]
pub struct SessionService {
    session_repository: SessionRepository,
}

impl SessionService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            session_repository: SessionRepository::new(connection),
        }
    }

    /// Current role; `Public` when nothing is stored.
    pub fn role(&self) -> Result<AppRole> {
        self.session_repository.get_role()
    }

    pub fn set_role(&self, role: AppRole) -> Result<()> {
        info!("Setting session role to {}", role);
        self.session_repository.set_role(role)
    }

    /// Sign out: drop back to `Public`.
    pub fn clear_role(&self) -> Result<()> {
        info!("Clearing session role");
        self.session_repository.clear_role()
    }
}
