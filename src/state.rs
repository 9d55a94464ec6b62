use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::ai::AiClient;
use crate::api::BackendClient;
use crate::auth::SessionState;
use crate::services::{NotificationStore, RosterStore, SessionStore};
use crate::store::Theme;

/// Application context. One instance per app run, cloned into services and
/// pollers; all mutable state sits behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub backend: Arc<dyn BackendClient>,
    pub ai: Arc<dyn AiClient>,
    pub session: Arc<RwLock<SessionState>>,
    pub notifications: Arc<RwLock<NotificationStore>>,
    pub roster: Arc<RwLock<RosterStore>>,
    pub sessions: Arc<RwLock<SessionStore>>,
    pub theme: Arc<RwLock<Theme>>,
}

impl AppState {
    pub fn new(db: SqlitePool, backend: Arc<dyn BackendClient>, ai: Arc<dyn AiClient>) -> Self {
        Self {
            db,
            backend,
            ai,
            session: Arc::new(RwLock::new(SessionState::SignedOut)),
            notifications: Arc::new(RwLock::new(NotificationStore::default())),
            roster: Arc::new(RwLock::new(RosterStore::default())),
            sessions: Arc::new(RwLock::new(SessionStore::default())),
            theme: Arc::new(RwLock::new(Theme::default())),
        }
    }
}
