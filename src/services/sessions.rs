use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::BackendClient;
use crate::error::AppError;
use crate::models::{BookSessionRequest, NewReviewRequest, Session, SessionStatus};

/// Local copy of the user's session bookings. Status transitions are never
/// made locally; a record only changes by being replaced with the server's
/// reply.
#[derive(Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    pub fn replace_all(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
    }

    pub fn upsert(&mut self, session: Session) {
        match self.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(slot) => *slot = session,
            None => self.sessions.push(session),
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}

pub struct SessionService {
    backend: Arc<dyn BackendClient>,
    store: Arc<RwLock<SessionStore>>,
}

impl SessionService {
    pub fn new(backend: Arc<dyn BackendClient>, store: Arc<RwLock<SessionStore>>) -> Self {
        Self { backend, store }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let sessions = self.backend.list_sessions().await?;
        self.store.write().await.replace_all(sessions);
        Ok(())
    }

    /// Booking surfaces its error to the caller (one of the few flows with
    /// a visible error banner in the UI).
    pub async fn book(&self, req: BookSessionRequest) -> Result<Session, AppError> {
        let session = self.backend.book_session(&req).await?;
        self.store.write().await.upsert(session.clone());
        Ok(session)
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Session, AppError> {
        let session = self.backend.update_session_status(id, status).await?;
        self.store.write().await.upsert(session.clone());
        Ok(session)
    }

    pub async fn submit_review(&self, req: NewReviewRequest) -> Result<(), AppError> {
        self.backend.submit_review(&req).await
    }
}
