use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::BackendClient;
use crate::error::AppError;
use crate::models::{
    Mentee, NewRoadmapStepRequest, NewTaskRequest, UpdateRoadmapStepRequest, UpdateTaskRequest,
};
use crate::services::roster::RosterStore;

/// Roadmap / task editing. Every mutation is followed by a full refetch of
/// the owning mentee record, which then replaces the aggregate in the
/// roster — no local patching, so local and remote cannot diverge past one
/// round trip.
pub struct MenteeService {
    backend: Arc<dyn BackendClient>,
    roster: Arc<RwLock<RosterStore>>,
}

impl MenteeService {
    pub fn new(backend: Arc<dyn BackendClient>, roster: Arc<RwLock<RosterStore>>) -> Self {
        Self { backend, roster }
    }

    pub async fn refresh_mentee(&self, mentee_id: &str) -> Result<Mentee, AppError> {
        let mentee = self.backend.fetch_mentee(mentee_id).await?;
        self.roster.write().await.replace_mentee(mentee.clone());
        Ok(mentee)
    }

    pub async fn add_step(
        &self,
        mentee_id: &str,
        req: NewRoadmapStepRequest,
    ) -> Result<Mentee, AppError> {
        self.backend.create_roadmap_step(mentee_id, &req).await?;
        self.refresh_mentee(mentee_id).await
    }

    pub async fn update_step(
        &self,
        mentee_id: &str,
        step_id: &str,
        req: UpdateRoadmapStepRequest,
    ) -> Result<Mentee, AppError> {
        self.backend.update_roadmap_step(step_id, &req).await?;
        self.refresh_mentee(mentee_id).await
    }

    pub async fn remove_step(&self, mentee_id: &str, step_id: &str) -> Result<Mentee, AppError> {
        self.backend.delete_roadmap_step(step_id).await?;
        self.refresh_mentee(mentee_id).await
    }

    pub async fn add_task(
        &self,
        mentee_id: &str,
        step_id: &str,
        req: NewTaskRequest,
    ) -> Result<Mentee, AppError> {
        self.backend.create_task(step_id, &req).await?;
        self.refresh_mentee(mentee_id).await
    }

    pub async fn update_task(
        &self,
        mentee_id: &str,
        task_id: &str,
        req: UpdateTaskRequest,
    ) -> Result<Mentee, AppError> {
        self.backend.update_task(task_id, &req).await?;
        self.refresh_mentee(mentee_id).await
    }

    pub async fn remove_task(&self, mentee_id: &str, task_id: &str) -> Result<Mentee, AppError> {
        self.backend.delete_task(task_id).await?;
        self.refresh_mentee(mentee_id).await
    }
}
