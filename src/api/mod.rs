pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{
    AuthTokens, BookSessionRequest, Mentee, Mentor, NewReviewRequest, NewRoadmapStepRequest,
    NewTaskRequest, Notification, RoadmapStep, Session, SessionStatus, Task,
    UpdateRoadmapStepRequest, UpdateTaskRequest, User,
};

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Client for the MentorLink REST backend. Every resource here is owned by
/// the backend; this side only mirrors it.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn login(&self, req: &dto::LoginRequest) -> Result<AuthTokens, AppError>;
    async fn signup(&self, req: &dto::SignupRequest) -> Result<AuthTokens, AppError>;
    async fn current_user(&self) -> Result<User, AppError>;

    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError>;
    async fn unread_count(&self) -> Result<usize, AppError>;
    async fn mark_notification_read(&self, id: i64) -> Result<(), AppError>;
    async fn mark_all_notifications_read(&self) -> Result<(), AppError>;
    async fn delete_notification(&self, id: i64) -> Result<(), AppError>;
    async fn clear_notifications(&self) -> Result<(), AppError>;

    async fn list_mentees(&self) -> Result<Vec<Mentee>, AppError>;
    async fn fetch_mentee(&self, id: &str) -> Result<Mentee, AppError>;
    async fn create_roadmap_step(
        &self,
        mentee_id: &str,
        req: &NewRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError>;
    async fn update_roadmap_step(
        &self,
        step_id: &str,
        req: &UpdateRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError>;
    async fn delete_roadmap_step(&self, step_id: &str) -> Result<(), AppError>;
    async fn create_task(&self, step_id: &str, req: &NewTaskRequest) -> Result<Task, AppError>;
    async fn update_task(&self, task_id: &str, req: &UpdateTaskRequest) -> Result<Task, AppError>;
    async fn delete_task(&self, task_id: &str) -> Result<(), AppError>;

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError>;
    async fn book_session(&self, req: &BookSessionRequest) -> Result<Session, AppError>;
    async fn update_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Session, AppError>;

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError>;
    async fn submit_review(&self, req: &NewReviewRequest) -> Result<(), AppError>;
}

pub struct HttpBackendClient {
    client: Client,
    config: BackendConfig,
    db: SqlitePool,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig, db: SqlitePool) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config, db })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// The access token lives in the settings store and is re-read before
    /// every authenticated call, so a re-login is picked up without
    /// rebuilding the client.
    async fn bearer(&self) -> Result<String, AppError> {
        crate::store::settings::access_token(&self.db)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    async fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let token = self.bearer().await?;
        Ok(self
            .client
            .request(method, self.url(path))
            .header("Authorization", format!("Bearer {}", token)))
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, AppError> {
        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status, body));
        }

        Ok(response.json::<T>().await?)
    }

    async fn send_no_content(&self, req: RequestBuilder) -> Result<(), AppError> {
        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status, body));
        }

        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let req = self.authed(Method::GET, path).await?;
        self.send_json(req).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let req = self.authed(Method::POST, path).await?.json(body);
        self.send_json(req).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let req = self.authed(Method::PATCH, path).await?.json(body);
        self.send_json(req).await
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn login(&self, req: &dto::LoginRequest) -> Result<AuthTokens, AppError> {
        let request = self.client.post(self.url("/auth/login")).json(req);
        self.send_json(request).await
    }

    async fn signup(&self, req: &dto::SignupRequest) -> Result<AuthTokens, AppError> {
        let request = self.client.post(self.url("/auth/signup")).json(req);
        self.send_json(request).await
    }

    async fn current_user(&self) -> Result<User, AppError> {
        self.get_json("/auth/me").await
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.get_json("/notifications").await
    }

    async fn unread_count(&self) -> Result<usize, AppError> {
        let counted: dto::UnreadCountResponse = self.get_json("/notifications/unread-count").await?;
        Ok(counted.count)
    }

    async fn mark_notification_read(&self, id: i64) -> Result<(), AppError> {
        let req = self
            .authed(Method::PATCH, &format!("/notifications/{}/read", id))
            .await?;
        self.send_no_content(req).await
    }

    async fn mark_all_notifications_read(&self) -> Result<(), AppError> {
        let req = self.authed(Method::PATCH, "/notifications/read-all").await?;
        self.send_no_content(req).await
    }

    async fn delete_notification(&self, id: i64) -> Result<(), AppError> {
        let req = self
            .authed(Method::DELETE, &format!("/notifications/{}", id))
            .await?;
        self.send_no_content(req).await
    }

    async fn clear_notifications(&self) -> Result<(), AppError> {
        let req = self.authed(Method::DELETE, "/notifications").await?;
        self.send_no_content(req).await
    }

    async fn list_mentees(&self) -> Result<Vec<Mentee>, AppError> {
        self.get_json("/mentees").await
    }

    async fn fetch_mentee(&self, id: &str) -> Result<Mentee, AppError> {
        self.get_json(&format!("/mentees/{}", id)).await
    }

    async fn create_roadmap_step(
        &self,
        mentee_id: &str,
        req: &NewRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        self.post_json(&format!("/mentees/{}/roadmap", mentee_id), req)
            .await
    }

    async fn update_roadmap_step(
        &self,
        step_id: &str,
        req: &UpdateRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        self.patch_json(&format!("/roadmap/{}", step_id), req).await
    }

    async fn delete_roadmap_step(&self, step_id: &str) -> Result<(), AppError> {
        let req = self
            .authed(Method::DELETE, &format!("/roadmap/{}", step_id))
            .await?;
        self.send_no_content(req).await
    }

    async fn create_task(&self, step_id: &str, req: &NewTaskRequest) -> Result<Task, AppError> {
        self.post_json(&format!("/roadmap/{}/tasks", step_id), req)
            .await
    }

    async fn update_task(&self, task_id: &str, req: &UpdateTaskRequest) -> Result<Task, AppError> {
        self.patch_json(&format!("/tasks/{}", task_id), req).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), AppError> {
        let req = self
            .authed(Method::DELETE, &format!("/tasks/{}", task_id))
            .await?;
        self.send_no_content(req).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        self.get_json("/sessions").await
    }

    async fn book_session(&self, req: &BookSessionRequest) -> Result<Session, AppError> {
        self.post_json("/sessions", req).await
    }

    async fn update_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Session, AppError> {
        let body = dto::UpdateSessionStatusRequest { status };
        self.patch_json(&format!("/sessions/{}/status", id), &body)
            .await
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        self.get_json("/mentors").await
    }

    async fn submit_review(&self, req: &NewReviewRequest) -> Result<(), AppError> {
        let request = self.authed(Method::POST, "/reviews").await?.json(req);
        self.send_no_content(request).await
    }
}

/// Inert client for offline wiring and tests.
pub struct NoopBackendClient;

#[async_trait]
impl BackendClient for NoopBackendClient {
    async fn login(&self, _req: &dto::LoginRequest) -> Result<AuthTokens, AppError> {
        Err(AppError::Unauthorized)
    }

    async fn signup(&self, _req: &dto::SignupRequest) -> Result<AuthTokens, AppError> {
        Err(AppError::Unauthorized)
    }

    async fn current_user(&self) -> Result<User, AppError> {
        Err(AppError::Unauthorized)
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        Ok(Vec::new())
    }

    async fn unread_count(&self) -> Result<usize, AppError> {
        Ok(0)
    }

    async fn mark_notification_read(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }

    async fn mark_all_notifications_read(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn delete_notification(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }

    async fn clear_notifications(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_mentees(&self) -> Result<Vec<Mentee>, AppError> {
        Ok(Vec::new())
    }

    async fn fetch_mentee(&self, _id: &str) -> Result<Mentee, AppError> {
        Err(AppError::NotFound)
    }

    async fn create_roadmap_step(
        &self,
        _mentee_id: &str,
        _req: &NewRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        Err(AppError::NotFound)
    }

    async fn update_roadmap_step(
        &self,
        _step_id: &str,
        _req: &UpdateRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        Err(AppError::NotFound)
    }

    async fn delete_roadmap_step(&self, _step_id: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_task(&self, _step_id: &str, _req: &NewTaskRequest) -> Result<Task, AppError> {
        Err(AppError::NotFound)
    }

    async fn update_task(&self, _task_id: &str, _req: &UpdateTaskRequest) -> Result<Task, AppError> {
        Err(AppError::NotFound)
    }

    async fn delete_task(&self, _task_id: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        Ok(Vec::new())
    }

    async fn book_session(&self, _req: &BookSessionRequest) -> Result<Session, AppError> {
        Err(AppError::NotFound)
    }

    async fn update_session_status(
        &self,
        _id: &str,
        _status: SessionStatus,
    ) -> Result<Session, AppError> {
        Err(AppError::NotFound)
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        Ok(Vec::new())
    }

    async fn submit_review(&self, _req: &NewReviewRequest) -> Result<(), AppError> {
        Ok(())
    }
}
