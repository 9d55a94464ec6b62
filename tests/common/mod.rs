use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use mentorlink_client::api::dto::{LoginRequest, SignupRequest};
use mentorlink_client::api::BackendClient;
use mentorlink_client::error::AppError;
use mentorlink_client::models::*;

/// In-memory stand-in for the REST backend. Holds server-side copies of the
/// collections so tests can drive both ends of the reconciliation.
#[derive(Default)]
pub struct MockBackend {
    pub notifications: Mutex<Vec<Notification>>,
    pub mentees: Mutex<Vec<Mentee>>,
    pub sessions: Mutex<Vec<Session>>,
    /// When set, every mutating call fails with a 500.
    pub fail_mutations: AtomicBool,
    pub list_calls: AtomicUsize,
}

pub fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        title: format!("Notification {}", id),
        message: "test".to_string(),
        created_at: "2025-06-01T10:00:00Z".to_string(),
        read,
        kind: NotificationKind::System,
    }
}

pub fn mentee(id: &str, progress: i32) -> Mentee {
    Mentee {
        id: id.to_string(),
        name: format!("Mentee {}", id),
        email: format!("{}@example.com", id),
        focus_area: "backend".to_string(),
        progress,
        bio: None,
        skills: vec!["rust".to_string()],
        roadmap: Vec::new(),
    }
}

impl MockBackend {
    fn check_mutations(&self) -> Result<(), AppError> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 500,
                message: "mutation disabled".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    async fn login(&self, req: &LoginRequest) -> Result<AuthTokens, AppError> {
        if req.password.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(AuthTokens {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
        })
    }

    async fn signup(&self, _req: &SignupRequest) -> Result<AuthTokens, AppError> {
        Ok(AuthTokens {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
        })
    }

    async fn current_user(&self) -> Result<User, AppError> {
        Ok(User {
            id: "user-1".to_string(),
            name: "Test Mentor".to_string(),
            email: "mentor@example.com".to_string(),
            role: Role::Mentor,
        })
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn unread_count(&self) -> Result<usize, AppError> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    async fn mark_notification_read(&self, id: i64) -> Result<(), AppError> {
        self.check_mutations()?;
        let mut items = self.notifications.lock().unwrap();
        match items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = true;
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn mark_all_notifications_read(&self) -> Result<(), AppError> {
        self.check_mutations()?;
        for item in self.notifications.lock().unwrap().iter_mut() {
            item.read = true;
        }
        Ok(())
    }

    async fn delete_notification(&self, id: i64) -> Result<(), AppError> {
        self.check_mutations()?;
        self.notifications.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn clear_notifications(&self) -> Result<(), AppError> {
        self.check_mutations()?;
        self.notifications.lock().unwrap().clear();
        Ok(())
    }

    async fn list_mentees(&self) -> Result<Vec<Mentee>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.mentees.lock().unwrap().clone())
    }

    async fn fetch_mentee(&self, id: &str) -> Result<Mentee, AppError> {
        self.mentees
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create_roadmap_step(
        &self,
        mentee_id: &str,
        req: &NewRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        self.check_mutations()?;
        let step = RoadmapStep {
            id: Uuid::new_v4().to_string(),
            title: req.title.clone(),
            description: req.description.clone(),
            completed: false,
            tasks: Vec::new(),
        };
        let mut mentees = self.mentees.lock().unwrap();
        let mentee = mentees
            .iter_mut()
            .find(|m| m.id == mentee_id)
            .ok_or(AppError::NotFound)?;
        mentee.roadmap.push(step.clone());
        Ok(step)
    }

    async fn update_roadmap_step(
        &self,
        step_id: &str,
        req: &UpdateRoadmapStepRequest,
    ) -> Result<RoadmapStep, AppError> {
        self.check_mutations()?;
        let mut mentees = self.mentees.lock().unwrap();
        for mentee in mentees.iter_mut() {
            if let Some(step) = mentee.roadmap.iter_mut().find(|s| s.id == step_id) {
                if let Some(title) = &req.title {
                    step.title = title.clone();
                }
                if let Some(description) = &req.description {
                    step.description = Some(description.clone());
                }
                if let Some(completed) = req.completed {
                    step.completed = completed;
                }
                return Ok(step.clone());
            }
        }
        Err(AppError::NotFound)
    }

    async fn delete_roadmap_step(&self, step_id: &str) -> Result<(), AppError> {
        self.check_mutations()?;
        let mut mentees = self.mentees.lock().unwrap();
        for mentee in mentees.iter_mut() {
            mentee.roadmap.retain(|s| s.id != step_id);
        }
        Ok(())
    }

    async fn create_task(&self, step_id: &str, req: &NewTaskRequest) -> Result<Task, AppError> {
        self.check_mutations()?;
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: req.title.clone(),
            completed: false,
            due_date: req.due_date.clone(),
        };
        let mut mentees = self.mentees.lock().unwrap();
        for mentee in mentees.iter_mut() {
            if let Some(step) = mentee.roadmap.iter_mut().find(|s| s.id == step_id) {
                step.tasks.push(task.clone());
                return Ok(task);
            }
        }
        Err(AppError::NotFound)
    }

    async fn update_task(&self, task_id: &str, req: &UpdateTaskRequest) -> Result<Task, AppError> {
        self.check_mutations()?;
        let mut mentees = self.mentees.lock().unwrap();
        for mentee in mentees.iter_mut() {
            for step in mentee.roadmap.iter_mut() {
                if let Some(task) = step.tasks.iter_mut().find(|t| t.id == task_id) {
                    if let Some(title) = &req.title {
                        task.title = title.clone();
                    }
                    if let Some(due) = &req.due_date {
                        task.due_date = Some(due.clone());
                    }
                    if let Some(completed) = req.completed {
                        task.completed = completed;
                    }
                    return Ok(task.clone());
                }
            }
        }
        Err(AppError::NotFound)
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), AppError> {
        self.check_mutations()?;
        let mut mentees = self.mentees.lock().unwrap();
        for mentee in mentees.iter_mut() {
            for step in mentee.roadmap.iter_mut() {
                step.tasks.retain(|t| t.id != task_id);
            }
        }
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn book_session(&self, req: &BookSessionRequest) -> Result<Session, AppError> {
        self.check_mutations()?;
        let session = Session {
            id: Uuid::new_v4().to_string(),
            mentor_id: req.mentor_id.clone(),
            mentee_id: "user-1".to_string(),
            topic: req.topic.clone(),
            scheduled_at: req.scheduled_at.clone(),
            status: SessionStatus::Pending,
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn update_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Session, AppError> {
        self.check_mutations()?;
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;
        session.status = status;
        Ok(session.clone())
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        Ok(Vec::new())
    }

    async fn submit_review(&self, _req: &NewReviewRequest) -> Result<(), AppError> {
        self.check_mutations()?;
        Ok(())
    }
}
