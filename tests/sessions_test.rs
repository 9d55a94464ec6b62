mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::sync::RwLock;

use common::MockBackend;
use mentorlink_client::models::{BookSessionRequest, SessionStatus};
use mentorlink_client::services::{SessionService, SessionStore};

fn book_request() -> BookSessionRequest {
    BookSessionRequest {
        mentor_id: "mentor-1".to_string(),
        topic: "Portfolio review".to_string(),
        scheduled_at: "2025-07-10T15:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn booked_session_starts_pending() {
    let backend = Arc::new(MockBackend::default());
    let store = Arc::new(RwLock::new(SessionStore::default()));
    let service = SessionService::new(backend.clone(), store.clone());

    let session = service.book(book_request()).await.expect("booking failed");
    assert_eq!(session.status, SessionStatus::Pending);

    let store = store.read().await;
    assert_eq!(store.sessions().len(), 1);
    assert_eq!(store.sessions()[0].id, session.id);
}

#[tokio::test]
async fn status_update_reflects_server_reply() {
    let backend = Arc::new(MockBackend::default());
    let store = Arc::new(RwLock::new(SessionStore::default()));
    let service = SessionService::new(backend.clone(), store.clone());

    let session = service.book(book_request()).await.unwrap();
    let accepted = service
        .update_status(&session.id, SessionStatus::Accepted)
        .await
        .expect("status update failed");

    assert_eq!(accepted.status, SessionStatus::Accepted);
    assert_eq!(store.read().await.sessions()[0].status, SessionStatus::Accepted);
}

#[tokio::test]
async fn booking_failure_is_surfaced() {
    let backend = Arc::new(MockBackend::default());
    backend.fail_mutations.store(true, Ordering::SeqCst);

    let store = Arc::new(RwLock::new(SessionStore::default()));
    let service = SessionService::new(backend.clone(), store.clone());

    assert!(service.book(book_request()).await.is_err());
    assert!(store.read().await.sessions().is_empty());
}

#[tokio::test]
async fn review_submission_reports_failures() {
    let backend = Arc::new(MockBackend::default());
    let store = Arc::new(RwLock::new(SessionStore::default()));
    let service = SessionService::new(backend.clone(), store.clone());

    let review = mentorlink_client::models::NewReviewRequest {
        session_id: "s1".to_string(),
        rating: 5,
        comment: "Direct, useful feedback".to_string(),
    };
    assert!(service.submit_review(review.clone()).await.is_ok());

    backend.fail_mutations.store(true, Ordering::SeqCst);
    assert!(service.submit_review(review).await.is_err());
}

#[tokio::test]
async fn refresh_replaces_local_sessions() {
    let backend = Arc::new(MockBackend::default());
    let store = Arc::new(RwLock::new(SessionStore::default()));
    let service = SessionService::new(backend.clone(), store.clone());

    service.book(book_request()).await.unwrap();

    // Another client cancelled it server-side.
    backend.sessions.lock().unwrap()[0].status = SessionStatus::Cancelled;
    service.refresh().await.unwrap();

    assert_eq!(store.read().await.sessions()[0].status, SessionStatus::Cancelled);
}
