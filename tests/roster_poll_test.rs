mod common;

use std::sync::Arc;

use tokio::sync::RwLock;

use common::{MockBackend, mentee};
use mentorlink_client::services::{RosterService, RosterStore, RosterUpdate};

#[tokio::test]
async fn identical_fingerprint_keeps_collection_identity() {
    let backend = Arc::new(MockBackend::default());
    *backend.mentees.lock().unwrap() = vec![mentee("m1", 30), mentee("m2", 55)];

    let store = Arc::new(RwLock::new(RosterStore::default()));
    let service = RosterService::new(backend.clone(), store.clone());

    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Replaced);
    let before = store.read().await.mentees().as_ptr();

    // Second poll returns the same id-progress pairs: no replacement, the
    // rendered list identity is unchanged.
    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Unchanged);
    let after = store.read().await.mentees().as_ptr();
    assert_eq!(before, after);
}

#[tokio::test]
async fn progress_change_triggers_replacement() {
    let backend = Arc::new(MockBackend::default());
    *backend.mentees.lock().unwrap() = vec![mentee("m1", 30)];

    let store = Arc::new(RwLock::new(RosterStore::default()));
    let service = RosterService::new(backend.clone(), store.clone());
    service.refresh().await.unwrap();

    backend.mentees.lock().unwrap()[0].progress = 45;
    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Replaced);

    let store = store.read().await;
    assert_eq!(store.mentees()[0].progress, 45);
    assert_eq!(store.fingerprint(), "m1-45");
}

#[tokio::test]
async fn fingerprint_ignores_fields_outside_id_and_progress() {
    // The accepted staleness window: a bio edit from another session is
    // invisible until something forces a refetch.
    let backend = Arc::new(MockBackend::default());
    *backend.mentees.lock().unwrap() = vec![mentee("m1", 30)];

    let store = Arc::new(RwLock::new(RosterStore::default()));
    let service = RosterService::new(backend.clone(), store.clone());
    service.refresh().await.unwrap();

    backend.mentees.lock().unwrap()[0].bio = Some("rewritten elsewhere".to_string());
    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Unchanged);
    assert_eq!(store.read().await.mentees()[0].bio, None);
}

#[tokio::test]
async fn added_and_removed_mentees_change_fingerprint() {
    let backend = Arc::new(MockBackend::default());
    *backend.mentees.lock().unwrap() = vec![mentee("m1", 30)];

    let store = Arc::new(RwLock::new(RosterStore::default()));
    let service = RosterService::new(backend.clone(), store.clone());
    service.refresh().await.unwrap();

    backend.mentees.lock().unwrap().push(mentee("m2", 0));
    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Replaced);
    assert_eq!(store.read().await.mentees().len(), 2);

    backend.mentees.lock().unwrap().remove(0);
    assert_eq!(service.refresh().await.unwrap(), RosterUpdate::Replaced);
    assert_eq!(store.read().await.mentees().len(), 1);
}

#[tokio::test]
async fn stale_roster_response_is_dropped() {
    let mut store = RosterStore::default();

    let old_seq = store.begin_fetch();
    let new_seq = store.begin_fetch();

    assert_eq!(
        store.apply(new_seq, vec![mentee("m1", 80)]),
        RosterUpdate::Replaced
    );
    assert_eq!(
        store.apply(old_seq, vec![mentee("m1", 10)]),
        RosterUpdate::Stale
    );
    assert_eq!(store.mentees()[0].progress, 80);
}
