use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::BackendClient;
use crate::error::AppError;
use crate::models::Notification;

/// Local copy of the server-owned notification list plus the unread badge
/// count. Replaced wholesale on refresh, mutated in place after a successful
/// backend call.
///
/// Every write carries a monotonic sequence number: a refresh that started
/// before the currently-applied write is discarded instead of clobbering
/// newer state (last-writer-by-sequence, not last-arrival).
#[derive(Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
    unread: usize,
    fetch_seq: u64,
    applied_seq: u64,
}

impl NotificationStore {
    /// Take a sequence ticket before going to the network.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    fn begin_write(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.applied_seq = self.fetch_seq;
        self.applied_seq
    }

    /// Apply a fetched snapshot. Returns false when the snapshot is older
    /// than the state already applied.
    pub fn replace(&mut self, seq: u64, items: Vec<Notification>, unread: usize) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.items = items;
        self.unread = unread;
        self.applied_seq = seq;
        true
    }

    pub fn mark_read(&mut self, id: i64) {
        self.begin_write();
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            if !item.read {
                item.read = true;
                self.unread = self.unread.saturating_sub(1);
            }
        }
    }

    pub fn mark_all_read(&mut self) {
        self.begin_write();
        for item in &mut self.items {
            item.read = true;
        }
        self.unread = 0;
    }

    pub fn remove(&mut self, id: i64) {
        self.begin_write();
        let unread_removed = self
            .items
            .iter()
            .any(|n| n.id == id && !n.read);
        self.items.retain(|n| n.id != id);
        if unread_removed {
            self.unread = self.unread.saturating_sub(1);
        }
    }

    pub fn clear(&mut self) {
        self.begin_write();
        self.items.clear();
        self.unread = 0;
    }

    /// Local optimistic insert (e.g. a client-generated confirmation).
    pub fn push_local(&mut self, notification: Notification) {
        self.begin_write();
        if !notification.read {
            self.unread += 1;
        }
        self.items.insert(0, notification);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread(&self) -> usize {
        self.unread
    }
}

pub struct NotificationService {
    backend: Arc<dyn BackendClient>,
    store: Arc<RwLock<NotificationStore>>,
}

impl NotificationService {
    pub fn new(backend: Arc<dyn BackendClient>, store: Arc<RwLock<NotificationStore>>) -> Self {
        Self { backend, store }
    }

    /// Fetch the full list and the unread count, then replace local state
    /// entirely. Returns whether the snapshot was applied or discarded as
    /// stale.
    pub async fn refresh(&self) -> Result<bool, AppError> {
        let seq = self.store.write().await.begin_fetch();

        let items = self.backend.list_notifications().await?;
        let unread = self.backend.unread_count().await?;

        let applied = self.store.write().await.replace(seq, items, unread);
        if !applied {
            debug!("Discarded stale notification snapshot (seq {})", seq);
        }
        Ok(applied)
    }

    /// Backend call first, matching local mutation after. On failure the
    /// local state is left untouched and the error is returned to the
    /// caller.
    pub async fn mark_as_read(&self, id: i64) -> Result<(), AppError> {
        self.backend.mark_notification_read(id).await?;
        self.store.write().await.mark_read(id);
        Ok(())
    }

    pub async fn mark_all_as_read(&self) -> Result<(), AppError> {
        self.backend.mark_all_notifications_read().await?;
        self.store.write().await.mark_all_read();
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.backend.delete_notification(id).await?;
        self.store.write().await.remove(id);
        Ok(())
    }

    pub async fn clear_all(&self) -> Result<(), AppError> {
        self.backend.clear_notifications().await?;
        self.store.write().await.clear();
        Ok(())
    }
}
