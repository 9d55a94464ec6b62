use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::BackendClient;
use crate::error::AppError;
use crate::models::Mentee;

/// Outcome of a roster poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterUpdate {
    /// Fingerprint changed, local collection replaced.
    Replaced,
    /// Same fingerprint, local collection (and its identity) untouched.
    Unchanged,
    /// Response was older than already-applied state, dropped.
    Stale,
}

/// Mentor-side mentee roster. Polled on a fixed interval; the collection is
/// only replaced when a cheap per-record fingerprint (`id-progress`) differs
/// from the previous snapshot, so unchanged polls cause no churn.
///
/// The fingerprint deliberately ignores every other field: an edit to e.g. a
/// bio from another session stays invisible until a mutation forces a full
/// refetch. That staleness window is accepted.
#[derive(Default)]
pub struct RosterStore {
    mentees: Vec<Mentee>,
    fingerprint: String,
    fetch_seq: u64,
    applied_seq: u64,
}

fn fingerprint_of(mentees: &[Mentee]) -> String {
    mentees
        .iter()
        .map(|m| format!("{}-{}", m.id, m.progress))
        .collect::<Vec<_>>()
        .join(",")
}

impl RosterStore {
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    pub fn apply(&mut self, seq: u64, mentees: Vec<Mentee>) -> RosterUpdate {
        if seq <= self.applied_seq {
            return RosterUpdate::Stale;
        }
        self.applied_seq = seq;

        let fingerprint = fingerprint_of(&mentees);
        if fingerprint == self.fingerprint {
            return RosterUpdate::Unchanged;
        }

        self.fingerprint = fingerprint;
        self.mentees = mentees;
        RosterUpdate::Replaced
    }

    /// Swap in a single refetched mentee after a mutation. Always applies;
    /// mutations outrank any in-flight poll.
    pub fn replace_mentee(&mut self, mentee: Mentee) {
        self.fetch_seq += 1;
        self.applied_seq = self.fetch_seq;

        match self.mentees.iter_mut().find(|m| m.id == mentee.id) {
            Some(slot) => *slot = mentee,
            None => self.mentees.push(mentee),
        }
        self.fingerprint = fingerprint_of(&self.mentees);
    }

    pub fn mentees(&self) -> &[Mentee] {
        &self.mentees
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

pub struct RosterService {
    backend: Arc<dyn BackendClient>,
    store: Arc<RwLock<RosterStore>>,
}

impl RosterService {
    pub fn new(backend: Arc<dyn BackendClient>, store: Arc<RwLock<RosterStore>>) -> Self {
        Self { backend, store }
    }

    pub async fn refresh(&self) -> Result<RosterUpdate, AppError> {
        let seq = self.store.write().await.begin_fetch();
        let mentees = self.backend.list_mentees().await?;

        let update = self.store.write().await.apply(seq, mentees);
        debug!("Roster poll: {:?}", update);
        Ok(update)
    }
}
