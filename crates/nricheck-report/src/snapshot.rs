//! # Assessment Snapshots
//!
//! One snapshot per submission: the answers as received, the engine output
//! computed from them, and a creation timestamp. Snapshots are written once
//! and never mutated; "latest for a contact" is the only read pattern.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use nricheck_core::QuestionnaireAnswers;
use nricheck_engine::EngineOutput;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored assessment: answers plus the output computed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    /// Unique snapshot identifier.
    pub id: Uuid,
    /// Opaque contact identifier supplied by the caller.
    pub contact_id: String,
    /// The questionnaire exactly as submitted.
    pub answers: QuestionnaireAnswers,
    /// The engine output computed server-side from `answers`.
    pub output: EngineOutput,
    /// When the snapshot was written.
    pub created_at: DateTime<Utc>,
}

/// Snapshot store failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store rejected the operation.
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for assessment snapshots.
///
/// `Send + Sync` so one store can back every request handler; implementations
/// must not hold locks across await points (the trait is synchronous).
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot.
    fn save(&self, snapshot: AssessmentSnapshot) -> Result<(), StoreError>;

    /// The most recent snapshot for a contact, if any.
    fn find_by_contact(&self, contact_id: &str) -> Result<Option<AssessmentSnapshot>, StoreError>;
}

/// In-memory snapshot store keyed by contact id.
///
/// The RwLock is `parking_lot`, not `tokio::sync`: operations are synchronous
/// and the lock is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    data: Arc<RwLock<HashMap<String, Vec<AssessmentSnapshot>>>>,
}

impl InMemorySnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of snapshots across all contacts.
    pub fn len(&self) -> usize {
        self.data.read().values().map(Vec::len).sum()
    }

    /// Whether the store holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: AssessmentSnapshot) -> Result<(), StoreError> {
        self.data
            .write()
            .entry(snapshot.contact_id.clone())
            .or_default()
            .push(snapshot);
        Ok(())
    }

    fn find_by_contact(&self, contact_id: &str) -> Result<Option<AssessmentSnapshot>, StoreError> {
        Ok(self
            .data
            .read()
            .get(contact_id)
            .and_then(|snapshots| snapshots.iter().max_by_key(|s| s.created_at))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nricheck_engine::evaluate_as_of;

    fn snapshot_at(contact: &str, year: i32) -> AssessmentSnapshot {
        let answers = QuestionnaireAnswers::default();
        AssessmentSnapshot {
            id: Uuid::new_v4(),
            contact_id: contact.to_string(),
            output: evaluate_as_of(&answers, 2026),
            answers,
            created_at: Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_store_finds_nothing() {
        let store = InMemorySnapshotStore::new();
        assert!(store.is_empty());
        assert!(store.find_by_contact("nobody").unwrap().is_none());
    }

    #[test]
    fn save_and_find_roundtrip() {
        let store = InMemorySnapshotStore::new();
        let snapshot = snapshot_at("c-1", 2025);
        let id = snapshot.id;
        store.save(snapshot).unwrap();

        let found = store.find_by_contact("c-1").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(store.find_by_contact("c-2").unwrap().is_none());
    }

    #[test]
    fn find_returns_latest_of_several() {
        let store = InMemorySnapshotStore::new();
        let older = snapshot_at("c-1", 2024);
        let newer = snapshot_at("c-1", 2026);
        let newest_id = newer.id;
        store.save(newer).unwrap();
        store.save(older).unwrap();
        assert_eq!(store.len(), 2);

        let found = store.find_by_contact("c-1").unwrap().unwrap();
        assert_eq!(found.id, newest_id);
    }

    #[test]
    fn clone_shares_underlying_data() {
        let store = InMemorySnapshotStore::new();
        let clone = store.clone();
        clone.save(snapshot_at("c-9", 2026)).unwrap();
        assert_eq!(store.len(), 1);
    }
}
