//! # Report Service
//!
//! Orchestrates one submission end to end: evaluate, render, persist.

use std::sync::Arc;

use chrono::Utc;
use nricheck_core::QuestionnaireAnswers;
use nricheck_engine::{evaluate_as_of, EngineOutput};
use uuid::Uuid;

use crate::render::render_report;
use crate::snapshot::{AssessmentSnapshot, SnapshotStore};

/// Everything produced for one submission.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Identifier of the snapshot written for this submission.
    pub snapshot_id: Uuid,
    /// The engine output, computed server-side.
    pub output: EngineOutput,
    /// The rendered plain-text report document.
    pub document: String,
}

/// The report service: engine + renderer + snapshot store.
#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn SnapshotStore>,
}

impl ReportService {
    /// Build a service over the given snapshot store.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Evaluate a submission and deliver the report.
    ///
    /// The engine always runs server-side on the submitted answers — any
    /// score computed client-side is ignored, so a forged submission cannot
    /// inflate its own result. Snapshot persistence is best-effort: a store
    /// failure is logged and the report is still returned.
    pub fn generate(&self, contact_id: &str, answers: QuestionnaireAnswers) -> GeneratedReport {
        self.generate_as_of(contact_id, answers, current_year())
    }

    /// Like [`generate`](Self::generate) with an explicit evaluation year.
    pub fn generate_as_of(
        &self,
        contact_id: &str,
        answers: QuestionnaireAnswers,
        year: i32,
    ) -> GeneratedReport {
        let output = evaluate_as_of(&answers, year);
        let document = render_report(&output);

        let snapshot = AssessmentSnapshot {
            id: Uuid::new_v4(),
            contact_id: contact_id.to_string(),
            answers,
            output: output.clone(),
            created_at: Utc::now(),
        };
        let snapshot_id = snapshot.id;

        if let Err(err) = self.store.save(snapshot) {
            tracing::warn!(contact_id, %err, "failed to persist assessment snapshot");
        }

        tracing::info!(
            contact_id,
            %snapshot_id,
            score = output.score,
            findings = output.findings.len(),
            "assessment report generated"
        );

        GeneratedReport {
            snapshot_id,
            output,
            document,
        }
    }

    /// The latest stored snapshot for a contact.
    pub fn latest_for(&self, contact_id: &str) -> Option<AssessmentSnapshot> {
        match self.store.find_by_contact(contact_id) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(contact_id, %err, "snapshot lookup failed");
                None
            }
        }
    }
}

fn current_year() -> i32 {
    use chrono::Datelike;
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{InMemorySnapshotStore, StoreError};
    use nricheck_core::{AmountBand, AssetKind, TriState};
    use nricheck_engine::RuleId;

    const YEAR: i32 = 2026;

    fn answers_with_unfiled_fbar() -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::BankAccount);
        answers
            .asset_amounts
            .insert(AssetKind::BankAccount, AmountBand::From10kTo50k);
        answers.flags.filed_fbar = TriState::No;
        answers
    }

    #[test]
    fn generate_evaluates_renders_and_persists() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let service = ReportService::new(store.clone());

        let report = service.generate_as_of("c-1", answers_with_unfiled_fbar(), YEAR);
        assert!(report.output.has_finding(RuleId::FbarDisclosure));
        assert!(report.document.contains("[URGENT]"));

        let stored = service.latest_for("c-1").expect("snapshot persisted");
        assert_eq!(stored.id, report.snapshot_id);
        assert_eq!(stored.output, report.output);
    }

    #[test]
    fn stored_output_matches_a_fresh_evaluation() {
        // The server-side re-run guarantee: what is stored is exactly what
        // the engine computes from the stored answers.
        let service = ReportService::new(Arc::new(InMemorySnapshotStore::new()));
        let report = service.generate_as_of("c-2", answers_with_unfiled_fbar(), YEAR);

        let stored = service.latest_for("c-2").expect("snapshot persisted");
        assert_eq!(evaluate_as_of(&stored.answers, YEAR), report.output);
    }

    #[test]
    fn latest_for_unknown_contact_is_none() {
        let service = ReportService::new(Arc::new(InMemorySnapshotStore::new()));
        assert!(service.latest_for("nobody").is_none());
    }

    // ── best-effort persistence ──────────────────────────────────────────

    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn save(&self, _snapshot: AssessmentSnapshot) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn find_by_contact(
            &self,
            _contact_id: &str,
        ) -> Result<Option<AssessmentSnapshot>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    #[test]
    fn store_failure_does_not_block_report_delivery() {
        let service = ReportService::new(Arc::new(FailingStore));
        let report = service.generate_as_of("c-3", answers_with_unfiled_fbar(), YEAR);
        assert!(report.output.score < 100);
        assert!(!report.document.is_empty());
        assert!(service.latest_for("c-3").is_none());
    }
}
