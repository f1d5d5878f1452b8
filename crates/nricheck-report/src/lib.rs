//! # nricheck-report — Assessment Report Service
//!
//! Turns one questionnaire submission into a delivered report: re-runs the
//! compliance engine server-side (a client-supplied score is never
//! trusted), renders a plain-text report document from the engine's own
//! output, and persists an [`AssessmentSnapshot`] for later retrieval.
//!
//! Persistence is best-effort by design: the report is the product, the
//! snapshot is a convenience. A store failure is logged and the report is
//! still delivered; the two steps are independent, not a transaction.

pub mod render;
pub mod service;
pub mod snapshot;

pub use render::render_report;
pub use service::{GeneratedReport, ReportService};
pub use snapshot::{AssessmentSnapshot, InMemorySnapshotStore, SnapshotStore, StoreError};
