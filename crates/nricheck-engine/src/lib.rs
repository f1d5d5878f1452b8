//! # nricheck-engine — Compliance Rules Engine
//!
//! A deterministic, pure function from one questionnaire answer set to a
//! scored compliance report: a 0–100 score, the list of triggered findings
//! (severity, penalty range, narrative, remediation), and aggregate
//! penalty-exposure totals.
//!
//! ## Architecture
//!
//! ```text
//! QuestionnaireAnswers ──► RuleContext ──► [RuleDef; 19] ──► Vec<Finding>
//!                                                │
//!                                                └──► score / penalty totals / sort
//! ```
//!
//! Each rule is a self-contained descriptor — applicability gate, optional
//! compliance-flag accessor, weight function, penalty range, and narrative
//! builder — iterated by one generic driver that knows nothing about any
//! individual rule's semantics. Policy magic numbers (weights, the 0.7
//! uncertainty damping, thresholds, state lists) live in [`policy`], never
//! inline in rule logic.
//!
//! ## Determinism
//!
//! The engine performs no I/O, holds no state, and takes the evaluation
//! year as an explicit input ([`evaluate_as_of`]). Identical input always
//! yields deep-equal output — the report service re-runs the engine
//! server-side precisely so a client cannot submit a forged score, and that
//! re-run must agree byte for byte.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; the engine never raises for
//!   any well-typed input, including a fully empty questionnaire.

pub mod evaluate;
pub mod output;
pub mod policy;
pub mod predicates;
pub mod rules;

// Re-export primary types for ergonomic imports.
pub use evaluate::{evaluate, evaluate_as_of};
pub use output::{
    Difficulty, EngineOutput, Finding, FindingStatus, RemediationEffort, RuleId, Severity,
};
pub use predicates::RuleContext;
