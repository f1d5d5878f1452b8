//! # Scoring / Aggregation / Sorting Driver
//!
//! Runs every rule descriptor against one answer set, applies the
//! compliance-flag gate and uncertainty damping, sums weights and penalty
//! totals, and sorts the findings. The driver has no knowledge of any
//! individual rule's semantics — it is a generic reduce over the registry.
//!
//! Stateless and single-pass: there is no engine state between evaluations,
//! no I/O, and no suspension point. Identical input (including the
//! evaluation year) always yields deep-equal output.

use std::cmp::Ordering;

use nricheck_core::{QuestionnaireAnswers, TriState};

use crate::output::{EngineOutput, Finding, FindingStatus};
use crate::policy;
use crate::predicates::RuleContext;
use crate::rules::{self, RuleDef};

/// Evaluate one answer set relative to the current UTC year.
///
/// Convenience wrapper over [`evaluate_as_of`]; callers that need
/// reproducibility (the report service, every test) pin the year instead.
pub fn evaluate(answers: &QuestionnaireAnswers) -> EngineOutput {
    evaluate_as_of(answers, current_utc_year())
}

/// Evaluate one answer set relative to an explicit calendar year.
///
/// Never panics for any well-typed input; a fully empty questionnaire
/// yields score 100 with no findings and zero penalty totals.
pub fn evaluate_as_of(answers: &QuestionnaireAnswers, year: i32) -> EngineOutput {
    let ctx = RuleContext::new(answers, year);

    let mut findings: Vec<Finding> = rules::registry()
        .iter()
        .filter_map(|def| run_rule(def, &ctx))
        .collect();

    let total_weight: f64 = findings.iter().map(|f| f.weight).sum();
    let total_penalty_min: u64 = findings.iter().map(|f| f.penalty_min).sum();
    let total_penalty_max: u64 = findings.iter().map(|f| f.penalty_max).sum();

    // Weights are non-negative by construction, but clamp anyway.
    let score = (100.0 - total_weight).round().clamp(0.0, 100.0) as u8;

    findings.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal))
    });

    tracing::debug!(
        score,
        findings = findings.len(),
        total_penalty_min,
        total_penalty_max,
        "evaluation complete"
    );

    EngineOutput {
        score,
        total_penalty_min,
        total_penalty_max,
        findings,
    }
}

/// Run a single rule against a context.
///
/// Public so each rule is unit-testable in isolation; production callers go
/// through [`evaluate_as_of`].
pub fn run_rule(def: &RuleDef, ctx: &RuleContext<'_>) -> Option<Finding> {
    if !(def.applies)(ctx) {
        return None;
    }

    let (damping, status) = match def.flag {
        Some(accessor) => match accessor(&ctx.answers.flags) {
            // Affirmative answers always suppress; unanswered means
            // not-yet-determined and must not penalize.
            TriState::Yes | TriState::Unanswered => return None,
            TriState::No => (1.0, FindingStatus::Triggered),
            TriState::NotSure => (policy::NOT_SURE_DAMPING, FindingStatus::NeedsReview),
        },
        None => (1.0, def.flagless_status),
    };

    let weight = (def.weight)(ctx) * damping;
    let (penalty_min, penalty_max) = (def.penalty)(ctx);
    let content = (def.content)(ctx);

    tracing::debug!(rule = %def.id, %status, weight, "rule fired");

    Some(Finding {
        rule: def.id,
        name: content.name,
        severity: def.severity,
        status,
        weight,
        penalty_min,
        penalty_max,
        obligation: content.obligation,
        why_it_applies: content.why_it_applies,
        consequence: content.consequence,
        remediation: content.remediation,
        effort: content.effort,
    })
}

fn current_utc_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
