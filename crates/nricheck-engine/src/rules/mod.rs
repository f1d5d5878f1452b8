//! # Rule Descriptors
//!
//! Each of the nineteen rules is a [`RuleDef`]: an applicability gate, an
//! optional compliance-flag accessor, a weight function, a penalty range,
//! and a narrative builder. The driver in [`crate::evaluate`] iterates the
//! registry generically; no rule knows about scoring, sorting, or any other
//! rule.
//!
//! ## Rule contract
//!
//! 1. `applies` returns false when the respondent's situation cannot trigger
//!    the obligation (wrong assets, wrong status, amounts clearly under
//!    threshold). A false gate means the rule is absent from the output.
//! 2. The flag gate belongs to the driver: `yes` suppresses the finding,
//!    `no` takes full weight with `triggered` status, `not_sure` takes
//!    damped weight with `needs_review`, and an unanswered flag suppresses
//!    (an incomplete questionnaire is never penalized). Flag-less rules
//!    fire with their `flagless_status` at full weight.
//! 3. Narratives are a base template plus caveat fragments, each gated by
//!    its own predicate, so "does this caveat appear" is testable apart
//!    from the base obligation text.

use nricheck_core::{ComplianceFlags, TriState};

use crate::output::{Difficulty, FindingStatus, RemediationEffort, RuleId, Severity};
use crate::predicates::RuleContext;

mod banking;
mod disclosure;
mod identity;
mod income;
mod investment;
mod state_tax;

/// The narrative half of a finding, built only when the rule fires.
#[derive(Debug, Clone)]
pub struct RuleContent {
    /// Display name, possibly parameterized with the respondent's state.
    pub name: String,
    /// What the obligation is.
    pub obligation: String,
    /// Why it applies to this respondent.
    pub why_it_applies: String,
    /// What happens if unresolved.
    pub consequence: String,
    /// Ordered remediation steps.
    pub remediation: Vec<String>,
    /// Difficulty / time / cost tags.
    pub effort: RemediationEffort,
}

/// One rule: identity, gates, weight, penalty, and narrative builder.
pub struct RuleDef {
    /// Stable identifier.
    pub id: RuleId,
    /// Display severity.
    pub severity: Severity,
    /// Applicability gate; false means the rule is absent from the output.
    pub applies: fn(&RuleContext<'_>) -> bool,
    /// Accessor for the compliance flag this rule depends on, if any.
    pub flag: Option<fn(&ComplianceFlags) -> TriState>,
    /// Status a flag-less rule fires with (ignored when `flag` is set).
    pub flagless_status: FindingStatus,
    /// Base weight before uncertainty damping; may vary by status.
    pub weight: fn(&RuleContext<'_>) -> f64,
    /// Penalty estimate range in whole USD.
    pub penalty: fn(&RuleContext<'_>) -> (u64, u64),
    /// Narrative builder, invoked only when the rule fires.
    pub content: fn(&RuleContext<'_>) -> RuleContent,
}

/// All nineteen rules in canonical order (matching [`RuleId::all`]).
pub fn registry() -> Vec<RuleDef> {
    vec![
        disclosure::fbar(),
        disclosure::form_8938(),
        income::indian_tax_return(),
        identity::pan_aadhaar_link(),
        banking::nro_conversion(),
        identity::oci_passport_update(),
        identity::aadhaar_biometric_refresh(),
        income::tds_certificate_records(),
        banking::repatriation_docs(),
        investment::pfic_reporting(),
        income::tax_residency_certificate(),
        investment::property_tax_reporting(),
        banking::bank_account_reclassification(),
        investment::retirement_fund_restrictions(),
        investment::insurance_policy_compliance(),
        identity::passport_surrender(),
        state_tax::foreign_income_gap(),
        state_tax::foreign_tax_credit_gap(),
        state_tax::california_capital_gains(),
    ]
}

/// Shorthand for the effort tags.
pub(crate) fn effort(difficulty: Difficulty, time: &str, cost: &str) -> RemediationEffort {
    RemediationEffort {
        difficulty,
        time_estimate: time.to_string(),
        cost_estimate: cost.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RULE_COUNT;

    #[test]
    fn registry_covers_every_rule_exactly_once() {
        let defs = registry();
        assert_eq!(defs.len(), RULE_COUNT);

        let mut seen = std::collections::HashSet::new();
        for def in &defs {
            assert!(seen.insert(def.id), "duplicate rule in registry: {}", def.id);
        }
        for id in RuleId::all() {
            assert!(seen.contains(id), "rule missing from registry: {id}");
        }
    }

    #[test]
    fn registry_order_matches_rule_id_order() {
        let defs = registry();
        let ids: Vec<RuleId> = defs.iter().map(|d| d.id).collect();
        assert_eq!(ids, RuleId::all().to_vec());
    }
}
