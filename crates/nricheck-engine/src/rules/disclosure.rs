//! Federal foreign-disclosure rules: FBAR and Form 8938.
//!
//! Both are aggregate-threshold obligations evaluated with the conservative
//! "likely above" heuristics from the predicate library, and both carry the
//! residency-test caveat for first-year visa holders, whose filing duty may
//! not begin until the substantial presence test is met.

use nricheck_core::AssetKind;

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{self, penalty, weight};
use crate::predicates::RuleContext;
use crate::rules::{effort, RuleContent, RuleDef};

/// Comma-separated display list of the reportable account kinds held.
fn held_account_list(ctx: &RuleContext<'_>) -> String {
    let held: Vec<&str> = policy::FBAR_ACCOUNT_KINDS
        .iter()
        .filter(|k| ctx.answers.holds(**k))
        .map(|k| k.display_name())
        .collect();
    held.join(", ")
}

/// Residency-test caveat appended for first-year temporary-visa arrivals.
fn first_year_caveat(ctx: &RuleContext<'_>) -> Option<String> {
    ctx.is_first_year_arrival().then(|| {
        " Note: since you moved this year on a temporary visa, check whether you \
         meet the substantial presence test yet — your first filing obligation \
         may start with next year's return."
            .to_string()
    })
}

/// FBAR (FinCEN Form 114): report foreign accounts once the aggregate
/// balance exceeds $10,000 at any point in the year.
pub(super) fn fbar() -> RuleDef {
    RuleDef {
        id: RuleId::FbarDisclosure,
        severity: Severity::Urgent,
        applies: |ctx| ctx.holds_reportable_account() && ctx.likely_above_fbar_threshold(),
        flag: Some(|flags| flags.filed_fbar),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::FBAR,
        penalty: |_| penalty::FBAR,
        content: |ctx| {
            let mut why = format!(
                "You hold {} in India, and their combined balance likely crossed \
                 the $10,000 aggregate at some point in the year.",
                held_account_list(ctx)
            );
            if let Some(caveat) = first_year_caveat(ctx) {
                why.push_str(&caveat);
            }
            RuleContent {
                name: "Report Indian accounts on the FBAR".to_string(),
                obligation: "US persons must file FinCEN Form 114 (FBAR) when their \
                             foreign financial accounts exceed $10,000 in aggregate at \
                             any time during the calendar year."
                    .to_string(),
                why_it_applies: why,
                consequence: "Non-willful violations carry a penalty of roughly $10,000 \
                              per year; willful violations can reach the greater of \
                              $100,000 or 50% of the account balance, per year."
                    .to_string(),
                remediation: vec![
                    "List every Indian account (bank, FD, PPF, EPF) with its maximum \
                     balance for the year."
                        .to_string(),
                    "File FinCEN Form 114 electronically through the BSA e-filing system."
                        .to_string(),
                    "For missed prior years, ask a cross-border CPA about the streamlined \
                     or delinquent-FBAR procedures before filing anything."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "1–2 weeks", "$0 self-filed; $300–$800 with a CPA"),
            }
        },
    }
}

/// Form 8938 (FATCA): specified foreign financial assets above the
/// filing-status-dependent threshold go on the federal return itself.
pub(super) fn form_8938() -> RuleDef {
    RuleDef {
        id: RuleId::Form8938Disclosure,
        severity: Severity::Urgent,
        applies: |ctx| {
            ctx.answers.holds_any(policy::FORM_8938_ASSET_KINDS)
                && ctx.likely_above_form_8938_threshold()
        },
        flag: Some(|flags| flags.filed_form_8938),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::FORM_8938,
        penalty: |_| penalty::FORM_8938,
        content: |ctx| {
            let joint = ctx
                .answers
                .filing_status
                .is_some_and(|status| status.is_joint());
            let threshold = if joint { "$100,000" } else { "$50,000" };
            let mut why = format!(
                "Your Indian financial assets appear to exceed the {threshold} \
                 Form 8938 threshold for your filing status."
            );
            if ctx.answers.holds(AssetKind::Property) {
                why.push_str(
                    " Directly-held real property is not itself a specified asset, \
                     but accounts, funds, shares, and insurance policies are.",
                );
            }
            if let Some(caveat) = first_year_caveat(ctx) {
                why.push_str(&caveat);
            }
            RuleContent {
                name: "Disclose Indian assets on Form 8938".to_string(),
                obligation: format!(
                    "FATCA requires specified foreign financial assets above \
                     {threshold} (year-end) to be reported on Form 8938, attached to \
                     your federal return."
                ),
                why_it_applies: why,
                consequence: "Failure to file starts at $10,000, rising by $10,000 per \
                              30 days after IRS notice up to $50,000, plus a 40% \
                              accuracy penalty on understatements tied to undisclosed \
                              assets."
                    .to_string(),
                remediation: vec![
                    "Inventory each specified asset with its year-end and maximum values."
                        .to_string(),
                    "Attach Form 8938 to your next federal return (it does not replace \
                     the FBAR — both may be due)."
                        .to_string(),
                    "If prior years are missing, have a CPA weigh the streamlined \
                     compliance procedures first."
                        .to_string(),
                ],
                effort: effort(
                    Difficulty::Moderate,
                    "1–2 weeks",
                    "$0 self-filed; $200–$500 with a CPA",
                ),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::run_rule;
    use nricheck_core::{
        AmountBand, FilingStatus, QuestionnaireAnswers, TriState, UsStatus,
    };

    const YEAR: i32 = 2026;

    fn base_answers() -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::BankAccount);
        answers
            .asset_amounts
            .insert(AssetKind::BankAccount, AmountBand::From10kTo50k);
        answers
    }

    #[test]
    fn fbar_fires_urgent_when_unfiled() {
        let mut answers = base_answers();
        answers.flags.filed_fbar = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&fbar(), &ctx).expect("fbar should fire");
        assert_eq!(finding.rule, RuleId::FbarDisclosure);
        assert_eq!(finding.severity, Severity::Urgent);
        assert_eq!(finding.status, FindingStatus::Triggered);
        assert_eq!(finding.weight, weight::FBAR);
        assert!(finding.why_it_applies.contains("bank accounts"));
    }

    #[test]
    fn fbar_suppressed_when_filed() {
        let mut answers = base_answers();
        answers.flags.filed_fbar = TriState::Yes;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&fbar(), &ctx).is_none());
    }

    #[test]
    fn fbar_suppressed_when_unanswered() {
        let answers = base_answers();
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&fbar(), &ctx).is_none());
    }

    #[test]
    fn fbar_not_applicable_below_threshold() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::BankAccount);
        answers
            .asset_amounts
            .insert(AssetKind::BankAccount, AmountBand::UpTo10k);
        answers.flags.filed_fbar = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&fbar(), &ctx).is_none());
    }

    #[test]
    fn fbar_not_sure_damps_and_needs_review() {
        let mut answers = base_answers();
        answers.flags.filed_fbar = TriState::NotSure;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&fbar(), &ctx).expect("fbar should fire");
        assert_eq!(finding.status, FindingStatus::NeedsReview);
        assert!((finding.weight - weight::FBAR * policy::NOT_SURE_DAMPING).abs() < 1e-9);
    }

    #[test]
    fn fbar_first_year_caveat_present_only_for_recent_visa_arrivals() {
        let mut answers = base_answers();
        answers.flags.filed_fbar = TriState::No;
        answers.us_status = Some(UsStatus::H1bVisa);
        answers.departure_year = YEAR.to_string();
        let ctx = RuleContext::new(&answers, YEAR);
        let fresh = run_rule(&fbar(), &ctx).expect("should fire");
        assert!(fresh.why_it_applies.contains("substantial presence"));

        answers.departure_year = "2019".to_string();
        let ctx = RuleContext::new(&answers, YEAR);
        let settled = run_rule(&fbar(), &ctx).expect("should fire");
        assert!(!settled.why_it_applies.contains("substantial presence"));
    }

    #[test]
    fn form_8938_threshold_varies_by_filing_status() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::MutualFunds);
        answers
            .asset_amounts
            .insert(AssetKind::MutualFunds, AmountBand::From50kTo100k);
        answers.flags.filed_form_8938 = TriState::No;

        answers.filing_status = Some(FilingStatus::Single);
        let ctx = RuleContext::new(&answers, YEAR);
        let single = run_rule(&form_8938(), &ctx).expect("single filer should trigger");
        assert!(single.obligation.contains("$50,000"));

        answers.filing_status = Some(FilingStatus::MarriedJoint);
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(
            run_rule(&form_8938(), &ctx).is_none(),
            "joint filer at 50k–100k is under the doubled threshold"
        );
    }

    #[test]
    fn form_8938_property_alone_is_not_a_specified_asset() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Property);
        answers
            .asset_amounts
            .insert(AssetKind::Property, AmountBand::Above250k);
        answers.flags.filed_form_8938 = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&form_8938(), &ctx).is_none());
    }
}
