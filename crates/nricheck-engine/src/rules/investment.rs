//! Investment-holding rules: PFIC treatment of Indian mutual funds, property
//! rental reporting, retirement-account restrictions, and ULIP/endowment
//! policies under US tax law.

use nricheck_core::{AssetKind, IncomeKind};

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{self, penalty, weight};
use crate::rules::{effort, RuleContent, RuleDef};

/// Indian mutual funds are PFICs for US tax purposes. The exposure is
/// heavier for green-card holders and citizens, who never exit the regime;
/// visa holders shed it when their US tax residency ends.
pub(super) fn pfic_reporting() -> RuleDef {
    RuleDef {
        id: RuleId::PficReporting,
        severity: Severity::Urgent,
        applies: |ctx| ctx.answers.holds(AssetKind::MutualFunds),
        flag: Some(|flags| flags.reported_pfic),
        flagless_status: FindingStatus::Triggered,
        weight: |ctx| {
            if ctx.has_permanent_status() {
                weight::PFIC_PERMANENT
            } else {
                weight::PFIC_TEMPORARY
            }
        },
        penalty: |_| penalty::PFIC,
        content: |ctx| {
            let mut why = "You hold Indian mutual funds, which the US classifies as \
                           Passive Foreign Investment Companies. Each fund generally \
                           requires its own Form 8621, and the default tax treatment \
                           of gains and distributions is punitive."
                .to_string();
            if ctx.has_permanent_status() {
                why.push_str(
                    " As a permanent resident or citizen you stay inside the PFIC \
                     regime for as long as you hold the funds, so the exposure \
                     compounds every year.",
                );
            } else {
                why.push_str(
                    " On a temporary visa the exposure runs only while you are a US \
                     tax resident, which makes exiting the funds before a status \
                     change worth considering.",
                );
            }
            RuleContent {
                name: "Report Indian mutual funds as PFICs (Form 8621)".to_string(),
                obligation: "US taxpayers holding PFIC shares must generally file Form \
                             8621 per fund per year; without a QEF or mark-to-market \
                             election, gains are taxed at top ordinary rates plus an \
                             interest charge."
                    .to_string(),
                why_it_applies: why,
                consequence: "Excess-distribution tax plus interest charges that can \
                              consume most of a fund's gains, and an open statute of \
                              limitations on the whole return while Form 8621 is \
                              missing."
                    .to_string(),
                remediation: vec![
                    "List every Indian mutual fund and ULIP-linked fund you hold."
                        .to_string(),
                    "Engage a cross-border CPA — PFIC computations are not a \
                     self-file exercise."
                        .to_string(),
                    "Weigh a mark-to-market election or an exit from the funds \
                     against the default regime."
                        .to_string(),
                ],
                effort: effort(Difficulty::Involved, "4–8 weeks", "$200–$2,000 per fund in CPA fees"),
            }
        },
    }
}

/// Indian rental property must be reported on the US return whether or not
/// rent is currently collected. Guidance-grade, so no flag.
pub(super) fn property_tax_reporting() -> RuleDef {
    RuleDef {
        id: RuleId::PropertyTaxReporting,
        severity: Severity::Info,
        applies: |ctx| ctx.answers.holds(AssetKind::Property),
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::PROPERTY,
        penalty: |_| penalty::PROPERTY,
        content: |ctx| {
            let rented = ctx.answers.receives(IncomeKind::Rental);
            let why = if rented {
                "You own Indian property and collect rent. The rent is taxable in \
                 both countries, with a foreign tax credit reconciling the two, and \
                 Indian municipal taxes and depreciation rules differ from the US \
                 Schedule E treatment."
                    .to_string()
            } else {
                "You own Indian property. Even without rental income, a future sale \
                 triggers capital gains in both countries and TDS of up to 20%+ on \
                 the gross sale price for NRI sellers, so basis records matter now."
                    .to_string()
            };
            RuleContent {
                name: "Track US reporting for your Indian property".to_string(),
                obligation: "Worldwide income taxation means Indian rent goes on \
                             Schedule E and a future sale on Schedule D; India \
                             separately withholds TDS on NRI property transactions."
                    .to_string(),
                why_it_applies: why,
                consequence: "Unreported rent is understated income on the US return; \
                              lost basis records inflate capital gains on an eventual \
                              sale in both countries."
                    .to_string(),
                remediation: vec![
                    "Keep purchase deeds, improvement receipts, and municipal tax \
                     records together."
                        .to_string(),
                    "Report rental income on Schedule E with the foreign tax credit \
                     for Indian TDS."
                        .to_string(),
                ],
                effort: effort(Difficulty::Easy, "a few hours per year", "$0"),
            }
        },
    }
}

/// EPF, PPF, and NPS accounts have NRI contribution and maturity
/// restrictions, and the US does not treat their growth as tax-deferred.
pub(super) fn retirement_fund_restrictions() -> RuleDef {
    RuleDef {
        id: RuleId::RetirementFundRestrictions,
        severity: Severity::Info,
        applies: |ctx| {
            ctx.answers
                .holds_any(&[AssetKind::Epf, AssetKind::Ppf, AssetKind::Nps])
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::RETIREMENT_FUNDS,
        penalty: |_| penalty::RETIREMENT_FUNDS,
        content: |ctx| {
            let held: Vec<&str> = [AssetKind::Epf, AssetKind::Ppf, AssetKind::Nps]
                .iter()
                .filter(|k| ctx.answers.holds(**k))
                .map(|k| k.display_name())
                .collect();
            RuleContent {
                name: "Review NRI rules for your Indian retirement accounts".to_string(),
                obligation: "EPF, PPF, and NPS each restrict NRI participation: PPF \
                             accounts cannot be extended after the holder becomes an \
                             NRI, EPF stops earning interest three years after \
                             contributions cease, and NPS requires an exit or status \
                             update."
                    .to_string(),
                why_it_applies: format!(
                    "You hold {} in India. The US also taxes these accounts' annual \
                     growth — their Indian tax exemption does not carry over.",
                    held.join(", ")
                ),
                consequence: "Interest accruing untaxed in India but unreported in the \
                              US, accounts frozen or closed on the institution's \
                              initiative, and forfeited interest on dormant EPF."
                    .to_string(),
                remediation: vec![
                    "Check each account's NRI policy and update your status with the \
                     administrator."
                        .to_string(),
                    "Report the annual accretions on your US return; these accounts \
                     also count toward FBAR and Form 8938."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "2–4 weeks", "$0"),
            }
        },
    }
}

/// ULIPs and endowment policies are taxed very differently in the US: the
/// investment component can be a PFIC and the policy itself may fail the US
/// definition of life insurance.
pub(super) fn insurance_policy_compliance() -> RuleDef {
    RuleDef {
        id: RuleId::InsurancePolicyCompliance,
        severity: Severity::Warning,
        applies: |ctx| ctx.answers.holds(AssetKind::Insurance),
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::INSURANCE,
        penalty: |_| penalty::INSURANCE,
        content: |_| RuleContent {
            name: "Review US treatment of your Indian insurance policies".to_string(),
            obligation: "Indian ULIPs and endowment policies rarely qualify as life \
                         insurance under US tax definitions; their inside buildup is \
                         then currently taxable, the linked funds can be PFICs, and \
                         cash values belong on FBAR and Form 8938."
                .to_string(),
            why_it_applies: "You hold Indian insurance policies. The Indian tax \
                             exemption on maturity proceeds does not exist on the US \
                             side, and unreported cash value is a common audit \
                             finding for NRIs."
                .to_string(),
            consequence: "Tax plus penalties on years of unreported inside buildup, \
                          PFIC treatment of ULIP funds, and disclosure penalties if \
                          cash values were omitted from FBAR or Form 8938."
                .to_string(),
            remediation: vec![
                "Get current surrender/cash values from each insurer.".to_string(),
                "Have a cross-border CPA classify each policy under the US insurance \
                 definition."
                    .to_string(),
                "Include cash values in your FBAR and Form 8938 filings.".to_string(),
            ],
            effort: effort(Difficulty::Involved, "4–6 weeks", "$300–$1,000 in CPA fees"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::run_rule;
    use crate::predicates::RuleContext;
    use nricheck_core::{QuestionnaireAnswers, TriState, UsStatus};

    const YEAR: i32 = 2026;

    #[test]
    fn pfic_weight_varies_by_status() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::MutualFunds);
        answers.flags.reported_pfic = TriState::No;

        answers.us_status = Some(UsStatus::H1bVisa);
        let ctx = RuleContext::new(&answers, YEAR);
        let temporary = run_rule(&pfic_reporting(), &ctx).expect("should fire");
        assert_eq!(temporary.weight, weight::PFIC_TEMPORARY);
        assert!(temporary.why_it_applies.contains("temporary visa"));

        answers.us_status = Some(UsStatus::Citizen);
        let ctx = RuleContext::new(&answers, YEAR);
        let permanent = run_rule(&pfic_reporting(), &ctx).expect("should fire");
        assert_eq!(permanent.weight, weight::PFIC_PERMANENT);
        assert!(permanent.why_it_applies.contains("permanent resident"));
    }

    #[test]
    fn pfic_unknown_status_uses_temporary_weight() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::MutualFunds);
        answers.flags.reported_pfic = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&pfic_reporting(), &ctx).expect("should fire");
        assert_eq!(finding.weight, weight::PFIC_TEMPORARY);
    }

    #[test]
    fn pfic_not_sure_damps_permanent_weight() {
        let mut answers = QuestionnaireAnswers {
            us_status: Some(UsStatus::GreenCard),
            ..Default::default()
        };
        answers.assets.insert(AssetKind::MutualFunds);
        answers.flags.reported_pfic = TriState::NotSure;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&pfic_reporting(), &ctx).expect("should fire");
        assert_eq!(finding.status, FindingStatus::NeedsReview);
        let expected = weight::PFIC_PERMANENT * policy::NOT_SURE_DAMPING;
        assert!((finding.weight - expected).abs() < 1e-9);
    }

    #[test]
    fn property_narrative_tracks_rental_income() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Property);
        let ctx = RuleContext::new(&answers, YEAR);
        let idle = run_rule(&property_tax_reporting(), &ctx).expect("should fire");
        assert_eq!(idle.severity, Severity::Info);
        assert!(idle.why_it_applies.contains("without rental income"));

        answers.income.insert(IncomeKind::Rental);
        let ctx = RuleContext::new(&answers, YEAR);
        let rented = run_rule(&property_tax_reporting(), &ctx).expect("should fire");
        assert!(rented.why_it_applies.contains("collect rent"));
    }

    #[test]
    fn retirement_rule_lists_held_accounts() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Ppf);
        answers.assets.insert(AssetKind::Nps);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&retirement_fund_restrictions(), &ctx).expect("should fire");
        assert!(finding.why_it_applies.contains("PPF"));
        assert!(finding.why_it_applies.contains("NPS"));
        assert!(!finding.why_it_applies.contains("EPF"));
    }

    #[test]
    fn insurance_rule_fires_without_any_flag() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Insurance);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&insurance_policy_compliance(), &ctx).expect("should fire");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.status, FindingStatus::Triggered);
        assert_eq!(finding.weight, weight::INSURANCE);
    }
}
