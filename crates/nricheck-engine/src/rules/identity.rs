//! Identity-document rules: PAN–Aadhaar linkage, OCI card maintenance,
//! Aadhaar biometric refresh, and Indian passport surrender after
//! naturalization.

use nricheck_core::{TriState, UsStatus};

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{self, penalty, weight};
use crate::rules::{effort, RuleContent, RuleDef};

/// PAN must be linked to Aadhaar or the PAN goes inoperative.
pub(super) fn pan_aadhaar_link() -> RuleDef {
    RuleDef {
        id: RuleId::PanAadhaarLink,
        severity: Severity::Warning,
        applies: |ctx| ctx.answers.flags.has_pan == TriState::Yes,
        flag: Some(|flags| flags.aadhaar_linked),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::PAN_AADHAAR,
        penalty: |_| penalty::PAN_AADHAAR,
        content: |_| RuleContent {
            name: "Link your PAN to Aadhaar".to_string(),
            obligation: "Indian law requires every PAN to be linked to Aadhaar; an \
                         unlinked PAN becomes inoperative."
                .to_string(),
            why_it_applies: "You hold a PAN card and its Aadhaar linkage is unresolved. \
                             An inoperative PAN blocks tax refunds, property sales, and \
                             most financial transactions in India."
                .to_string(),
            consequence: "Higher TDS rates apply on your Indian income, refunds are \
                          withheld, and the late-linking fee (₹1,000) is due before \
                          reactivation."
                .to_string(),
            remediation: vec![
                "Check the linkage status on the income-tax e-filing portal.".to_string(),
                "Pay the late fee and submit the link request online (NRIs without \
                 Aadhaar can instead flag NRI status with the department)."
                    .to_string(),
            ],
            effort: effort(Difficulty::Easy, "1–2 days", "about $12"),
        },
    }
}

/// OCI cards must be re-issued or endorsed after passport renewal.
pub(super) fn oci_passport_update() -> RuleDef {
    RuleDef {
        id: RuleId::OciPassportUpdate,
        severity: Severity::Warning,
        applies: |ctx| ctx.answers.flags.has_oci == TriState::Yes,
        flag: Some(|flags| flags.oci_passport_updated),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::OCI_UPDATE,
        penalty: |_| penalty::OCI_UPDATE,
        content: |_| RuleContent {
            name: "Update your OCI card after passport renewal".to_string(),
            obligation: "OCI holders must have the card re-issued (or the new passport \
                         details endorsed) after renewing the passport it was issued \
                         against — once before age 20 and once after 50, and whenever \
                         the passport number changes."
                .to_string(),
            why_it_applies: "You hold an OCI card and have not confirmed it was updated \
                             after your most recent passport renewal."
                .to_string(),
            consequence: "A stale OCI can mean denied boarding or secondary inspection \
                          when traveling to India; there is no monetary fine, but the \
                          travel risk is real."
                .to_string(),
            remediation: vec![
                "Compare the passport number on your OCI card against your current \
                 passport."
                    .to_string(),
                "If they differ, file the OCI miscellaneous-services application online \
                 and mail the card for re-issue."
                    .to_string(),
            ],
            effort: effort(Difficulty::Moderate, "4–8 weeks", "$25–$100"),
        },
    }
}

/// Aadhaar biometrics go stale after a decade abroad; a refresh is a
/// recommendation, not a statutory obligation, so this rule has no flag and
/// fires whenever the dormancy condition holds.
pub(super) fn aadhaar_biometric_refresh() -> RuleDef {
    RuleDef {
        id: RuleId::AadhaarBiometricRefresh,
        severity: Severity::Info,
        applies: |ctx| {
            matches!(
                ctx.years_since_departure(),
                Some(years) if years >= policy::AADHAAR_DORMANCY_YEARS
            )
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::AADHAAR_REFRESH,
        penalty: |_| penalty::AADHAAR_REFRESH,
        content: |ctx| {
            let years = ctx.years_since_departure().unwrap_or(0);
            RuleContent {
                name: "Refresh your Aadhaar biometrics".to_string(),
                obligation: "UIDAI recommends refreshing biometrics and demographics \
                             for Aadhaar numbers unused for long periods."
                    .to_string(),
                why_it_applies: format!(
                    "You left India about {years} years ago; biometrics captured that \
                     long ago frequently fail authentication, which blocks e-KYC for \
                     banking and SIM cards on your next visit."
                ),
                consequence: "Failed Aadhaar authentication at banks, telecom counters, \
                              and property registrars until the refresh is done in \
                              person."
                    .to_string(),
                remediation: vec![
                    "Book an Aadhaar Seva Kendra appointment for your next India trip."
                        .to_string(),
                    "Carry your existing Aadhaar and current passport for the update."
                        .to_string(),
                ],
                effort: effort(Difficulty::Easy, "1 hour, in person in India", "under $2"),
            }
        },
    }
}

/// Indian passports must be surrendered after acquiring US citizenship;
/// India does not permit dual citizenship.
pub(super) fn passport_surrender() -> RuleDef {
    RuleDef {
        id: RuleId::PassportSurrender,
        severity: Severity::Warning,
        applies: |ctx| ctx.status() == Some(UsStatus::Citizen),
        flag: Some(|flags| flags.surrendered_indian_passport),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::PASSPORT_SURRENDER,
        penalty: |_| penalty::PASSPORT_SURRENDER,
        content: |_| RuleContent {
            name: "Surrender your Indian passport".to_string(),
            obligation: "India does not recognize dual citizenship: after naturalizing \
                         elsewhere you must surrender the Indian passport and obtain a \
                         surrender certificate."
                .to_string(),
            why_it_applies: "You are a US citizen and have not confirmed surrendering \
                             your Indian passport. Holding or using it after \
                             naturalization violates the Indian Citizenship Act."
                .to_string(),
            consequence: "Penalties scale with how long the passport was retained or \
                          used after naturalization, and the surrender certificate is a \
                          prerequisite for OCI and most consular services."
                .to_string(),
            remediation: vec![
                "Apply for a surrender certificate at your Indian consulate.".to_string(),
                "Keep the certificate safe — OCI and visa applications ask for it."
                    .to_string(),
            ],
            effort: effort(Difficulty::Moderate, "2–4 weeks", "$100–$600 with penalties"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::run_rule;
    use crate::predicates::RuleContext;
    use nricheck_core::QuestionnaireAnswers;

    const YEAR: i32 = 2026;

    #[test]
    fn pan_rule_needs_pan_in_hand() {
        let mut answers = QuestionnaireAnswers::default();
        answers.flags.aadhaar_linked = TriState::No;
        // No PAN: not applicable even though the linkage flag says no.
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&pan_aadhaar_link(), &ctx).is_none());

        answers.flags.has_pan = TriState::Yes;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&pan_aadhaar_link(), &ctx).expect("should fire");
        assert_eq!(finding.weight, weight::PAN_AADHAAR);
    }

    #[test]
    fn pan_rule_uncertain_pan_does_not_gate() {
        // "Not sure whether I have a PAN" is not an applicability match.
        let mut answers = QuestionnaireAnswers::default();
        answers.flags.has_pan = TriState::NotSure;
        answers.flags.aadhaar_linked = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&pan_aadhaar_link(), &ctx).is_none());
    }

    #[test]
    fn oci_update_gated_on_holding_oci() {
        let mut answers = QuestionnaireAnswers::default();
        answers.flags.oci_passport_updated = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&oci_passport_update(), &ctx).is_none());

        answers.flags.has_oci = TriState::Yes;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&oci_passport_update(), &ctx).is_some());
    }

    #[test]
    fn aadhaar_refresh_fires_only_after_a_decade() {
        let mut answers = QuestionnaireAnswers {
            departure_year: "2016".to_string(),
            ..Default::default()
        };
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&aadhaar_biometric_refresh(), &ctx).expect("10 years out");
        assert_eq!(finding.severity, Severity::Info);
        assert_eq!(finding.status, FindingStatus::Triggered);
        assert!(finding.why_it_applies.contains("10 years"));

        answers.departure_year = "2020".to_string();
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&aadhaar_biometric_refresh(), &ctx).is_none());
    }

    #[test]
    fn passport_surrender_scenario_weights() {
        // Scenario anchor: citizen + "no" → weight exactly 8, triggered;
        // "not_sure" → 5.6, needs_review.
        let mut answers = QuestionnaireAnswers {
            us_status: Some(UsStatus::Citizen),
            ..Default::default()
        };
        answers.flags.surrendered_indian_passport = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        let certain = run_rule(&passport_surrender(), &ctx).expect("should fire");
        assert_eq!(certain.severity, Severity::Warning);
        assert_eq!(certain.status, FindingStatus::Triggered);
        assert_eq!(certain.weight, 8.0);

        answers.flags.surrendered_indian_passport = TriState::NotSure;
        let ctx = RuleContext::new(&answers, YEAR);
        let unsure = run_rule(&passport_surrender(), &ctx).expect("should fire");
        assert_eq!(unsure.status, FindingStatus::NeedsReview);
        assert!((unsure.weight - 5.6).abs() < 1e-9);
    }

    #[test]
    fn passport_surrender_only_for_citizens() {
        let mut answers = QuestionnaireAnswers {
            us_status: Some(UsStatus::GreenCard),
            ..Default::default()
        };
        answers.flags.surrendered_indian_passport = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&passport_surrender(), &ctx).is_none());
    }
}
