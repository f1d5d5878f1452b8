//! Banking rules under FEMA: converting resident savings accounts to NRO,
//! reclassifying deposits to nonresident status, and keeping repatriation
//! paperwork ready.

use nricheck_core::AssetKind;

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{penalty, weight};
use crate::rules::{effort, RuleContent, RuleDef};

/// FEMA requires resident savings accounts to become NRO accounts once the
/// holder becomes a nonresident.
pub(super) fn nro_conversion() -> RuleDef {
    RuleDef {
        id: RuleId::NroConversion,
        severity: Severity::Warning,
        applies: |ctx| ctx.answers.holds(AssetKind::BankAccount),
        flag: Some(|flags| flags.converted_to_nro),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::NRO_CONVERSION,
        penalty: |_| penalty::NRO_CONVERSION,
        content: |_| RuleContent {
            name: "Convert resident savings accounts to NRO".to_string(),
            obligation: "Under FEMA, a resident savings account must be redesignated as \
                         an NRO account when the holder's residential status changes to \
                         nonresident."
                .to_string(),
            why_it_applies: "You hold Indian bank accounts and have not confirmed \
                             converting them after moving to the US. Operating a \
                             resident account as a nonresident is a FEMA contravention."
                .to_string(),
            consequence: "FEMA penalties can reach three times the amount involved, and \
                          banks may freeze accounts flagged as wrongly classified."
                .to_string(),
            remediation: vec![
                "Write to each bank with your passport, visa, and overseas address to \
                 redesignate the account as NRO."
                    .to_string(),
                "Open an NRE account alongside if you remit US earnings to India."
                    .to_string(),
            ],
            effort: effort(Difficulty::Moderate, "2–4 weeks", "$0"),
        },
    }
}

/// Beyond savings accounts, fixed deposits and similar holdings need the
/// bank's records to reflect NRI status.
pub(super) fn bank_account_reclassification() -> RuleDef {
    RuleDef {
        id: RuleId::BankAccountReclassification,
        severity: Severity::Warning,
        applies: |ctx| {
            ctx.answers
                .holds_any(&[AssetKind::BankAccount, AssetKind::FixedDeposit])
        },
        flag: Some(|flags| flags.reclassified_bank_accounts),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::BANK_RECLASSIFY,
        penalty: |_| penalty::BANK_RECLASSIFY,
        content: |ctx| {
            let holdings = if ctx.answers.holds(AssetKind::FixedDeposit) {
                "bank accounts and fixed deposits"
            } else {
                "bank accounts"
            };
            RuleContent {
                name: "Update your NRI status with Indian banks".to_string(),
                obligation: "Banks must be informed of a change to nonresident status so \
                             deposits, KYC records, and TDS treatment are reclassified \
                             accordingly."
                    .to_string(),
                why_it_applies: format!(
                    "You hold {holdings} in India and have not confirmed that the banks \
                     know you are a nonresident. Interest on wrongly-classified \
                     deposits is taxed and reported incorrectly on both sides."
                ),
                consequence: "Incorrect TDS withholding, FEMA exposure on the deposits, \
                              and mismatches between Indian bank reporting and your US \
                              filings."
                    .to_string(),
                remediation: vec![
                    "Submit the NRI re-KYC package (passport, visa, overseas address \
                     proof) to each bank."
                        .to_string(),
                    "Ask the bank to reissue fixed deposits under NRO terms on maturity."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "2–4 weeks", "$0"),
            }
        },
    }
}

/// Repatriating sale or maturity proceeds needs Form 15CA/15CB paperwork;
/// once holdings are large or diverse it is worth preparing before the money
/// needs to move. There is no yes/no compliance flag — only readiness — so
/// the finding always carries needs-review status at full weight.
pub(super) fn repatriation_docs() -> RuleDef {
    RuleDef {
        id: RuleId::RepatriationDocs,
        severity: Severity::Warning,
        applies: |ctx| !ctx.answers.assets.is_empty() && ctx.repatriation_ready(),
        flag: None,
        flagless_status: FindingStatus::NeedsReview,
        weight: |_| weight::REPATRIATION,
        penalty: |_| penalty::REPATRIATION,
        content: |ctx| RuleContent {
            name: "Prepare repatriation paperwork (Form 15CA/15CB)".to_string(),
            obligation: "Moving money out of India above the liberalized limits requires \
                         Form 15CA, usually a chartered accountant's certificate on \
                         Form 15CB, and clean source documentation."
                .to_string(),
            why_it_applies: format!(
                "You hold {} Indian asset categories at values where repatriation \
                 paperwork becomes the bottleneck — assembling it after a sale closes \
                 adds months.",
                ctx.answers.assets.len()
            ),
            consequence: "Delayed transfers, banks refusing remittance without the CA \
                          certificate, and avoidable double-TDS on sale proceeds."
                .to_string(),
            remediation: vec![
                "Keep acquisition records and tax paid-up proofs per asset.".to_string(),
                "Identify a chartered accountant who issues Form 15CB before you need \
                 to remit."
                    .to_string(),
                "Route repatriation through your NRO account within the $1M annual \
                 scheme."
                    .to_string(),
            ],
            effort: effort(Difficulty::Involved, "4–6 weeks", "$100–$300 CA fees"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::run_rule;
    use crate::predicates::RuleContext;
    use nricheck_core::{AmountBand, QuestionnaireAnswers, TriState};

    const YEAR: i32 = 2026;

    #[test]
    fn nro_conversion_needs_a_bank_account() {
        let mut answers = QuestionnaireAnswers::default();
        answers.flags.converted_to_nro = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&nro_conversion(), &ctx).is_none());

        answers.assets.insert(AssetKind::BankAccount);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&nro_conversion(), &ctx).expect("should fire");
        assert_eq!(finding.rule, RuleId::NroConversion);
        assert_eq!(finding.weight, weight::NRO_CONVERSION);
    }

    #[test]
    fn reclassification_mentions_fixed_deposits_when_held() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::BankAccount);
        answers.flags.reclassified_bank_accounts = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        let without_fd = run_rule(&bank_account_reclassification(), &ctx).expect("fires");
        assert!(!without_fd.why_it_applies.contains("fixed deposits"));

        answers.assets.insert(AssetKind::FixedDeposit);
        let ctx = RuleContext::new(&answers, YEAR);
        let with_fd = run_rule(&bank_account_reclassification(), &ctx).expect("fires");
        assert!(with_fd.why_it_applies.contains("fixed deposits"));
    }

    #[test]
    fn repatriation_always_needs_review_at_full_weight() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Property);
        answers
            .asset_amounts
            .insert(AssetKind::Property, AmountBand::Above250k);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&repatriation_docs(), &ctx).expect("should fire");
        assert_eq!(finding.status, FindingStatus::NeedsReview);
        assert_eq!(finding.weight, weight::REPATRIATION);
    }

    #[test]
    fn repatriation_quiet_for_small_holdings() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::BankAccount);
        answers
            .asset_amounts
            .insert(AssetKind::BankAccount, AmountBand::UpTo10k);
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&repatriation_docs(), &ctx).is_none());
    }
}
