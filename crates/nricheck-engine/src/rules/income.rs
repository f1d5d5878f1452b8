//! Indian-income rules: the NRI income-tax return, TDS certificate records,
//! and the treaty residency certificate.

use nricheck_core::{IncomeKind, UsStatus};

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{penalty, weight};
use crate::rules::{effort, RuleContent, RuleDef};

/// NRIs with Indian-source income above the basic exemption (or with TDS to
/// reclaim) must file an Indian return. Assets alone also gate this rule:
/// interest and maturity proceeds usually produce filing obligations even
/// when the respondent does not think of them as income.
pub(super) fn indian_tax_return() -> RuleDef {
    RuleDef {
        id: RuleId::IndianTaxReturn,
        severity: Severity::Warning,
        applies: |ctx| ctx.has_indian_footprint(),
        flag: Some(|flags| flags.filed_indian_return),
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::INDIAN_RETURN,
        penalty: |_| penalty::INDIAN_RETURN,
        content: |ctx| {
            let why = if ctx.answers.has_indian_income() {
                "You receive Indian-source income and have not confirmed filing an \
                 Indian return. NRIs must file when Indian income exceeds the basic \
                 exemption, and filing is the only way to reclaim excess TDS."
                    .to_string()
            } else {
                "You hold Indian assets and have not confirmed filing an Indian \
                 return. Interest, dividends, and maturity proceeds from those \
                 holdings typically create a filing obligation, and TDS already \
                 withheld is only refundable through a return."
                    .to_string()
            };
            RuleContent {
                name: "File your Indian income-tax return as an NRI".to_string(),
                obligation: "NRIs must file an Indian return (usually ITR-2) when \
                             Indian-source income exceeds the basic exemption limit, \
                             by July 31 following the fiscal year."
                    .to_string(),
                why_it_applies: why,
                consequence: "Late-filing fees up to ₹10,000, interest on unpaid tax, \
                              forfeited TDS refunds, and notices that are slow to \
                              resolve from abroad."
                    .to_string(),
                remediation: vec![
                    "Pull your Form 26AS and AIS from the e-filing portal to see what \
                     India already knows about your income."
                        .to_string(),
                    "File ITR-2 with residential status marked as non-resident."
                        .to_string(),
                    "Claim treaty relief for income also taxed in the US.".to_string(),
                ],
                effort: effort(Difficulty::Moderate, "1–2 weeks", "$20–$100 with a preparer"),
            }
        },
    }
}

/// Rental and interest income carry TDS withheld at source; without the
/// certificates the credit is hard to claim on either return. Record-keeping
/// guidance, so no flag.
pub(super) fn tds_certificate_records() -> RuleDef {
    RuleDef {
        id: RuleId::TdsCertificateRecords,
        severity: Severity::Info,
        applies: |ctx| {
            ctx.answers.receives(IncomeKind::Rental) || ctx.answers.receives(IncomeKind::Interest)
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::TDS_RECORDS,
        penalty: |_| penalty::TDS_RECORDS,
        content: |ctx| {
            let sources = match (
                ctx.answers.receives(IncomeKind::Rental),
                ctx.answers.receives(IncomeKind::Interest),
            ) {
                (true, true) => "rental and interest income",
                (true, false) => "rental income",
                _ => "interest income",
            };
            RuleContent {
                name: "Keep your TDS certificates (Form 16A) organized".to_string(),
                obligation: "Payers who withhold TDS on NRI income must issue Form 16A \
                             quarterly; the certificates substantiate the credit on \
                             your Indian return and the foreign tax credit on your US \
                             return."
                    .to_string(),
                why_it_applies: format!(
                    "You receive {sources} from India, which is subject to TDS at NRI \
                     rates. Missing certificates routinely mean double-taxed income."
                ),
                consequence: "Unclaimed TDS credits, a smaller US foreign tax credit \
                              than you are entitled to, and reconciliation notices \
                              when Form 26AS disagrees with your return."
                    .to_string(),
                remediation: vec![
                    "Collect Form 16A from each payer every quarter (tenants deducting \
                     TDS included)."
                        .to_string(),
                    "Reconcile the certificates against Form 26AS before filing."
                        .to_string(),
                ],
                effort: effort(Difficulty::Easy, "ongoing, 1–2 hours per quarter", "$0"),
            }
        },
    }
}

/// Claiming India–US treaty rates requires a US Tax Residency Certificate
/// (Form 6166, requested on Form 8802) plus Form 10F filed in India. There
/// is no questionnaire flag for holding a current TRC, so the finding fires
/// as triggered whenever treaty-eligible income exists.
pub(super) fn tax_residency_certificate() -> RuleDef {
    RuleDef {
        id: RuleId::TaxResidencyCertificate,
        severity: Severity::Warning,
        applies: |ctx| ctx.answers.has_indian_income(),
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::RESIDENCY_CERT,
        penalty: |_| penalty::RESIDENCY_CERT,
        content: |ctx| {
            let mut why = "You have Indian-source income eligible for reduced treaty \
                           rates, and claiming them in India requires a current US \
                           Tax Residency Certificate with Form 10F."
                .to_string();
            if ctx.status() == Some(UsStatus::GreenCard) {
                why.push_str(
                    " As a green-card holder spending significant time in India you \
                     can be tax-resident in both countries; the treaty tie-breaker \
                     then decides which residency controls, and the TRC is how you \
                     assert the US side.",
                );
            }
            RuleContent {
                name: "Obtain a US Tax Residency Certificate (Form 6166)".to_string(),
                obligation: "To claim India–US treaty benefits, Indian payers need a US \
                             TRC (IRS Form 6166, requested via Form 8802) and an \
                             electronically-filed Form 10F, renewed each year."
                    .to_string(),
                why_it_applies: why,
                consequence: "Without the certificate, TDS is withheld at full \
                              domestic rates (often 30%+) instead of treaty rates, \
                              and recovering the excess means filing and waiting for \
                              refunds."
                    .to_string(),
                remediation: vec![
                    "File IRS Form 8802 (expect 6–8 weeks; $85 user fee).".to_string(),
                    "Submit Form 10F on the Indian e-filing portal and share both with \
                     each payer."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "6–10 weeks", "$85 per year"),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::run_rule;
    use crate::predicates::RuleContext;
    use nricheck_core::{AssetKind, QuestionnaireAnswers, TriState};

    const YEAR: i32 = 2026;

    #[test]
    fn return_rule_gated_on_indian_footprint() {
        let mut answers = QuestionnaireAnswers::default();
        answers.flags.filed_indian_return = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&indian_tax_return(), &ctx).is_none());

        answers.income.insert(IncomeKind::Rental);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&indian_tax_return(), &ctx).expect("should fire");
        assert_eq!(finding.weight, weight::INDIAN_RETURN);
        assert!(finding.why_it_applies.contains("Indian-source income"));
    }

    #[test]
    fn return_rule_narrative_differs_for_assets_only() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::FixedDeposit);
        answers.flags.filed_indian_return = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&indian_tax_return(), &ctx).expect("should fire");
        assert!(finding.why_it_applies.contains("hold Indian assets"));
    }

    #[test]
    fn income_none_sentinel_does_not_gate_return() {
        let mut answers = QuestionnaireAnswers::default();
        answers.income.insert(IncomeKind::None);
        answers.flags.filed_indian_return = TriState::No;
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&indian_tax_return(), &ctx).is_none());
    }

    #[test]
    fn tds_records_fires_for_rental_or_interest_only() {
        let mut answers = QuestionnaireAnswers::default();
        answers.income.insert(IncomeKind::Dividend);
        let ctx = RuleContext::new(&answers, YEAR);
        assert!(run_rule(&tds_certificate_records(), &ctx).is_none());

        answers.income.insert(IncomeKind::Interest);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&tds_certificate_records(), &ctx).expect("should fire");
        assert_eq!(finding.severity, Severity::Info);
        assert!(finding.why_it_applies.contains("interest income"));

        answers.income.insert(IncomeKind::Rental);
        let ctx = RuleContext::new(&answers, YEAR);
        let both = run_rule(&tds_certificate_records(), &ctx).expect("should fire");
        assert!(both.why_it_applies.contains("rental and interest income"));
    }

    #[test]
    fn trc_always_triggered_at_full_weight() {
        let mut answers = QuestionnaireAnswers::default();
        answers.income.insert(IncomeKind::Dividend);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&tax_residency_certificate(), &ctx).expect("should fire");
        assert_eq!(finding.status, FindingStatus::Triggered);
        assert_eq!(finding.weight, weight::RESIDENCY_CERT);
        assert!(!finding.why_it_applies.contains("tie-breaker"));
    }

    #[test]
    fn trc_green_card_dual_residency_caveat() {
        let mut answers = QuestionnaireAnswers {
            us_status: Some(UsStatus::GreenCard),
            ..Default::default()
        };
        answers.income.insert(IncomeKind::Interest);
        let ctx = RuleContext::new(&answers, YEAR);
        let finding = run_rule(&tax_residency_certificate(), &ctx).expect("should fire");
        assert!(finding.why_it_applies.contains("tie-breaker"));
    }
}
