//! State-level rules: non-conformity with federal foreign-income treatment,
//! missing state foreign tax credits, and California's taxation of
//! worldwide capital gains.
//!
//! All three interpolate the respondent's state into the finding name so
//! the report reads as advice about their return, not a generic warning.

use nricheck_core::{AssetKind, UsState};

use crate::output::{Difficulty, FindingStatus, RuleId, Severity};
use crate::policy::{self, penalty, weight};
use crate::predicates::RuleContext;
use crate::rules::{effort, RuleContent, RuleDef};

fn in_state_list(ctx: &RuleContext<'_>, list: &[UsState]) -> bool {
    ctx.answers.us_state.is_some_and(|state| list.contains(&state))
}

fn state_name(ctx: &RuleContext<'_>) -> &'static str {
    ctx.answers
        .us_state
        .map(|state| state.display_name())
        .unwrap_or("your state")
}

/// Some states do not conform to the federal treatment of foreign income:
/// exclusions and treaty positions honored on the federal return vanish on
/// the state one.
pub(super) fn foreign_income_gap() -> RuleDef {
    RuleDef {
        id: RuleId::StateForeignIncomeGap,
        severity: Severity::Warning,
        applies: |ctx| {
            in_state_list(ctx, policy::NON_CONFORMING_STATES) && ctx.answers.has_indian_income()
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::STATE_FOREIGN_INCOME,
        penalty: |_| penalty::STATE_FOREIGN_INCOME,
        content: |ctx| {
            let state = state_name(ctx);
            RuleContent {
                name: format!("Report Indian income on your {state} return"),
                obligation: format!(
                    "{state} does not conform to federal treatment of foreign income: \
                     amounts excluded or treaty-protected federally are still fully \
                     taxable on the {state} return."
                ),
                why_it_applies: format!(
                    "You live in {state} and receive Indian-source income. Taxpayers \
                     routinely copy the federal treatment onto the state return and \
                     understate {state} income as a result."
                ),
                consequence: "State tax assessments with interest and accuracy \
                              penalties, typically surfacing years later when the \
                              state matches against federal data."
                    .to_string(),
                remediation: vec![
                    format!(
                        "Add back Indian income excluded federally when preparing the \
                         {state} return."
                    ),
                    "Have a preparer familiar with your state's conformity rules \
                     review the last filed return."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "1–2 weeks", "$100–$400 preparer fees"),
            }
        },
    }
}

/// A few states allow no credit for income tax paid to a foreign country,
/// so Indian TDS does not offset the state bill.
pub(super) fn foreign_tax_credit_gap() -> RuleDef {
    RuleDef {
        id: RuleId::StateForeignTaxCreditGap,
        severity: Severity::Warning,
        applies: |ctx| {
            in_state_list(ctx, policy::LIMITED_FTC_STATES) && ctx.answers.has_indian_income()
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::STATE_FTC,
        penalty: |_| penalty::STATE_FTC,
        content: |ctx| {
            let state = state_name(ctx);
            RuleContent {
                name: format!("Plan for {state}'s limited foreign tax credit"),
                obligation: format!(
                    "{state} offers no meaningful credit for income tax paid to a \
                     foreign country, so Indian tax withheld does not reduce the \
                     {state} liability the way it reduces the federal one."
                ),
                why_it_applies: format!(
                    "You live in {state} and pay Indian tax on Indian-source income. \
                     Budgeting as if the federal foreign tax credit carried through \
                     understates what {state} will collect."
                ),
                consequence: "Genuine double taxation at the state level plus \
                              underpayment penalties if estimated payments assumed a \
                              credit that does not exist."
                    .to_string(),
                remediation: vec![
                    format!(
                        "Compute the {state} liability on Indian income with no \
                         foreign credit and adjust estimated payments."
                    ),
                    "Consider timing income recognition around residency changes \
                     where possible."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "1 week", "$100–$300 preparer fees"),
            }
        },
    }
}

/// California taxes residents' worldwide capital gains at ordinary rates,
/// with no preferential long-term rate and no foreign tax credit.
pub(super) fn california_capital_gains() -> RuleDef {
    RuleDef {
        id: RuleId::CaliforniaCapitalGains,
        severity: Severity::Warning,
        applies: |ctx| {
            ctx.answers.us_state == Some(UsState::California)
                && tradeable_band_material(ctx)
        },
        flag: None,
        flagless_status: FindingStatus::Triggered,
        weight: |_| weight::CALIFORNIA_GAINS,
        penalty: |_| penalty::CALIFORNIA_GAINS,
        content: |ctx| {
            let holdings = match (
                ctx.answers.holds(AssetKind::Stocks),
                ctx.answers.holds(AssetKind::MutualFunds),
            ) {
                (true, true) => "Indian stocks and mutual funds",
                (true, false) => "Indian stocks",
                _ => "Indian mutual funds",
            };
            RuleContent {
                name: "Expect California tax on Indian investment gains".to_string(),
                obligation: "California taxes residents' worldwide capital gains as \
                             ordinary income (up to 13.3%), with no long-term rate \
                             and no credit for Indian tax paid on the same gains."
                    .to_string(),
                why_it_applies: format!(
                    "You live in California and hold {holdings} at values where a \
                     sale produces a material state tax bill on top of Indian and \
                     federal tax."
                ),
                consequence: "An unbudgeted state bill of up to 13.3% of the gain, \
                              plus estimated-payment penalties, on top of Indian \
                              capital-gains tax with no offsetting credit."
                    .to_string(),
                remediation: vec![
                    "Model the combined Indian + federal + California tax before \
                     selling appreciated holdings."
                        .to_string(),
                    "If a move out of California is planned, the sale's timing \
                     relative to residency change matters greatly — get advice first."
                        .to_string(),
                ],
                effort: effort(Difficulty::Moderate, "1–2 weeks", "$200–$500 advisory fees"),
            }
        },
    }
}

/// Stocks or mutual funds held at a band where sale proceeds produce a
/// material California gains bill.
fn tradeable_band_material(ctx: &RuleContext<'_>) -> bool {
    [AssetKind::Stocks, AssetKind::MutualFunds].iter().any(|k| {
        ctx.answers.holds(*k)
            && ctx
                .answers
                .asset_band(*k)
                .is_some_and(|band| band >= policy::CALIFORNIA_GAINS_BAND_FLOOR)
    })
}
