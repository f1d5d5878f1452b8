//! # Questionnaire Answer Model
//!
//! One respondent's situation, exactly as collected: identity and status
//! fields, asset/income membership with optional bucketed amounts, and the
//! fixed list of tri-state compliance flags.
//!
//! ## Invariant
//!
//! Every flag is one of exactly four values — `yes`, `no`, `not_sure`, or
//! `""` (not yet collected). An unanswered flag is treated identically to
//! non-applicability by every rule: it never triggers and never penalizes.
//! A partially-filled questionnaire is therefore always a valid input; the
//! engine must never fail on absence.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::holdings::{AmountBand, AssetKind, IncomeKind};
use crate::states::UsState;
use crate::status::{FilingStatus, UsStatus};

// ---------------------------------------------------------------------------
// TriState
// ---------------------------------------------------------------------------

/// Answer state of a yes/no questionnaire flag.
///
/// `Unanswered` serializes as the empty string — the not-yet-collected
/// sentinel the questionnaire front end submits for untouched questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriState {
    /// Affirmative — the respondent has met this obligation.
    #[serde(rename = "yes")]
    Yes,
    /// Negative — the respondent has not met this obligation.
    #[serde(rename = "no")]
    No,
    /// The respondent does not know.
    #[serde(rename = "not_sure")]
    NotSure,
    /// Not yet collected. Treated identically to non-applicability.
    #[default]
    #[serde(rename = "")]
    Unanswered,
}

impl TriState {
    /// Returns all four answer states.
    pub fn all() -> &'static [TriState] {
        &[Self::Yes, Self::No, Self::NotSure, Self::Unanswered]
    }

    /// Whether this answer affirms compliance (suppresses the rule).
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Whether this answer has been collected at all.
    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    /// Returns the wire string for this answer state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::NotSure => "not_sure",
            Self::Unanswered => "",
        }
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComplianceFlags
// ---------------------------------------------------------------------------

/// The fixed list of yes/no/not-sure/unanswered compliance questions.
///
/// Field order matches the questionnaire's document-and-filing section. Each
/// field defaults to [`TriState::Unanswered`], so `ComplianceFlags::default()`
/// is the untouched form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceFlags {
    /// Holds an Indian PAN card.
    pub has_pan: TriState,
    /// PAN is linked to Aadhaar.
    pub aadhaar_linked: TriState,
    /// Holds an OCI card.
    pub has_oci: TriState,
    /// OCI card updated after the most recent passport renewal.
    pub oci_passport_updated: TriState,
    /// Indian passport surrendered after naturalizing as a US citizen.
    pub surrendered_indian_passport: TriState,
    /// Filed an Indian income-tax return for the last relevant year.
    pub filed_indian_return: TriState,
    /// Filed the FBAR (FinCEN Form 114) foreign-account disclosure.
    pub filed_fbar: TriState,
    /// Filed Form 8938 (FATCA) foreign-asset disclosure.
    pub filed_form_8938: TriState,
    /// Reported Indian mutual fund holdings under the PFIC regime (Form 8621).
    pub reported_pfic: TriState,
    /// Informed Indian banks of NRI status so accounts are reclassified.
    pub reclassified_bank_accounts: TriState,
    /// Converted resident savings accounts to NRO accounts.
    pub converted_to_nro: TriState,
}

// ---------------------------------------------------------------------------
// QuestionnaireAnswers
// ---------------------------------------------------------------------------

/// One respondent's full questionnaire answer set.
///
/// Immutable per evaluation. Every field may be absent/empty; `default()` is
/// the fully-unanswered questionnaire, which must evaluate to a clean score
/// of 100 with no findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    /// Year the respondent left India, as free-form text ("2019").
    /// Unparseable values simply fail the year-based predicates.
    pub departure_year: String,

    /// Current US immigration/citizenship status.
    pub us_status: Option<UsStatus>,

    /// Federal tax filing status.
    pub filing_status: Option<FilingStatus>,

    /// US state of residence.
    pub us_state: Option<UsState>,

    /// Indian asset categories held (membership only).
    pub assets: BTreeSet<AssetKind>,

    /// Bucketed value per asset category; may be absent per asset.
    pub asset_amounts: BTreeMap<AssetKind, AmountBand>,

    /// Indian income categories received (or the `none` sentinel).
    pub income: BTreeSet<IncomeKind>,

    /// Bucketed amount per income category; may be absent per category.
    pub income_amounts: BTreeMap<IncomeKind, AmountBand>,

    /// Document and filing status flags.
    pub flags: ComplianceFlags,
}

impl QuestionnaireAnswers {
    /// Whether the respondent holds the given asset category.
    pub fn holds(&self, kind: AssetKind) -> bool {
        self.assets.contains(&kind)
    }

    /// Whether the respondent holds any of the given asset categories.
    pub fn holds_any(&self, kinds: &[AssetKind]) -> bool {
        kinds.iter().any(|k| self.holds(*k))
    }

    /// The bucketed value for an asset, if the respondent answered it.
    pub fn asset_band(&self, kind: AssetKind) -> Option<AmountBand> {
        self.asset_amounts.get(&kind).copied()
    }

    /// Whether the respondent reported any real Indian income.
    ///
    /// The `none` sentinel does not count; neither does an empty set.
    pub fn has_indian_income(&self) -> bool {
        self.income.iter().any(|k| *k != IncomeKind::None)
    }

    /// Whether the respondent receives a specific income category.
    pub fn receives(&self, kind: IncomeKind) -> bool {
        self.income.contains(&kind)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tristate_default_is_unanswered() {
        assert_eq!(TriState::default(), TriState::Unanswered);
    }

    #[test]
    fn tristate_serde_wire_strings() {
        assert_eq!(serde_json::to_string(&TriState::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&TriState::No).unwrap(), "\"no\"");
        assert_eq!(
            serde_json::to_string(&TriState::NotSure).unwrap(),
            "\"not_sure\""
        );
        assert_eq!(
            serde_json::to_string(&TriState::Unanswered).unwrap(),
            "\"\""
        );
    }

    #[test]
    fn tristate_empty_string_parses_as_unanswered() {
        let parsed: TriState = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, TriState::Unanswered);
    }

    #[test]
    fn tristate_unknown_wire_value_rejected() {
        assert!(serde_json::from_str::<TriState>("\"maybe\"").is_err());
    }

    #[test]
    fn tristate_only_yes_is_affirmative() {
        for state in TriState::all() {
            assert_eq!(state.is_affirmative(), *state == TriState::Yes);
        }
    }

    #[test]
    fn default_answers_are_fully_unanswered() {
        let answers = QuestionnaireAnswers::default();
        assert!(answers.departure_year.is_empty());
        assert!(answers.us_status.is_none());
        assert!(answers.assets.is_empty());
        assert!(!answers.has_indian_income());
        assert_eq!(answers.flags.filed_fbar, TriState::Unanswered);
    }

    #[test]
    fn income_none_sentinel_is_not_real_income() {
        let mut answers = QuestionnaireAnswers::default();
        answers.income.insert(IncomeKind::None);
        assert!(!answers.has_indian_income());

        answers.income.insert(IncomeKind::Rental);
        assert!(answers.has_indian_income());
    }

    #[test]
    fn answers_deserialize_from_partial_json() {
        // A half-filled submission must deserialize cleanly; every missing
        // field takes its default.
        let json = r#"{
            "departure_year": "2021",
            "assets": ["bank_account", "mutual_funds"],
            "flags": { "filed_fbar": "no" }
        }"#;
        let answers: QuestionnaireAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.departure_year, "2021");
        assert!(answers.holds(AssetKind::BankAccount));
        assert!(answers.holds(AssetKind::MutualFunds));
        assert_eq!(answers.flags.filed_fbar, TriState::No);
        assert_eq!(answers.flags.filed_form_8938, TriState::Unanswered);
        assert!(answers.us_state.is_none());
    }

    #[test]
    fn answers_serde_roundtrip() {
        let mut answers = QuestionnaireAnswers {
            departure_year: "2018".to_string(),
            us_status: Some(UsStatus::GreenCard),
            filing_status: Some(FilingStatus::MarriedJoint),
            us_state: Some(UsState::California),
            ..Default::default()
        };
        answers.assets.insert(AssetKind::FixedDeposit);
        answers
            .asset_amounts
            .insert(AssetKind::FixedDeposit, AmountBand::From10kTo50k);
        answers.income.insert(IncomeKind::Interest);
        answers.flags.filed_fbar = TriState::NotSure;

        let json = serde_json::to_string(&answers).unwrap();
        let back: QuestionnaireAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(answers, back);
    }

    #[test]
    fn holds_any_checks_membership() {
        let mut answers = QuestionnaireAnswers::default();
        answers.assets.insert(AssetKind::Ppf);
        assert!(answers.holds_any(&[AssetKind::BankAccount, AssetKind::Ppf]));
        assert!(!answers.holds_any(&[AssetKind::Stocks, AssetKind::Property]));
        assert!(!answers.holds_any(&[]));
    }
}
