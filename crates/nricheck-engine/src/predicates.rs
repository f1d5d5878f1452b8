//! # Rule Predicate Library
//!
//! Shared boolean and threshold helpers evaluated against one answer set.
//! Rules compose these in their applicability gates; none of them reads a
//! compliance flag (flag gates belong to the driver) and none has side
//! effects.
//!
//! The "likely above threshold" helpers combine explicit bucketed amounts
//! with count-based fallbacks. The fallbacks are an intentional
//! conservative-triggering policy: a respondent holding several qualifying
//! account types almost certainly crosses the aggregate threshold even if
//! they never answered an amount question. The exact counts and asset lists
//! are policy constants — do not generalize them.

use nricheck_core::{AmountBand, AssetKind, QuestionnaireAnswers, UsStatus};

use crate::policy;

/// Everything a rule may inspect: the answers plus the evaluation year.
///
/// The year is an explicit input so evaluation is deterministic; the driver
/// fills it in once per run.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The respondent's answers.
    pub answers: &'a QuestionnaireAnswers,
    /// Calendar year the evaluation is relative to.
    pub evaluation_year: i32,
}

impl<'a> RuleContext<'a> {
    /// Build a context for the given answers and year.
    pub fn new(answers: &'a QuestionnaireAnswers, evaluation_year: i32) -> Self {
        Self {
            answers,
            evaluation_year,
        }
    }

    /// Full years since the respondent left India.
    ///
    /// `None` when the free-form year field is empty, unparseable, earlier
    /// than [`policy::DEPARTURE_YEAR_MIN`], or in the future — year-based
    /// rules then simply do not apply.
    pub fn years_since_departure(&self) -> Option<i32> {
        let year: i32 = self.answers.departure_year.trim().parse().ok()?;
        if year < policy::DEPARTURE_YEAR_MIN || year > self.evaluation_year {
            return None;
        }
        Some(self.evaluation_year - year)
    }

    /// First-year heuristic: recently departed on a temporary visa.
    ///
    /// Such respondents may not yet meet the substantial presence test, so
    /// disclosure rules attach a residency-test timing caveat.
    pub fn is_first_year_arrival(&self) -> bool {
        let recent = matches!(
            self.years_since_departure(),
            Some(years) if years <= policy::FIRST_YEAR_HORIZON
        );
        recent
            && self
                .answers
                .us_status
                .is_some_and(|status| status.is_temporary_visa())
    }

    /// Whether the respondent's status is permanent (green card or citizen).
    pub fn has_permanent_status(&self) -> bool {
        self.answers
            .us_status
            .is_some_and(|status| status.is_permanent())
    }

    /// Whether the respondent holds any FBAR-reportable account kind.
    pub fn holds_reportable_account(&self) -> bool {
        self.answers.holds_any(policy::FBAR_ACCOUNT_KINDS)
    }

    /// Count of distinct kinds held from the given list.
    fn held_count(&self, kinds: &[AssetKind]) -> usize {
        kinds.iter().filter(|k| self.answers.holds(**k)).count()
    }

    /// Whether any held asset from `kinds` has an explicit band at or above
    /// `floor`.
    fn any_band_at_least(&self, kinds: &[AssetKind], floor: AmountBand) -> bool {
        kinds.iter().any(|k| {
            self.answers.holds(*k)
                && self
                    .answers
                    .asset_band(*k)
                    .is_some_and(|band| band >= floor)
        })
    }

    /// Whether the combined reportable-account balance is likely above the
    /// FBAR $10,000 aggregate.
    ///
    /// Explicit band at/above the floor wins; otherwise holding two or more
    /// reportable account kinds is presumed to cross it.
    pub fn likely_above_fbar_threshold(&self) -> bool {
        self.any_band_at_least(policy::FBAR_ACCOUNT_KINDS, policy::FBAR_BAND_FLOOR)
            || self.held_count(policy::FBAR_ACCOUNT_KINDS) >= policy::FBAR_FALLBACK_ACCOUNT_COUNT
    }

    /// Whether specified foreign assets are likely above the Form 8938
    /// threshold, which doubles for joint filers.
    pub fn likely_above_form_8938_threshold(&self) -> bool {
        let joint = self
            .answers
            .filing_status
            .is_some_and(|status| status.is_joint());
        let floor = if joint {
            policy::FORM_8938_BAND_FLOOR_JOINT
        } else {
            policy::FORM_8938_BAND_FLOOR_SINGLE
        };
        self.any_band_at_least(policy::FORM_8938_ASSET_KINDS, floor)
            || self.held_count(policy::FORM_8938_ASSET_KINDS)
                >= policy::FORM_8938_FALLBACK_ASSET_COUNT
    }

    /// Whether asset value or diversity makes repatriation paperwork worth
    /// preparing now.
    pub fn repatriation_ready(&self) -> bool {
        let all_kinds = AssetKind::all();
        self.any_band_at_least(all_kinds, policy::REPATRIATION_BAND_FLOOR)
            || self.answers.assets.len() >= policy::REPATRIATION_FALLBACK_ASSET_COUNT
    }

    /// Whether the respondent has any Indian footprint at all (income or
    /// assets) — the gate for the Indian return rule.
    pub fn has_indian_footprint(&self) -> bool {
        self.answers.has_indian_income() || !self.answers.assets.is_empty()
    }

    /// The respondent's status, for weight/narrative variation.
    pub fn status(&self) -> Option<UsStatus> {
        self.answers.us_status
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
