//! # Engine Output Contract
//!
//! The types the presentation layer and report service consume: stable rule
//! identifiers, severity and status vocabularies usable directly as display
//! routing keys, the per-rule [`Finding`], and the top-level
//! [`EngineOutput`].
//!
//! ## Invariants
//!
//! - `0 ≤ score ≤ 100`.
//! - `total_penalty_min ≤ total_penalty_max` (summed independently).
//! - Findings are ordered by severity (urgent, warning, info), then by
//!   non-increasing weight within a tier.
//! - A rule that does not apply produces no `Finding` at all — absence, not
//!   presence-with-zero-weight.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use nricheck_core::CoreError;

// ---------------------------------------------------------------------------
// RuleId
// ---------------------------------------------------------------------------

/// Stable machine-readable identifier for each of the nineteen rules.
///
/// A closed enum rather than free-form strings: a typo in a test lookup is a
/// compile error, not a silently-passing "rule not found" false negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// FBAR (FinCEN Form 114) foreign-account disclosure.
    FbarDisclosure,
    /// Form 8938 (FATCA) foreign-asset disclosure.
    #[serde(rename = "form_8938_disclosure")]
    Form8938Disclosure,
    /// Indian income-tax return filing.
    IndianTaxReturn,
    /// PAN–Aadhaar linkage.
    PanAadhaarLink,
    /// Resident savings account conversion to NRO.
    NroConversion,
    /// OCI card update after passport renewal.
    OciPassportUpdate,
    /// Aadhaar biometric refresh after a decade abroad.
    AadhaarBiometricRefresh,
    /// TDS withholding-certificate (Form 16A) recordkeeping.
    TdsCertificateRecords,
    /// Repatriation documentation (Form 15CA/15CB) readiness.
    RepatriationDocs,
    /// PFIC reporting (Form 8621) for Indian mutual funds.
    PficReporting,
    /// Tax residency certificate / Form 10F for treaty relief.
    TaxResidencyCertificate,
    /// Indian property tax and reporting.
    PropertyTaxReporting,
    /// Bank account reclassification to nonresident status.
    BankAccountReclassification,
    /// EPF/PPF/NPS nonresident restrictions.
    RetirementFundRestrictions,
    /// Indian insurance policy (ULIP/endowment) compliance.
    InsurancePolicyCompliance,
    /// Indian passport surrender after naturalization.
    PassportSurrender,
    /// Non-conforming state taxes foreign income already taxed federally.
    StateForeignIncomeGap,
    /// State offers no credit for Indian tax paid.
    StateForeignTaxCreditGap,
    /// California tax on high-value Indian capital gains.
    CaliforniaCapitalGains,
}

/// Total number of rules. Used for exhaustiveness assertions.
pub const RULE_COUNT: usize = 19;

impl RuleId {
    /// Returns all rule identifiers in canonical order.
    pub fn all() -> &'static [RuleId] {
        &[
            Self::FbarDisclosure,
            Self::Form8938Disclosure,
            Self::IndianTaxReturn,
            Self::PanAadhaarLink,
            Self::NroConversion,
            Self::OciPassportUpdate,
            Self::AadhaarBiometricRefresh,
            Self::TdsCertificateRecords,
            Self::RepatriationDocs,
            Self::PficReporting,
            Self::TaxResidencyCertificate,
            Self::PropertyTaxReporting,
            Self::BankAccountReclassification,
            Self::RetirementFundRestrictions,
            Self::InsurancePolicyCompliance,
            Self::PassportSurrender,
            Self::StateForeignIncomeGap,
            Self::StateForeignTaxCreditGap,
            Self::CaliforniaCapitalGains,
        ]
    }

    /// Returns the snake_case string identifier for this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FbarDisclosure => "fbar_disclosure",
            Self::Form8938Disclosure => "form_8938_disclosure",
            Self::IndianTaxReturn => "indian_tax_return",
            Self::PanAadhaarLink => "pan_aadhaar_link",
            Self::NroConversion => "nro_conversion",
            Self::OciPassportUpdate => "oci_passport_update",
            Self::AadhaarBiometricRefresh => "aadhaar_biometric_refresh",
            Self::TdsCertificateRecords => "tds_certificate_records",
            Self::RepatriationDocs => "repatriation_docs",
            Self::PficReporting => "pfic_reporting",
            Self::TaxResidencyCertificate => "tax_residency_certificate",
            Self::PropertyTaxReporting => "property_tax_reporting",
            Self::BankAccountReclassification => "bank_account_reclassification",
            Self::RetirementFundRestrictions => "retirement_fund_restrictions",
            Self::InsurancePolicyCompliance => "insurance_policy_compliance",
            Self::PassportSurrender => "passport_surrender",
            Self::StateForeignIncomeGap => "state_foreign_income_gap",
            Self::StateForeignTaxCreditGap => "state_foreign_tax_credit_gap",
            Self::CaliforniaCapitalGains => "california_capital_gains",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::all()
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| CoreError::unknown("rule id", s))
    }
}

// ---------------------------------------------------------------------------
// Severity & FindingStatus
// ---------------------------------------------------------------------------

/// Display severity of a finding. The wire strings are stable routing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Action needed now; material penalty exposure.
    Urgent,
    /// Should be resolved this filing season.
    Warning,
    /// Good to know; recommendation rather than obligation.
    Info,
}

impl Severity {
    /// Sort rank: urgent first. Lower is more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }

    /// Returns the wire string for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution status of a finding.
///
/// `Clear` belongs to the wire vocabulary for the presentation layer but is
/// never produced by the engine: a rule that did not fire is absent from the
/// output entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    /// The obligation applies and is unmet.
    Triggered,
    /// The obligation likely applies but the respondent is unsure; verify.
    NeedsReview,
    /// The obligation is satisfied (reserved; non-firing rules are absent).
    Clear,
}

impl FindingStatus {
    /// Returns the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Triggered => "triggered",
            Self::NeedsReview => "needs_review",
            Self::Clear => "clear",
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RemediationEffort
// ---------------------------------------------------------------------------

/// How hard a remediation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Self-service, online, under an hour.
    Easy,
    /// Some paperwork or a branch visit.
    Moderate,
    /// Professional help advisable.
    Involved,
}

impl Difficulty {
    /// Returns the wire string for this difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Involved => "involved",
        }
    }
}

/// The three remediation-effort tags attached to every finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationEffort {
    /// How hard the fix is.
    pub difficulty: Difficulty,
    /// Rough wall-clock estimate ("1–2 weeks").
    pub time_estimate: String,
    /// Rough out-of-pocket estimate ("$0 (self-service)").
    pub cost_estimate: String,
}

// ---------------------------------------------------------------------------
// Finding & EngineOutput
// ---------------------------------------------------------------------------

/// One triggered compliance obligation.
///
/// Produced fresh per evaluation, never mutated afterwards, and never
/// persisted as an independent entity — it lives only inside an
/// [`EngineOutput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable machine-readable rule identifier.
    pub rule: RuleId,
    /// Human-readable name, possibly parameterized with the respondent's state.
    pub name: String,
    /// Display severity.
    pub severity: Severity,
    /// Triggered vs. needs-review.
    pub status: FindingStatus,
    /// Non-negative score deduction (already damped for uncertain answers).
    pub weight: f64,
    /// Minimum penalty estimate, whole USD. May be 0.
    pub penalty_min: u64,
    /// Maximum penalty estimate, whole USD. Always ≥ `penalty_min`.
    pub penalty_max: u64,
    /// What the obligation is.
    pub obligation: String,
    /// Why it applies to this respondent specifically.
    pub why_it_applies: String,
    /// What happens if it stays unresolved.
    pub consequence: String,
    /// Ordered remediation steps.
    pub remediation: Vec<String>,
    /// Difficulty / time / cost tags.
    pub effort: RemediationEffort,
}

/// The engine's return value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    /// Compliance score, 0–100 inclusive.
    pub score: u8,
    /// Sum of per-finding minimum penalty estimates.
    pub total_penalty_min: u64,
    /// Sum of per-finding maximum penalty estimates.
    pub total_penalty_max: u64,
    /// Findings ordered by severity rank, then descending weight.
    pub findings: Vec<Finding>,
}

impl EngineOutput {
    /// Look up a finding by rule identifier.
    pub fn finding(&self, rule: RuleId) -> Option<&Finding> {
        self.findings.iter().find(|f| f.rule == rule)
    }

    /// Whether the given rule fired.
    pub fn has_finding(&self, rule: RuleId) -> bool {
        self.finding(rule).is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
