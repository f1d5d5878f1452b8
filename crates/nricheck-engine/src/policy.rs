//! # Policy Constants — Calibration, Not Physics
//!
//! Every business-policy magic number in the engine lives here: per-rule
//! weights, the uncertainty damping factor, penalty estimate ranges,
//! threshold bands and their count-based fallbacks, the state lists, and
//! the year horizons. Rule logic never inlines one of these; tuning a
//! weight or adding a state to a list must never touch a rule function.
//!
//! The values are calibrated by inspection against the product's scoring
//! behavior. They have no derivation; treat them as configuration.

use nricheck_core::{AmountBand, AssetKind, UsState};

/// Weight multiplier applied when a compliance flag is answered `not_sure`.
///
/// Uncertainty is weighted below certainty of non-compliance: replacing a
/// `no` with `not_sure` must never lower the score.
pub const NOT_SURE_DAMPING: f64 = 0.7;

/// Departure years before this are treated as unparseable noise.
pub const DEPARTURE_YEAR_MIN: i32 = 1950;

/// "First year in the US" horizon: at most this many full years since
/// departure, combined with a temporary visa status, attaches the
/// residency-test caveat.
pub const FIRST_YEAR_HORIZON: i32 = 1;

/// Years abroad after which an unused Aadhaar's biometrics are presumed
/// stale enough to recommend a refresh.
pub const AADHAAR_DORMANCY_YEARS: i32 = 10;

// ---------------------------------------------------------------------------
// Per-rule base weights (score points deducted; observed range 3–20)
// ---------------------------------------------------------------------------

/// Base score weights per rule, before uncertainty damping.
pub mod weight {
    pub const FBAR: f64 = 20.0;
    pub const FORM_8938: f64 = 15.0;
    pub const INDIAN_RETURN: f64 = 12.0;
    pub const PAN_AADHAAR: f64 = 8.0;
    pub const NRO_CONVERSION: f64 = 10.0;
    pub const OCI_UPDATE: f64 = 6.0;
    pub const AADHAAR_REFRESH: f64 = 3.0;
    pub const TDS_RECORDS: f64 = 3.0;
    pub const REPATRIATION: f64 = 5.0;
    /// The PFIC regime never releases a permanent resident or citizen.
    pub const PFIC_PERMANENT: f64 = 18.0;
    /// For visa holders the exposure ends with US tax residency.
    pub const PFIC_TEMPORARY: f64 = 12.0;
    pub const RESIDENCY_CERT: f64 = 7.0;
    pub const PROPERTY: f64 = 4.0;
    pub const BANK_RECLASSIFY: f64 = 7.0;
    pub const RETIREMENT_FUNDS: f64 = 4.0;
    pub const INSURANCE: f64 = 9.0;
    pub const PASSPORT_SURRENDER: f64 = 8.0;
    pub const STATE_FOREIGN_INCOME: f64 = 8.0;
    pub const STATE_FTC: f64 = 6.0;
    pub const CALIFORNIA_GAINS: f64 = 7.0;
}

// ---------------------------------------------------------------------------
// Per-rule penalty estimates (whole USD, min ≤ max)
// ---------------------------------------------------------------------------

/// Penalty exposure estimates per rule, `(min, max)` in whole US dollars.
pub mod penalty {
    pub const FBAR: (u64, u64) = (10_000, 250_000);
    pub const FORM_8938: (u64, u64) = (10_000, 60_000);
    pub const INDIAN_RETURN: (u64, u64) = (100, 1_200);
    pub const PAN_AADHAAR: (u64, u64) = (12, 12);
    pub const NRO_CONVERSION: (u64, u64) = (0, 25_000);
    pub const OCI_UPDATE: (u64, u64) = (0, 0);
    pub const AADHAAR_REFRESH: (u64, u64) = (0, 0);
    pub const TDS_RECORDS: (u64, u64) = (0, 0);
    pub const REPATRIATION: (u64, u64) = (0, 5_000);
    pub const PFIC: (u64, u64) = (10_000, 25_000);
    pub const RESIDENCY_CERT: (u64, u64) = (0, 2_000);
    pub const PROPERTY: (u64, u64) = (0, 0);
    pub const BANK_RECLASSIFY: (u64, u64) = (0, 10_000);
    pub const RETIREMENT_FUNDS: (u64, u64) = (0, 0);
    pub const INSURANCE: (u64, u64) = (0, 5_000);
    pub const PASSPORT_SURRENDER: (u64, u64) = (100, 600);
    pub const STATE_FOREIGN_INCOME: (u64, u64) = (500, 5_000);
    pub const STATE_FTC: (u64, u64) = (300, 3_000);
    pub const CALIFORNIA_GAINS: (u64, u64) = (1_000, 10_000);
}

// ---------------------------------------------------------------------------
// Threshold heuristics
// ---------------------------------------------------------------------------

/// Account kinds that count toward the FBAR $10,000 aggregate.
pub const FBAR_ACCOUNT_KINDS: &[AssetKind] = &[
    AssetKind::BankAccount,
    AssetKind::FixedDeposit,
    AssetKind::Ppf,
    AssetKind::Epf,
];

/// Explicit band at or above which an account is likely over the FBAR
/// aggregate threshold.
pub const FBAR_BAND_FLOOR: AmountBand = AmountBand::From10kTo50k;

/// Conservative fallback: holding at least this many FBAR-reportable account
/// kinds is presumed to cross the aggregate threshold even without an
/// explicit amount answer.
pub const FBAR_FALLBACK_ACCOUNT_COUNT: usize = 2;

/// Specified foreign financial assets for Form 8938 (real property held
/// directly is not one).
pub const FORM_8938_ASSET_KINDS: &[AssetKind] = &[
    AssetKind::BankAccount,
    AssetKind::FixedDeposit,
    AssetKind::MutualFunds,
    AssetKind::Stocks,
    AssetKind::Insurance,
    AssetKind::Epf,
    AssetKind::Ppf,
    AssetKind::Nps,
];

/// Form 8938 band floor for non-joint filers ($50k year-end threshold).
pub const FORM_8938_BAND_FLOOR_SINGLE: AmountBand = AmountBand::From50kTo100k;

/// Form 8938 band floor for joint filers (doubled threshold).
pub const FORM_8938_BAND_FLOOR_JOINT: AmountBand = AmountBand::From100kTo250k;

/// Fallback: at least this many specified asset kinds held is presumed to
/// cross the Form 8938 threshold without explicit amounts.
pub const FORM_8938_FALLBACK_ASSET_COUNT: usize = 3;

/// Repatriation readiness: any single asset at or above this band, or asset
/// diversity at [`REPATRIATION_FALLBACK_ASSET_COUNT`], makes 15CA/15CB
/// paperwork worth preparing now.
pub const REPATRIATION_BAND_FLOOR: AmountBand = AmountBand::From50kTo100k;

/// Repatriation diversity fallback (distinct asset categories held).
pub const REPATRIATION_FALLBACK_ASSET_COUNT: usize = 4;

/// Band at or above which tradeable holdings expose material California
/// capital-gains tax.
pub const CALIFORNIA_GAINS_BAND_FLOOR: AmountBand = AmountBand::From50kTo100k;

// ---------------------------------------------------------------------------
// State lists
// ---------------------------------------------------------------------------

/// States that do not conform to federal treatment of foreign income: income
/// excluded or credited federally is still fully taxable on the state return.
pub const NON_CONFORMING_STATES: &[UsState] = &[
    UsState::California,
    UsState::NewJersey,
    UsState::Pennsylvania,
];

/// States whose returns allow no (or a severely limited) credit for income
/// tax paid to a foreign country.
pub const LIMITED_FTC_STATES: &[UsState] = &[UsState::Alabama, UsState::Hawaii, UsState::Kansas];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
