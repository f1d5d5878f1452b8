//! # Holdings — Asset Kinds, Income Kinds, Amount Bands
//!
//! The closed taxonomies describing what a respondent holds in India and
//! what Indian income they receive, plus the ordinal amount bands the
//! questionnaire collects instead of exact figures.
//!
//! Membership is collected separately from amounts: a respondent may tick
//! "mutual funds" without ever answering the amount question, so every
//! amount lookup in the engine is a partial-map lookup with a conservative
//! fallback.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// AssetKind
// ---------------------------------------------------------------------------

/// A category of Indian asset the respondent may hold.
///
/// Categories are membership-only: holding one is a boolean fact, and any
/// associated value is a separate, optional [`AmountBand`] answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Savings or current account with an Indian bank (resident, NRE, or NRO).
    BankAccount,
    /// Bank or company fixed deposit.
    FixedDeposit,
    /// Indian mutual fund units.
    MutualFunds,
    /// Directly-held shares on Indian exchanges.
    Stocks,
    /// Real property (house, flat, plot, inherited land).
    Property,
    /// Life insurance, ULIP, or endowment policy.
    Insurance,
    /// Employees' Provident Fund balance.
    Epf,
    /// Public Provident Fund account.
    Ppf,
    /// National Pension System account.
    Nps,
}

/// Total number of asset categories. Used for exhaustiveness assertions.
pub const ASSET_KIND_COUNT: usize = 9;

impl AssetKind {
    /// Returns all asset kinds in canonical order.
    pub fn all() -> &'static [AssetKind] {
        &[
            Self::BankAccount,
            Self::FixedDeposit,
            Self::MutualFunds,
            Self::Stocks,
            Self::Property,
            Self::Insurance,
            Self::Epf,
            Self::Ppf,
            Self::Nps,
        ]
    }

    /// Returns the snake_case string identifier for this asset kind.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankAccount => "bank_account",
            Self::FixedDeposit => "fixed_deposit",
            Self::MutualFunds => "mutual_funds",
            Self::Stocks => "stocks",
            Self::Property => "property",
            Self::Insurance => "insurance",
            Self::Epf => "epf",
            Self::Ppf => "ppf",
            Self::Nps => "nps",
        }
    }

    /// Human-readable label for narrative interpolation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BankAccount => "bank accounts",
            Self::FixedDeposit => "fixed deposits",
            Self::MutualFunds => "mutual funds",
            Self::Stocks => "listed shares",
            Self::Property => "real property",
            Self::Insurance => "insurance policies",
            Self::Epf => "EPF balance",
            Self::Ppf => "PPF account",
            Self::Nps => "NPS account",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank_account" => Ok(Self::BankAccount),
            "fixed_deposit" => Ok(Self::FixedDeposit),
            "mutual_funds" => Ok(Self::MutualFunds),
            "stocks" => Ok(Self::Stocks),
            "property" => Ok(Self::Property),
            "insurance" => Ok(Self::Insurance),
            "epf" => Ok(Self::Epf),
            "ppf" => Ok(Self::Ppf),
            "nps" => Ok(Self::Nps),
            other => Err(CoreError::unknown("asset kind", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// IncomeKind
// ---------------------------------------------------------------------------

/// A category of Indian-source income, or the explicit "no income" sentinel.
///
/// The sentinel lets the questionnaire distinguish "answered: no income"
/// from "not yet answered" (an empty set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeKind {
    /// Rent from Indian property.
    Rental,
    /// Interest on deposits and savings.
    Interest,
    /// Dividends from Indian shares or funds.
    Dividend,
    /// Capital gains on Indian asset sales.
    CapitalGains,
    /// Business or professional income from India.
    Business,
    /// Explicit "no Indian income" answer.
    None,
}

impl IncomeKind {
    /// Returns all income kinds in canonical order, sentinel last.
    pub fn all() -> &'static [IncomeKind] {
        &[
            Self::Rental,
            Self::Interest,
            Self::Dividend,
            Self::CapitalGains,
            Self::Business,
            Self::None,
        ]
    }

    /// Returns the snake_case string identifier for this income kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rental => "rental",
            Self::Interest => "interest",
            Self::Dividend => "dividend",
            Self::CapitalGains => "capital_gains",
            Self::Business => "business",
            Self::None => "none",
        }
    }

    /// Human-readable label for narrative interpolation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rental => "rental income",
            Self::Interest => "interest income",
            Self::Dividend => "dividend income",
            Self::CapitalGains => "capital gains",
            Self::Business => "business income",
            Self::None => "no Indian income",
        }
    }
}

impl std::fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rental" => Ok(Self::Rental),
            "interest" => Ok(Self::Interest),
            "dividend" => Ok(Self::Dividend),
            "capital_gains" => Ok(Self::CapitalGains),
            "business" => Ok(Self::Business),
            "none" => Ok(Self::None),
            other => Err(CoreError::unknown("income kind", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// AmountBand
// ---------------------------------------------------------------------------

/// Bucketed USD-equivalent value range for an asset or income category.
///
/// Bands are ordinal: `UpTo10k < From10kTo50k < ... < Above250k`. The derive
/// order of the variants IS the ordering — threshold comparisons in the
/// engine rely on `Ord`, so variants must stay listed low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountBand {
    /// Under $10,000.
    #[serde(rename = "up_to_10k")]
    UpTo10k,
    /// $10,000 – $50,000.
    #[serde(rename = "from_10k_to_50k")]
    From10kTo50k,
    /// $50,000 – $100,000.
    #[serde(rename = "from_50k_to_100k")]
    From50kTo100k,
    /// $100,000 – $250,000.
    #[serde(rename = "from_100k_to_250k")]
    From100kTo250k,
    /// Over $250,000.
    #[serde(rename = "above_250k")]
    Above250k,
}

impl AmountBand {
    /// Returns all bands, lowest to highest.
    pub fn all() -> &'static [AmountBand] {
        &[
            Self::UpTo10k,
            Self::From10kTo50k,
            Self::From50kTo100k,
            Self::From100kTo250k,
            Self::Above250k,
        ]
    }

    /// The highest band. Used by tests building worst-case questionnaires.
    pub fn max() -> AmountBand {
        Self::Above250k
    }

    /// Returns the snake_case string identifier for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo10k => "up_to_10k",
            Self::From10kTo50k => "from_10k_to_50k",
            Self::From50kTo100k => "from_50k_to_100k",
            Self::From100kTo250k => "from_100k_to_250k",
            Self::Above250k => "above_250k",
        }
    }

    /// Human-readable range label for narrative interpolation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UpTo10k => "under $10,000",
            Self::From10kTo50k => "$10,000–$50,000",
            Self::From50kTo100k => "$50,000–$100,000",
            Self::From100kTo250k => "$100,000–$250,000",
            Self::Above250k => "over $250,000",
        }
    }
}

impl std::fmt::Display for AmountBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up_to_10k" => Ok(Self::UpTo10k),
            "from_10k_to_50k" => Ok(Self::From10kTo50k),
            "from_50k_to_100k" => Ok(Self::From50kTo100k),
            "from_100k_to_250k" => Ok(Self::From100kTo250k),
            "above_250k" => Ok(Self::Above250k),
            other => Err(CoreError::unknown("amount band", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
