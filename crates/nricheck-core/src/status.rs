//! # Status Taxonomies — Immigration & Filing Status
//!
//! The respondent's current US immigration/citizenship status and federal
//! tax filing status. Both are optional in the questionnaire; rules that
//! depend on them treat an unset status as "condition not met".
//!
//! Several obligations weigh differently for permanent statuses (green card,
//! citizenship) than for temporary visas — a permanent resident's worldwide
//! reporting duties do not lapse when they leave the US, a visa holder's do.
//! The `is_permanent`/`is_temporary_visa` helpers are the single place that
//! classification lives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// UsStatus
// ---------------------------------------------------------------------------

/// Current US immigration or citizenship status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsStatus {
    /// H-1B specialty-occupation visa.
    H1bVisa,
    /// L-1 intracompany-transfer visa.
    L1Visa,
    /// F-1/OPT student status.
    StudentVisa,
    /// Any other nonimmigrant visa category.
    OtherVisa,
    /// Lawful permanent resident (green card).
    GreenCard,
    /// Naturalized or born US citizen.
    Citizen,
}

impl UsStatus {
    /// Returns all statuses in canonical order.
    pub fn all() -> &'static [UsStatus] {
        &[
            Self::H1bVisa,
            Self::L1Visa,
            Self::StudentVisa,
            Self::OtherVisa,
            Self::GreenCard,
            Self::Citizen,
        ]
    }

    /// Permanent statuses: the US tax net does not release these on departure.
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::GreenCard | Self::Citizen)
    }

    /// Temporary nonimmigrant visa statuses.
    pub fn is_temporary_visa(&self) -> bool {
        !self.is_permanent()
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1bVisa => "h1b_visa",
            Self::L1Visa => "l1_visa",
            Self::StudentVisa => "student_visa",
            Self::OtherVisa => "other_visa",
            Self::GreenCard => "green_card",
            Self::Citizen => "citizen",
        }
    }

    /// Human-readable label for narrative interpolation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::H1bVisa => "H-1B visa holder",
            Self::L1Visa => "L-1 visa holder",
            Self::StudentVisa => "student visa holder",
            Self::OtherVisa => "nonimmigrant visa holder",
            Self::GreenCard => "green card holder",
            Self::Citizen => "US citizen",
        }
    }
}

impl std::fmt::Display for UsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1b_visa" => Ok(Self::H1bVisa),
            "l1_visa" => Ok(Self::L1Visa),
            "student_visa" => Ok(Self::StudentVisa),
            "other_visa" => Ok(Self::OtherVisa),
            "green_card" => Ok(Self::GreenCard),
            "citizen" => Ok(Self::Citizen),
            other => Err(CoreError::unknown("us status", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// FilingStatus
// ---------------------------------------------------------------------------

/// Federal tax filing status.
///
/// Only the joint/non-joint distinction carries policy weight (the foreign
/// asset disclosure threshold doubles for joint filers), but the full
/// vocabulary is kept so the questionnaire round-trips without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer.
    Single,
    /// Married filing jointly.
    MarriedJoint,
    /// Married filing separately.
    MarriedSeparate,
    /// Head of household.
    HeadOfHousehold,
}

impl FilingStatus {
    /// Returns all filing statuses in canonical order.
    pub fn all() -> &'static [FilingStatus] {
        &[
            Self::Single,
            Self::MarriedJoint,
            Self::MarriedSeparate,
            Self::HeadOfHousehold,
        ]
    }

    /// Joint filers get doubled disclosure thresholds.
    pub fn is_joint(&self) -> bool {
        matches!(self, Self::MarriedJoint)
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedJoint => "married_joint",
            Self::MarriedSeparate => "married_separate",
            Self::HeadOfHousehold => "head_of_household",
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "married_joint" => Ok(Self::MarriedJoint),
            "married_separate" => Ok(Self::MarriedSeparate),
            "head_of_household" => Ok(Self::HeadOfHousehold),
            other => Err(CoreError::unknown("filing status", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
