//! # US State — Single Source of Truth
//!
//! Defines the `UsState` enum covering all 50 states plus the District of
//! Columbia. This is the ONE definition used across the stack; state-specific
//! tax rules in the engine match on it exhaustively or against closed policy
//! lists, so a typo in a state identifier is a compile error, not a silently
//! non-matching string.
//!
//! The income-tax classification lives here (it is a fact about the state,
//! not engine policy); which states fail to conform to federal foreign-income
//! treatment is engine policy and lives with the engine's other constants.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// A US state or the District of Columbia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsState {
    Alabama,
    Alaska,
    Arizona,
    Arkansas,
    California,
    Colorado,
    Connecticut,
    Delaware,
    DistrictOfColumbia,
    Florida,
    Georgia,
    Hawaii,
    Idaho,
    Illinois,
    Indiana,
    Iowa,
    Kansas,
    Kentucky,
    Louisiana,
    Maine,
    Maryland,
    Massachusetts,
    Michigan,
    Minnesota,
    Mississippi,
    Missouri,
    Montana,
    Nebraska,
    Nevada,
    NewHampshire,
    NewJersey,
    NewMexico,
    NewYork,
    NorthCarolina,
    NorthDakota,
    Ohio,
    Oklahoma,
    Oregon,
    Pennsylvania,
    RhodeIsland,
    SouthCarolina,
    SouthDakota,
    Tennessee,
    Texas,
    Utah,
    Vermont,
    Virginia,
    Washington,
    WestVirginia,
    Wisconsin,
    Wyoming,
}

/// Total number of jurisdictions (50 states + DC).
pub const US_STATE_COUNT: usize = 51;

impl UsState {
    /// Returns all jurisdictions in alphabetical order.
    pub fn all() -> &'static [UsState] {
        &[
            Self::Alabama,
            Self::Alaska,
            Self::Arizona,
            Self::Arkansas,
            Self::California,
            Self::Colorado,
            Self::Connecticut,
            Self::Delaware,
            Self::DistrictOfColumbia,
            Self::Florida,
            Self::Georgia,
            Self::Hawaii,
            Self::Idaho,
            Self::Illinois,
            Self::Indiana,
            Self::Iowa,
            Self::Kansas,
            Self::Kentucky,
            Self::Louisiana,
            Self::Maine,
            Self::Maryland,
            Self::Massachusetts,
            Self::Michigan,
            Self::Minnesota,
            Self::Mississippi,
            Self::Missouri,
            Self::Montana,
            Self::Nebraska,
            Self::Nevada,
            Self::NewHampshire,
            Self::NewJersey,
            Self::NewMexico,
            Self::NewYork,
            Self::NorthCarolina,
            Self::NorthDakota,
            Self::Ohio,
            Self::Oklahoma,
            Self::Oregon,
            Self::Pennsylvania,
            Self::RhodeIsland,
            Self::SouthCarolina,
            Self::SouthDakota,
            Self::Tennessee,
            Self::Texas,
            Self::Utah,
            Self::Vermont,
            Self::Virginia,
            Self::Washington,
            Self::WestVirginia,
            Self::Wisconsin,
            Self::Wyoming,
        ]
    }

    /// Whether this jurisdiction levies a broad-based personal income tax.
    ///
    /// States without one can never trigger the state-conformity rules —
    /// there is no state return for foreign income to leak into.
    pub fn has_income_tax(&self) -> bool {
        !matches!(
            self,
            Self::Alaska
                | Self::Florida
                | Self::Nevada
                | Self::NewHampshire
                | Self::SouthDakota
                | Self::Tennessee
                | Self::Texas
                | Self::Washington
                | Self::Wyoming
        )
    }

    /// Returns the snake_case string identifier for this jurisdiction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alabama => "alabama",
            Self::Alaska => "alaska",
            Self::Arizona => "arizona",
            Self::Arkansas => "arkansas",
            Self::California => "california",
            Self::Colorado => "colorado",
            Self::Connecticut => "connecticut",
            Self::Delaware => "delaware",
            Self::DistrictOfColumbia => "district_of_columbia",
            Self::Florida => "florida",
            Self::Georgia => "georgia",
            Self::Hawaii => "hawaii",
            Self::Idaho => "idaho",
            Self::Illinois => "illinois",
            Self::Indiana => "indiana",
            Self::Iowa => "iowa",
            Self::Kansas => "kansas",
            Self::Kentucky => "kentucky",
            Self::Louisiana => "louisiana",
            Self::Maine => "maine",
            Self::Maryland => "maryland",
            Self::Massachusetts => "massachusetts",
            Self::Michigan => "michigan",
            Self::Minnesota => "minnesota",
            Self::Mississippi => "mississippi",
            Self::Missouri => "missouri",
            Self::Montana => "montana",
            Self::Nebraska => "nebraska",
            Self::Nevada => "nevada",
            Self::NewHampshire => "new_hampshire",
            Self::NewJersey => "new_jersey",
            Self::NewMexico => "new_mexico",
            Self::NewYork => "new_york",
            Self::NorthCarolina => "north_carolina",
            Self::NorthDakota => "north_dakota",
            Self::Ohio => "ohio",
            Self::Oklahoma => "oklahoma",
            Self::Oregon => "oregon",
            Self::Pennsylvania => "pennsylvania",
            Self::RhodeIsland => "rhode_island",
            Self::SouthCarolina => "south_carolina",
            Self::SouthDakota => "south_dakota",
            Self::Tennessee => "tennessee",
            Self::Texas => "texas",
            Self::Utah => "utah",
            Self::Vermont => "vermont",
            Self::Virginia => "virginia",
            Self::Washington => "washington",
            Self::WestVirginia => "west_virginia",
            Self::Wisconsin => "wisconsin",
            Self::Wyoming => "wyoming",
        }
    }

    /// Human-readable name for narrative interpolation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Alabama => "Alabama",
            Self::Alaska => "Alaska",
            Self::Arizona => "Arizona",
            Self::Arkansas => "Arkansas",
            Self::California => "California",
            Self::Colorado => "Colorado",
            Self::Connecticut => "Connecticut",
            Self::Delaware => "Delaware",
            Self::DistrictOfColumbia => "District of Columbia",
            Self::Florida => "Florida",
            Self::Georgia => "Georgia",
            Self::Hawaii => "Hawaii",
            Self::Idaho => "Idaho",
            Self::Illinois => "Illinois",
            Self::Indiana => "Indiana",
            Self::Iowa => "Iowa",
            Self::Kansas => "Kansas",
            Self::Kentucky => "Kentucky",
            Self::Louisiana => "Louisiana",
            Self::Maine => "Maine",
            Self::Maryland => "Maryland",
            Self::Massachusetts => "Massachusetts",
            Self::Michigan => "Michigan",
            Self::Minnesota => "Minnesota",
            Self::Mississippi => "Mississippi",
            Self::Missouri => "Missouri",
            Self::Montana => "Montana",
            Self::Nebraska => "Nebraska",
            Self::Nevada => "Nevada",
            Self::NewHampshire => "New Hampshire",
            Self::NewJersey => "New Jersey",
            Self::NewMexico => "New Mexico",
            Self::NewYork => "New York",
            Self::NorthCarolina => "North Carolina",
            Self::NorthDakota => "North Dakota",
            Self::Ohio => "Ohio",
            Self::Oklahoma => "Oklahoma",
            Self::Oregon => "Oregon",
            Self::Pennsylvania => "Pennsylvania",
            Self::RhodeIsland => "Rhode Island",
            Self::SouthCarolina => "South Carolina",
            Self::SouthDakota => "South Dakota",
            Self::Tennessee => "Tennessee",
            Self::Texas => "Texas",
            Self::Utah => "Utah",
            Self::Vermont => "Vermont",
            Self::Virginia => "Virginia",
            Self::Washington => "Washington",
            Self::WestVirginia => "West Virginia",
            Self::Wisconsin => "Wisconsin",
            Self::Wyoming => "Wyoming",
        }
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or_else(|| CoreError::unknown("us state", s))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
