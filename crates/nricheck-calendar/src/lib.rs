//! # nricheck-calendar — Cross-Border Deadline Calendar
//!
//! A static list of recurring India/US compliance deadlines, filtered by
//! what a respondent holds and their immigration status. Shares the answer
//! vocabulary of `nricheck-core` but none of the engine: relevance here is
//! membership filtering, not rule evaluation, and nothing in this crate
//! affects a compliance score.

use chrono::{Datelike, NaiveDate};
use nricheck_core::{AssetKind, UsStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which country's administration a deadline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// United States federal deadlines.
    Us,
    /// Indian deadlines (fiscal year April–March).
    India,
}

/// One recurring annual deadline.
///
/// Entries are static data; `Serialize` is for API responses, and there is
/// deliberately no `Deserialize` — the list is compiled in, never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineEntry {
    /// Stable identifier ("fbar", "indian-itr").
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line description of what is due.
    pub summary: &'static str,
    /// Calendar month of the due date (1–12).
    pub month: u32,
    /// Day of month of the due date.
    pub day: u32,
    /// Whose deadline it is.
    pub jurisdiction: Jurisdiction,
    /// Asset kinds that make this entry relevant; `None` means everyone.
    pub relevant_assets: Option<&'static [AssetKind]>,
    /// Statuses this entry applies to; `None` means every status.
    pub relevant_statuses: Option<&'static [UsStatus]>,
}

impl DeadlineEntry {
    /// The next occurrence of this deadline on or after `from`.
    ///
    /// `None` only for an invalid month/day pair, which the static list
    /// never contains.
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        let this_year = NaiveDate::from_ymd_opt(from.year(), self.month, self.day)?;
        if this_year >= from {
            Some(this_year)
        } else {
            NaiveDate::from_ymd_opt(from.year() + 1, self.month, self.day)
        }
    }

    fn relevant_to(&self, assets: &BTreeSet<AssetKind>, status: Option<UsStatus>) -> bool {
        let assets_match = match self.relevant_assets {
            None => true,
            Some(kinds) => kinds.iter().any(|k| assets.contains(k)),
        };
        let status_match = match self.relevant_statuses {
            None => true,
            Some(statuses) => status.is_some_and(|s| statuses.contains(&s)),
        };
        assets_match && status_match
    }
}

const FINANCIAL_ACCOUNTS: &[AssetKind] = &[
    AssetKind::BankAccount,
    AssetKind::FixedDeposit,
    AssetKind::MutualFunds,
    AssetKind::Stocks,
    AssetKind::Insurance,
    AssetKind::Epf,
    AssetKind::Ppf,
    AssetKind::Nps,
];

const INCOME_PRODUCING: &[AssetKind] = &[
    AssetKind::BankAccount,
    AssetKind::FixedDeposit,
    AssetKind::MutualFunds,
    AssetKind::Stocks,
    AssetKind::Property,
];

const PERMANENT_STATUSES: &[UsStatus] = &[UsStatus::GreenCard, UsStatus::Citizen];

/// The full static deadline list, in calendar order.
pub const DEADLINES: &[DeadlineEntry] = &[
    DeadlineEntry {
        id: "indian-advance-tax-q4",
        title: "Indian advance tax, final installment",
        summary: "Last installment of advance tax on Indian income for the fiscal year.",
        month: 3,
        day: 15,
        jurisdiction: Jurisdiction::India,
        relevant_assets: Some(INCOME_PRODUCING),
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "us-federal-return",
        title: "US federal income-tax return",
        summary: "Form 1040 with worldwide income, including Indian income and the FTC.",
        month: 4,
        day: 15,
        jurisdiction: Jurisdiction::Us,
        relevant_assets: None,
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "form-8938",
        title: "Form 8938 foreign-asset disclosure",
        summary: "FATCA disclosure of specified Indian financial assets, attached to the return.",
        month: 4,
        day: 15,
        jurisdiction: Jurisdiction::Us,
        relevant_assets: Some(FINANCIAL_ACCOUNTS),
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "fbar",
        title: "FBAR (FinCEN Form 114)",
        summary: "Foreign-account report; due with the return, automatic extension to October 15.",
        month: 4,
        day: 15,
        jurisdiction: Jurisdiction::Us,
        relevant_assets: Some(&[
            AssetKind::BankAccount,
            AssetKind::FixedDeposit,
            AssetKind::Ppf,
            AssetKind::Epf,
        ]),
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "indian-itr",
        title: "Indian income-tax return (ITR-2)",
        summary: "NRI return for Indian-source income; filing reclaims excess TDS.",
        month: 7,
        day: 31,
        jurisdiction: Jurisdiction::India,
        relevant_assets: Some(INCOME_PRODUCING),
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "fbar-extended",
        title: "FBAR automatic extension lapses",
        summary: "Final date for the year's FBAR under the automatic extension.",
        month: 10,
        day: 15,
        jurisdiction: Jurisdiction::Us,
        relevant_assets: Some(&[
            AssetKind::BankAccount,
            AssetKind::FixedDeposit,
            AssetKind::Ppf,
            AssetKind::Epf,
        ]),
        relevant_statuses: None,
    },
    DeadlineEntry {
        id: "trc-renewal",
        title: "US Tax Residency Certificate renewal",
        summary: "File Form 8802 so a fresh Form 6166 covers next year's treaty claims.",
        month: 11,
        day: 1,
        jurisdiction: Jurisdiction::Us,
        relevant_assets: Some(INCOME_PRODUCING),
        relevant_statuses: Some(PERMANENT_STATUSES),
    },
    DeadlineEntry {
        id: "indian-belated-return",
        title: "Indian belated/revised return cutoff",
        summary: "Last date to file a belated or revised Indian return for the prior fiscal year.",
        month: 12,
        day: 31,
        jurisdiction: Jurisdiction::India,
        relevant_assets: Some(INCOME_PRODUCING),
        relevant_statuses: None,
    },
];

/// The deadlines relevant to a respondent's holdings and status.
///
/// Order is preserved from the static list (calendar order).
pub fn deadlines_for(
    assets: &BTreeSet<AssetKind>,
    status: Option<UsStatus>,
) -> Vec<&'static DeadlineEntry> {
    DEADLINES
        .iter()
        .filter(|entry| entry.relevant_to(assets, status))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_static_entry_has_a_valid_date() {
        let from = date(2026, 1, 1);
        for entry in DEADLINES {
            assert!(
                entry.next_occurrence(from).is_some(),
                "entry {} has an invalid month/day",
                entry.id
            );
        }
    }

    #[test]
    fn static_entry_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in DEADLINES {
            assert!(seen.insert(entry.id), "duplicate deadline id: {}", entry.id);
        }
    }

    #[test]
    fn next_occurrence_same_year_and_rollover() {
        let fbar = DEADLINES.iter().find(|e| e.id == "fbar").unwrap();
        assert_eq!(
            fbar.next_occurrence(date(2026, 2, 1)),
            Some(date(2026, 4, 15))
        );
        // The due date itself still counts.
        assert_eq!(
            fbar.next_occurrence(date(2026, 4, 15)),
            Some(date(2026, 4, 15))
        );
        // Past the date: next year.
        assert_eq!(
            fbar.next_occurrence(date(2026, 5, 1)),
            Some(date(2027, 4, 15))
        );
    }

    #[test]
    fn universal_entries_apply_to_empty_holdings() {
        let deadlines = deadlines_for(&BTreeSet::new(), None);
        let ids: Vec<&str> = deadlines.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["us-federal-return"]);
    }

    #[test]
    fn bank_accounts_pull_in_fbar_entries() {
        let mut assets = BTreeSet::new();
        assets.insert(AssetKind::BankAccount);
        let ids: Vec<&str> = deadlines_for(&assets, None).iter().map(|e| e.id).collect();
        assert!(ids.contains(&"fbar"));
        assert!(ids.contains(&"fbar-extended"));
        assert!(ids.contains(&"form-8938"));
        assert!(ids.contains(&"indian-itr"));
    }

    #[test]
    fn trc_renewal_requires_permanent_status() {
        let mut assets = BTreeSet::new();
        assets.insert(AssetKind::Property);

        let visa: Vec<&str> = deadlines_for(&assets, Some(UsStatus::H1bVisa))
            .iter()
            .map(|e| e.id)
            .collect();
        assert!(!visa.contains(&"trc-renewal"));

        let citizen: Vec<&str> = deadlines_for(&assets, Some(UsStatus::Citizen))
            .iter()
            .map(|e| e.id)
            .collect();
        assert!(citizen.contains(&"trc-renewal"));

        let unknown: Vec<&str> = deadlines_for(&assets, None).iter().map(|e| e.id).collect();
        assert!(!unknown.contains(&"trc-renewal"));
    }

    #[test]
    fn property_alone_skips_account_disclosures() {
        let mut assets = BTreeSet::new();
        assets.insert(AssetKind::Property);
        let ids: Vec<&str> = deadlines_for(&assets, None).iter().map(|e| e.id).collect();
        assert!(!ids.contains(&"fbar"));
        assert!(!ids.contains(&"form-8938"));
        assert!(ids.contains(&"indian-itr"));
    }

    #[test]
    fn filtered_list_preserves_calendar_order() {
        let mut assets = BTreeSet::new();
        assets.insert(AssetKind::BankAccount);
        let deadlines = deadlines_for(&assets, Some(UsStatus::GreenCard));
        for pair in deadlines.windows(2) {
            let a = (pair[0].month, pair[0].day);
            let b = (pair[1].month, pair[1].day);
            assert!(a <= b, "calendar order violated: {:?} before {:?}", a, b);
        }
    }

    #[test]
    fn deadline_entry_serializes() {
        let fbar = DEADLINES.iter().find(|e| e.id == "fbar").unwrap();
        let json = serde_json::to_string(fbar).unwrap();
        assert!(json.contains("\"jurisdiction\":\"us\""));
        assert!(json.contains("\"month\":4"));
    }
}
