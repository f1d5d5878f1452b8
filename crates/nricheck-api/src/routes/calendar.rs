//! # Deadline Calendar API
//!
//! Filters the static cross-border deadline list by the caller's holdings
//! and status, and attaches each entry's next occurrence.

use std::collections::BTreeSet;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use nricheck_calendar::{deadlines_for, DeadlineEntry, Jurisdiction};
use nricheck_core::{AssetKind, UsStatus};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the calendar endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarParams {
    /// Comma-separated asset kinds ("bank_account,ppf").
    pub assets: Option<String>,
    /// US immigration status ("green_card").
    pub status: Option<String>,
}

/// One calendar entry with its next due date resolved.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub jurisdiction: Jurisdiction,
    pub month: u32,
    pub day: u32,
    /// Next occurrence on or after today (or the explicit `from` date).
    pub next_occurrence: Option<NaiveDate>,
}

impl CalendarEntry {
    fn from_entry(entry: &DeadlineEntry, from: NaiveDate) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            summary: entry.summary.to_string(),
            jurisdiction: entry.jurisdiction,
            month: entry.month,
            day: entry.day,
            next_occurrence: entry.next_occurrence(from),
        }
    }
}

/// Calendar routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/calendar", get(calendar))
}

/// `GET /v1/calendar` — deadlines relevant to the given holdings and status.
async fn calendar(
    Query(params): Query<CalendarParams>,
) -> Result<Json<Vec<CalendarEntry>>, AppError> {
    let assets = parse_assets(params.assets.as_deref())?;
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<UsStatus>()
                .map_err(|err| AppError::Validation(err.to_string()))
        })
        .transpose()?;

    let today = Utc::now().date_naive();
    let entries = deadlines_for(&assets, status)
        .into_iter()
        .map(|entry| CalendarEntry::from_entry(entry, today))
        .collect();
    Ok(Json(entries))
}

fn parse_assets(raw: Option<&str>) -> Result<BTreeSet<AssetKind>, AppError> {
    let mut assets = BTreeSet::new();
    if let Some(list) = raw {
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let kind = token
                .parse::<AssetKind>()
                .map_err(|err| AppError::Validation(err.to_string()))?;
            assets.insert(kind);
        }
    }
    Ok(assets)
}
