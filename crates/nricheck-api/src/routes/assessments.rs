//! # Assessment API
//!
//! Submission runs the report service (the engine always re-evaluates
//! server-side; a client cannot submit its own score) and retrieval returns
//! the latest stored snapshot for a contact.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use nricheck_core::QuestionnaireAnswers;
use nricheck_engine::EngineOutput;
use nricheck_report::AssessmentSnapshot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

const MAX_CONTACT_ID_LEN: usize = 255;

/// Request body for submitting an assessment.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    /// Opaque caller-owned contact identifier.
    pub contact_id: String,
    /// The questionnaire answers; missing fields default to unanswered.
    #[serde(default)]
    pub answers: QuestionnaireAnswers,
}

impl SubmitAssessmentRequest {
    fn validate(&self) -> Result<(), AppError> {
        let contact_id = self.contact_id.trim();
        if contact_id.is_empty() {
            return Err(AppError::Validation(
                "contact_id must be non-empty".to_string(),
            ));
        }
        if contact_id.len() > MAX_CONTACT_ID_LEN {
            return Err(AppError::Validation(format!(
                "contact_id must not exceed {MAX_CONTACT_ID_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Response for a submitted assessment.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAssessmentResponse {
    /// Identifier of the stored snapshot.
    pub snapshot_id: Uuid,
    /// The engine output computed server-side.
    pub output: EngineOutput,
}

/// Assessment routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/assessments", post(submit_assessment))
        .route("/v1/assessments/:contact_id", get(latest_assessment))
}

/// `POST /v1/assessments` — evaluate a submission and store a snapshot.
async fn submit_assessment(
    State(state): State<AppState>,
    body: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    request.validate()?;

    let report = state
        .reports
        .generate(request.contact_id.trim(), request.answers);

    Ok(Json(SubmitAssessmentResponse {
        snapshot_id: report.snapshot_id,
        output: report.output,
    }))
}

/// `GET /v1/assessments/{contact_id}` — the latest stored snapshot.
async fn latest_assessment(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<AssessmentSnapshot>, AppError> {
    state
        .reports
        .latest_for(&contact_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no assessment for contact {contact_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contact_id_fails_validation() {
        let request = SubmitAssessmentRequest {
            contact_id: "   ".to_string(),
            answers: QuestionnaireAnswers::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn oversized_contact_id_fails_validation() {
        let request = SubmitAssessmentRequest {
            contact_id: "x".repeat(MAX_CONTACT_ID_LEN + 1),
            answers: QuestionnaireAnswers::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_deserializes_without_answers() {
        let request: SubmitAssessmentRequest =
            serde_json::from_str(r#"{ "contact_id": "c-1" }"#).unwrap();
        assert_eq!(request.contact_id, "c-1");
        assert_eq!(request.answers, QuestionnaireAnswers::default());
        assert!(request.validate().is_ok());
    }
}
