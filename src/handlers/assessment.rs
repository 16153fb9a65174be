// src/handlers/assessment.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::assessment::{Assessment, AssessmentSubmission},
    store::{Collection, Store},
};

/// Submits an assessment form.
///
/// * Validates the payload (required fields, answer values 1-5).
/// * Computes score and result server-side; client-supplied values are
///   never trusted for either.
/// * Performs exactly one store write; nothing is persisted on failure.
pub async fn create_assessment(
    State(store): State<Store>,
    Json(payload): Json<AssessmentSubmission>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let assessment = Assessment::from_submission(payload);

    store
        .insert(Collection::Assessments, assessment.timestamp, &assessment)
        .await?;

    tracing::info!(id = %assessment.id, score = assessment.score, "assessment recorded");

    Ok(Json(assessment))
}
