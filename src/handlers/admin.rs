// src/handlers/admin.rs

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::AppError,
    models::assessment::Assessment,
    store::{Collection, Store},
    utils::xlsx,
};

/// Upper bound on listing and export reads, to keep responses bounded.
const LIST_LIMIT: i64 = 10_000;

/// DTO for the admin login form.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
}

/// Admin login endpoint.
///
/// Exact case-sensitive match against the configured credential pair.
/// No lockout or backoff; a mismatch is a plain 401.
pub async fn login(
    State(config): State<Config>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !config.admin.verify(&payload.username, &payload.password) {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    Ok(Json(AdminLoginResponse {
        success: true,
        message: "Login successful".to_string(),
    }))
}

/// Lists all assessments, newest first.
///
/// Scores and results were computed at insert time and are returned as-is;
/// nothing is recomputed here.
pub async fn list_assessments(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let assessments: Vec<Assessment> = store
        .list_all(Collection::Assessments, LIST_LIMIT)
        .await?;

    Ok(Json(assessments))
}

/// Exports all assessments as an xlsx workbook, newest first.
pub async fn export_assessments(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let assessments: Vec<Assessment> = store
        .list_all(Collection::Assessments, LIST_LIMIT)
        .await?;

    let workbook = xlsx::build_workbook(&assessments)?;

    tracing::info!(rows = assessments.len(), "assessments exported");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"kamch_assessments.xlsx\"",
            ),
        ],
        workbook,
    ))
}
