// src/handlers/contact.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::contact::{ContactRequest, ContactRequestCreate},
    store::{Collection, Store},
};

/// Submits a contact/callback request. No scoring; the record is persisted
/// verbatim with a generated id and creation timestamp.
pub async fn create_contact_request(
    State(store): State<Store>,
    Json(payload): Json<ContactRequestCreate>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let contact = ContactRequest::from_create(payload);

    store
        .insert(Collection::ContactRequests, contact.timestamp, &contact)
        .await?;

    Ok(Json(contact))
}
