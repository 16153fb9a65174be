// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// DTO for submitting a contact/callback request.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequestCreate {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "Mobile is required."))]
    pub mobile: String,
    /// Optional and deliberately unvalidated, matching the permissive
    /// behavior of the submission form.
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

/// A persisted contact request. No derived fields; immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactRequest {
    pub fn from_create(create: ContactRequestCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: create.name,
            mobile: create.mobile,
            email: create.email,
            message: create.message,
            timestamp: Utc::now(),
        }
    }
}
