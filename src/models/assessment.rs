// src/models/assessment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::scoring::{self, AmaResult};

/// A single questionnaire answer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Answer {
    pub question_id: i64,

    /// 1-5 (Never=1, Rarely=2, Occasionally=3, Frequently=4, Always=5).
    #[validate(range(min = 1, max = 5, message = "Answer value must be between 1 and 5."))]
    pub value: i64,
}

/// DTO for submitting an assessment.
/// Unknown extra fields are silently ignored (serde default).
#[derive(Debug, Deserialize, Validate)]
pub struct AssessmentSubmission {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "Age is required."))]
    pub age: String,
    #[validate(length(min = 1, message = "Gender is required."))]
    pub gender: String,
    #[validate(length(min = 1, message = "Date is required."))]
    pub date: String,
    #[validate(length(min = 1, message = "Mobile is required."))]
    pub mobile: String,
    #[validate(length(min = 1, message = "At least one answer is required."), nested)]
    pub answers: Vec<Answer>,
}

/// A persisted assessment record.
///
/// `id`, `score`, `result` and `timestamp` are always server-generated;
/// `score` and `result` stay consistent with `answers` because the record
/// is immutable after creation. Display fields default to empty when a
/// stored document lacks them, so listings and exports never fail on a
/// sparse record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub score: i64,
    pub result: AmaResult,
    pub timestamp: DateTime<Utc>,
}

impl Assessment {
    /// Builds the full record from a validated submission: generates the id,
    /// computes score and result, stamps the creation instant.
    pub fn from_submission(submission: AssessmentSubmission) -> Self {
        let (score, result) = scoring::score_answers(&submission.answers);

        Self {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            age: submission.age,
            gender: submission.gender,
            date: submission.date,
            mobile: submission.mobile,
            answers: submission.answers,
            score,
            result,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Test User",
            "age": "18 yrs above",
            "gender": "Male",
            "date": "2025-01-15",
            "mobile": "9876543210",
            "answers": [
                {"question_id": 1, "value": 3},
                {"question_id": 2, "value": 2}
            ]
        })
    }

    #[test]
    fn record_is_built_from_submission() {
        let submission: AssessmentSubmission =
            serde_json::from_value(submission_json()).unwrap();
        let record = Assessment::from_submission(submission);

        assert!(!record.id.is_empty());
        assert_eq!(record.score, 5);
        assert_eq!(record.result, AmaResult::NotPresent);
        assert_eq!(record.answers.len(), 2);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut json = submission_json();
        json["unexpected"] = serde_json::json!("extra");
        let submission: Result<AssessmentSubmission, _> = serde_json::from_value(json);
        assert!(submission.is_ok());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let mut json = submission_json();
        json.as_object_mut().unwrap().remove("mobile");
        let submission: Result<AssessmentSubmission, _> = serde_json::from_value(json);
        assert!(submission.is_err());
    }

    #[test]
    fn out_of_range_answer_fails_validation() {
        let mut json = submission_json();
        json["answers"][0]["value"] = serde_json::json!(6);
        let submission: AssessmentSubmission = serde_json::from_value(json).unwrap();
        assert!(submission.validate().is_err());
    }

    #[test]
    fn timestamp_round_trips_through_json() {
        let submission: AssessmentSubmission =
            serde_json::from_value(submission_json()).unwrap();
        let record = Assessment::from_submission(submission);

        let doc = serde_json::to_value(&record).unwrap();
        let restored: Assessment = serde_json::from_value(doc).unwrap();
        assert_eq!(restored.timestamp, record.timestamp);
    }
}
