// src/scoring.rs

use serde::{Deserialize, Serialize};

use crate::models::assessment::Answer;

/// Categorical classification derived from the total score.
/// The wire labels (including the capitalization of "Present") are contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmaResult {
    #[serde(rename = "Ama not present")]
    NotPresent,
    #[serde(rename = "Ama slightly present")]
    SlightlyPresent,
    #[serde(rename = "Ama Present")]
    Present,
}

impl AmaResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmaResult::NotPresent => "Ama not present",
            AmaResult::SlightlyPresent => "Ama slightly present",
            AmaResult::Present => "Ama Present",
        }
    }
}

/// Computes the total score and its classification.
///
/// The total is the plain sum of answer values: no clamping, no weighting,
/// no normalization by answer count. Duplicate question ids are summed as
/// given. Thresholds are inclusive: <= 28 not present, <= 42 slightly
/// present, above that present.
pub fn score_answers(answers: &[Answer]) -> (i64, AmaResult) {
    let total: i64 = answers.iter().map(|a| a.value).sum();

    let result = if total <= 28 {
        AmaResult::NotPresent
    } else if total <= 42 {
        AmaResult::SlightlyPresent
    } else {
        AmaResult::Present
    };

    (total, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[i64]) -> Vec<Answer> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Answer {
                question_id: (i + 1) as i64,
                value,
            })
            .collect()
    }

    #[test]
    fn score_is_plain_sum() {
        let (total, _) = score_answers(&answers(&[3, 2, 1, 4, 2, 3, 1, 2, 3, 1, 2, 3, 2, 1]));
        assert_eq!(total, 31);
    }

    #[test]
    fn boundary_28_is_not_present() {
        // 14 answers of value 2 each
        let (total, result) = score_answers(&answers(&[2; 14]));
        assert_eq!(total, 28);
        assert_eq!(result, AmaResult::NotPresent);
    }

    #[test]
    fn score_29_is_slightly_present() {
        let mut values = vec![2; 13];
        values.push(3);
        let (total, result) = score_answers(&answers(&values));
        assert_eq!(total, 29);
        assert_eq!(result, AmaResult::SlightlyPresent);
    }

    #[test]
    fn boundary_42_is_slightly_present() {
        let (total, result) = score_answers(&answers(&[3; 14]));
        assert_eq!(total, 42);
        assert_eq!(result, AmaResult::SlightlyPresent);
    }

    #[test]
    fn score_43_is_present() {
        let mut values = vec![3; 13];
        values.push(4);
        let (total, result) = score_answers(&answers(&values));
        assert_eq!(total, 43);
        assert_eq!(result, AmaResult::Present);
    }

    #[test]
    fn concrete_scenario_sums_to_31() {
        let (total, result) = score_answers(&answers(&[3, 2, 1, 4, 2, 3, 1, 2, 3, 1, 2, 3, 2, 1]));
        assert_eq!(total, 31);
        assert_eq!(result, AmaResult::SlightlyPresent);
    }

    #[test]
    fn empty_answers_score_zero() {
        let (total, result) = score_answers(&[]);
        assert_eq!(total, 0);
        assert_eq!(result, AmaResult::NotPresent);
    }

    #[test]
    fn duplicate_question_ids_are_summed_as_given() {
        let duplicated = vec![
            Answer { question_id: 1, value: 5 },
            Answer { question_id: 1, value: 5 },
        ];
        let (total, _) = score_answers(&duplicated);
        assert_eq!(total, 10);
    }

    #[test]
    fn result_labels_serialize_verbatim() {
        assert_eq!(
            serde_json::to_value(AmaResult::Present).unwrap(),
            serde_json::json!("Ama Present")
        );
        assert_eq!(AmaResult::SlightlyPresent.as_str(), "Ama slightly present");
    }
}
