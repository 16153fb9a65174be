// src/utils/xlsx.rs

use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::error::AppError;
use crate::models::assessment::Assessment;

/// Export column headers, in contract order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Date Submitted",
    "Name",
    "Age",
    "Gender",
    "Date",
    "Mobile",
    "Score",
    "Result",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_COLUMN_WIDTH: usize = 50;

/// Renders assessments into export rows, one per record, column order
/// matching [`EXPORT_HEADERS`]. Score and result are copied verbatim from
/// the stored record; nothing is recomputed.
pub fn assessment_rows(assessments: &[Assessment]) -> Vec<[String; 8]> {
    assessments
        .iter()
        .map(|a| {
            [
                a.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                a.name.clone(),
                a.age.clone(),
                a.gender.clone(),
                a.date.clone(),
                a.mobile.clone(),
                a.score.to_string(),
                a.result.as_str().to_string(),
            ]
        })
        .collect()
}

/// Builds the xlsx workbook: one bold centered header row plus one row per
/// assessment, column widths fitted to content (capped). Returns the
/// serialized workbook bytes.
pub fn build_workbook(assessments: &[Assessment]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Assessments")
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }

    let rows = assessment_rows(assessments);

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write((row_idx + 1) as u32, col as u16, cell.as_str())
                .map_err(|e| AppError::Internal(e.to_string()))?;
        }
    }

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        let content_width = rows
            .iter()
            .map(|row| row[col].len())
            .max()
            .unwrap_or(0)
            .max(header.len());
        let width = (content_width + 2).min(MAX_COLUMN_WIDTH);
        worksheet
            .set_column_width(col as u16, width as f64)
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::Answer;
    use crate::scoring::AmaResult;
    use chrono::{TimeZone, Utc};

    fn sample(name: &str, score: i64, result: AmaResult) -> Assessment {
        Assessment {
            id: "test-id".to_string(),
            name: name.to_string(),
            age: "18 yrs above".to_string(),
            gender: "Female".to_string(),
            date: "2025-01-15".to_string(),
            mobile: "9876543210".to_string(),
            answers: vec![Answer {
                question_id: 1,
                value: 3,
            }],
            score,
            result,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn one_row_per_record() {
        let records = vec![
            sample("A", 31, AmaResult::SlightlyPresent),
            sample("B", 45, AmaResult::Present),
        ];
        assert_eq!(assessment_rows(&records).len(), 2);
    }

    #[test]
    fn row_carries_stored_score_and_result_verbatim() {
        let rows = assessment_rows(&[sample("A", 31, AmaResult::SlightlyPresent)]);
        assert_eq!(rows[0][6], "31");
        assert_eq!(rows[0][7], "Ama slightly present");
    }

    #[test]
    fn timestamp_uses_fixed_pattern() {
        let rows = assessment_rows(&[sample("A", 31, AmaResult::SlightlyPresent)]);
        assert_eq!(rows[0][0], "2025-01-15 09:30:00");
    }

    #[test]
    fn workbook_builds_for_empty_listing() {
        let bytes = build_workbook(&[]).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn workbook_builds_with_records() {
        let bytes = build_workbook(&[sample("A", 31, AmaResult::SlightlyPresent)]).unwrap();
        assert!(!bytes.is_empty());
    }
}
