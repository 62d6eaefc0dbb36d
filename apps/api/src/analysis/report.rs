//! Presentation stage — percentages, ordering and the response envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::ranking::SimilarityResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub candidate: String,
    /// 0.0 – 100.0, two decimals
    pub match_percentage: f64,
}

/// An upload whose text could not be extracted. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionFailure {
    pub candidate: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile_title: String,
    pub results: Vec<RankingRow>,
    pub failures: Vec<ExtractionFailure>,
    pub warnings: Vec<String>,
}

/// `round(score * 100, 2)`: 0.8034567 → 80.35.
pub fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

/// Best match first. Ties keep upload order.
pub fn build_rows(results: Vec<SimilarityResult>) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = results
        .into_iter()
        .map(|r| RankingRow {
            candidate: r.id,
            match_percentage: to_percentage(r.score),
        })
        .collect();
    rows.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, score: f64) -> SimilarityResult {
        SimilarityResult {
            id: id.to_string(),
            score,
        }
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(to_percentage(0.8034567), 80.35);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(0.123449), 12.34);
    }

    #[test]
    fn test_rows_sorted_descending() {
        let rows = build_rows(vec![
            result("a.pdf", 0.1),
            result("b.pdf", 0.9),
            result("c.pdf", 0.5),
        ]);
        let order: Vec<&str> = rows.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(order, vec!["b.pdf", "c.pdf", "a.pdf"]);
    }

    #[test]
    fn test_ties_keep_upload_order() {
        let rows = build_rows(vec![
            result("first.pdf", 0.42),
            result("top.pdf", 0.9),
            result("second.pdf", 0.42),
        ]);
        let order: Vec<&str> = rows.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(order, vec!["top.pdf", "first.pdf", "second.pdf"]);
    }

    #[test]
    fn test_duplicate_names_not_merged() {
        let rows = build_rows(vec![result("cv.pdf", 0.2), result("cv.pdf", 0.3)]);
        assert_eq!(rows.len(), 2);
    }
}
