//! Analysis pipeline: upload → extraction → ranking → presentation.
//!
//! Each stage lives in its own module and can be tested in isolation; this
//! module only sequences them and turns non-fatal conditions into warnings.

pub mod extraction;
pub mod handlers;
pub mod report;

use std::time::Instant;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::extraction::TextExtractor;
use crate::analysis::report::{build_rows, AnalysisReport, ExtractionFailure};
use crate::profile::JobProfile;
use crate::ranking::stop_words::StopWords;
use crate::ranking::{CandidateDocument, RankError, SimilarityRanker};

pub const NO_INPUT_WARNING: &str = "At least one PDF file must be uploaded.";
pub const NOTHING_EXTRACTED_WARNING: &str =
    "No text could be extracted from any uploaded file; nothing was ranked.";
pub const EMPTY_VOCABULARY_WARNING: &str =
    "No meaningful terms were found after stop-word removal; all scores are 0.";

/// A single uploaded file, as received from the multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub data: Bytes,
}

pub async fn analyze(
    profile: &JobProfile,
    stop_words: &StopWords,
    extractor: &dyn TextExtractor,
    uploads: Vec<Upload>,
) -> Result<AnalysisReport, RankError> {
    let analysis_id = Uuid::new_v4();
    let started = Instant::now();
    let mut report = AnalysisReport {
        analysis_id,
        generated_at: Utc::now(),
        profile_title: profile.title.clone(),
        results: vec![],
        failures: vec![],
        warnings: vec![],
    };

    if uploads.is_empty() {
        info!(%analysis_id, "Analyze triggered without uploads");
        report.warnings.push(NO_INPUT_WARNING.to_string());
        return Ok(report);
    }

    let (documents, failures) = extract_all(analysis_id, extractor, uploads).await;
    report.failures = failures;

    if documents.is_empty() {
        report.warnings.push(NOTHING_EXTRACTED_WARNING.to_string());
        return Ok(report);
    }

    let ranking = SimilarityRanker::new(stop_words).rank(&profile.description, &documents)?;
    if ranking.vocabulary_size == 0 {
        report.warnings.push(EMPTY_VOCABULARY_WARNING.to_string());
    }
    report.results = build_rows(ranking.results);

    info!(
        %analysis_id,
        ranked = report.results.len(),
        failed = report.failures.len(),
        vocabulary = ranking.vocabulary_size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Analysis complete"
    );

    Ok(report)
}

/// Extracts every upload in order. A failed file is recorded and skipped.
async fn extract_all(
    analysis_id: Uuid,
    extractor: &dyn TextExtractor,
    uploads: Vec<Upload>,
) -> (Vec<CandidateDocument>, Vec<ExtractionFailure>) {
    let mut documents = Vec::with_capacity(uploads.len());
    let mut failures = Vec::new();

    for upload in uploads {
        let extracted = extractor.extract(&upload).await;
        match extracted {
            Ok(text) => documents.push(CandidateDocument::new(upload.file_name, text)),
            Err(e) => {
                warn!(%analysis_id, file = %upload.file_name, "Extraction failed: {e}");
                failures.push(ExtractionFailure {
                    candidate: upload.file_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    (documents, failures)
}
