//! Similarity ranking — scores candidate documents against a reference text.
//!
//! The reference and every candidate form one corpus; the TF-IDF space is fit
//! over that corpus and each candidate is scored by cosine similarity with the
//! reference row. Results come back in input order; sorting for display is the
//! caller's job.

pub mod similarity;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::ranking::similarity::cosine_similarity;
use crate::ranking::stop_words::StopWords;
use crate::ranking::tfidf::TfIdfVectorizer;

/// One uploaded document after text extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,
    pub text: String,
}

impl CandidateDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub id: String,
    /// 0.0 – 1.0
    pub score: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    #[error("Reference text cannot be empty")]
    EmptyReference,
}

/// Full output of a ranking pass.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub results: Vec<SimilarityResult>,
    /// Zero when no document had a term left after stop-word removal.
    pub vocabulary_size: usize,
}

pub struct SimilarityRanker<'a> {
    stop_words: &'a StopWords,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    pub fn rank(
        &self,
        reference: &str,
        candidates: &[CandidateDocument],
    ) -> Result<Ranking, RankError> {
        if reference.trim().is_empty() {
            return Err(RankError::EmptyReference);
        }
        if candidates.is_empty() {
            return Ok(Ranking {
                results: vec![],
                vocabulary_size: 0,
            });
        }

        let corpus: Vec<&str> = std::iter::once(reference)
            .chain(candidates.iter().map(|c| c.text.as_str()))
            .collect();
        let matrix = TfIdfVectorizer::new(self.stop_words).fit_transform(&corpus);

        if matrix.vocabulary.is_empty() {
            warn!(
                "Empty vocabulary over {} documents; all scores default to 0",
                corpus.len()
            );
            return Ok(Ranking {
                results: candidates
                    .iter()
                    .map(|c| SimilarityResult {
                        id: c.id.clone(),
                        score: 0.0,
                    })
                    .collect(),
                vocabulary_size: 0,
            });
        }

        let reference_row = &matrix.rows[0];
        let results = candidates
            .iter()
            .zip(&matrix.rows[1..])
            .map(|(candidate, row)| SimilarityResult {
                id: candidate.id.clone(),
                score: cosine_similarity(reference_row, row),
            })
            .collect();

        debug!(
            "Ranked {} candidates over a vocabulary of {} terms",
            candidates.len(),
            matrix.vocabulary.len()
        );

        Ok(Ranking {
            results,
            vocabulary_size: matrix.vocabulary.len(),
        })
    }
}

/// Scores each candidate against `reference`, preserving candidate order.
#[cfg(test)]
pub fn rank(
    reference: &str,
    candidates: &[CandidateDocument],
    stop_words: &StopWords,
) -> Result<Vec<SimilarityResult>, RankError> {
    SimilarityRanker::new(stop_words)
        .rank(reference, candidates)
        .map(|r| r.results)
}
