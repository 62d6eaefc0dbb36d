//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::analysis::report::AnalysisReport;
use crate::analysis::{analyze, Upload};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub title: String,
    pub description: String,
    pub stop_words: String,
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let profile = &state.config.job_profile;
    Json(ProfileResponse {
        title: profile.title.clone(),
        description: profile.description.clone(),
        stop_words: state.config.stop_words.to_string(),
    })
}

/// POST /api/v1/analyze
///
/// Accepts `multipart/form-data`; every part with a non-empty filename is a
/// résumé. Zero files is not an error: the report carries a warning instead.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let limit = state.config.max_upload_bytes;
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, limit))?
    {
        // Browsers send an empty filename when no file was picked.
        let file_name = match field.file_name() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => continue,
        };
        if uploads.len() >= state.config.max_files {
            return Err(AppError::Validation(format!(
                "At most {} files can be analyzed at once",
                state.config.max_files
            )));
        }
        let data = field.bytes().await.map_err(|e| upload_error(e, limit))?;
        uploads.push(Upload { file_name, data });
    }

    let report = analyze(
        &state.config.job_profile,
        &state.config.stop_words,
        state.extractor.as_ref(),
        uploads,
    )
    .await?;

    Ok(Json(report))
}

/// The body limit surfaces as a stream error; report it as such.
fn upload_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Multipart(e)
    }
}
