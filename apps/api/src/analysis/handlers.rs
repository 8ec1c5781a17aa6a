//! Axum route handlers for the analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::analysis::engine::analyze_text;
use crate::analysis::report::AnalysisOutcome;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/predict
///
/// Accepts a multipart upload with the file under a `resume` field, extracts
/// its text and returns either the scored report or a rejection notice.
pub async fn handle_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("resume") {
            // file_name must be captured before bytes() consumes the field
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Resume file is required".to_string()))?;

    tracing::debug!(filename = %filename, bytes = data.len(), "analyzing uploaded resume");

    let extractor = state.extractor.clone();
    let dictionary = state.dictionary.clone();

    // Extraction and analysis are CPU-bound; keep them off the async workers.
    let outcome = tokio::task::spawn_blocking(move || {
        let raw_text = extractor.extract(&filename, &data)?;
        Ok::<_, AppError>(analyze_text(&raw_text, dictionary.as_ref()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))??;

    Ok(Json(outcome))
}
