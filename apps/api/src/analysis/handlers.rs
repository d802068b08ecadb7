//! Axum route handlers for document analysis.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::DocumentAnalysis;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub document_text: String,
}

/// POST /api/v1/documents/analyze
///
/// Sends extracted document text to the analysis collaborator and returns its
/// structured output unchanged.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<DocumentAnalysis>, AppError> {
    if request.document_text.trim().is_empty() {
        return Err(AppError::Validation(
            "documentText cannot be empty".to_string(),
        ));
    }

    let analysis = state.analyzer.analyze(&request.document_text).await?;
    info!(
        functional = analysis.functional_requirements.len(),
        non_functional = analysis.non_functional_requirements.len(),
        suggested_team = analysis.suggested_team.len(),
        "Document analyzed"
    );

    Ok(Json(analysis))
}
