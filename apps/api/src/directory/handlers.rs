//! Axum route handlers for the directory.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::person::Person;
use crate::models::project::Project;
use crate::state::AppState;

/// GET /api/v1/people
pub async fn handle_list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, AppError> {
    Ok(Json(state.directory.people().await?))
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.directory.projects().await?))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, AppError> {
    state
        .directory
        .project(&project_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))
}
