use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::projects::catalog::Project;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub views: u64,
}

#[derive(Serialize)]
pub struct ViewCountResponse {
    pub slug: String,
    pub views: u64,
}

/// GET /api/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects.published().into_iter().cloned().collect())
}

/// GET /api/projects/:slug
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = state
        .projects
        .find(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Project {slug} not found")))?;
    let views = state.views.get(&slug).await?;
    Ok(Json(ProjectDetailResponse { project, views }))
}

/// POST /api/projects/:slug/views
pub async fn handle_report_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ViewCountResponse>, AppError> {
    if state.projects.find(&slug).is_none() {
        return Err(AppError::NotFound(format!("Project {slug} not found")));
    }
    let views = state.views.incr(&slug).await?;
    Ok(Json(ViewCountResponse { slug, views }))
}
