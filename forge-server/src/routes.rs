//! API route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use forge_core::{
    ForgeError, InsertPage, InsertProject, InsertTemplate, Page, Project, Template, UpdatePage,
    UpdateProject,
};
use forge_renderer::{ExportBundle, ExportOptions, ProjectExporter};

use crate::error::ApiError;
use crate::validation;
use crate::AppState;

type ApiResult<T> = Result<T, ApiError>;

// ── projects ────────────────────────────────────────────────────

/// List active projects, most recently updated first.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.projects())
}

/// Create a project, optionally seeded from a template.
#[tracing::instrument(name = "create_project", skip(state, insert), fields(name = %insert.name))]
pub async fn create_project(
    State(state): State<AppState>,
    Json(insert): Json<InsertProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    validation::validate_insert_project(&insert).map_err(ApiError::Validation)?;
    let project = state.store.create_project(insert)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Create a project from a named template.
///
/// Unlike `create_project`, which silently falls back to a blank page when
/// the `template` field names nothing, this route requires the template to
/// exist.
#[tracing::instrument(
    name = "create_project_from_template",
    skip(state, insert),
    fields(name = %insert.name)
)]
pub async fn create_project_from_template(
    State(state): State<AppState>,
    Json(insert): Json<InsertProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    validation::validate_insert_project(&insert).map_err(ApiError::Validation)?;
    let template_id = insert.template.clone().ok_or_else(|| {
        ApiError::Validation(vec![validation::FieldError::new(
            "template",
            "template is required",
        )])
    })?;
    if state.store.template(&template_id).is_none() {
        return Err(ApiError::Core(ForgeError::TemplateNotFound(template_id)));
    }
    let project = state.store.create_project(insert)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Fetch one active project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    state
        .store
        .project(&id)
        .map(Json)
        .ok_or_else(|| ApiError::Core(ForgeError::ProjectNotFound(id)))
}

/// Apply a partial update to a project.
#[tracing::instrument(name = "update_project", skip(state, updates))]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<UpdateProject>,
) -> ApiResult<Json<Project>> {
    validation::validate_update_project(&updates).map_err(ApiError::Validation)?;
    Ok(Json(state.store.update_project(&id, updates)?))
}

/// Soft-delete a project and its standalone pages.
#[tracing::instrument(name = "delete_project", skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.store.delete_project(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::Core(ForgeError::ProjectNotFound(id)))
    }
}

/// Export a project as a static bundle.
///
/// The request body is optional; omitted options take their defaults.
#[tracing::instrument(name = "export_project", skip(state, options))]
pub async fn export_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    options: Option<Json<ExportOptions>>,
) -> ApiResult<Json<ExportBundle>> {
    let project = state
        .store
        .project(&id)
        .ok_or_else(|| ApiError::Core(ForgeError::ProjectNotFound(id)))?;
    let options = options.map(|Json(o)| o).unwrap_or_default();
    let bundle = ProjectExporter::new(options).export(&project)?;
    Ok(Json(bundle))
}

// ── templates ───────────────────────────────────────────────────

/// List templates, newest first.
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.store.templates())
}

/// Fetch one template.
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Template>> {
    state
        .store
        .template(&id)
        .map(Json)
        .ok_or_else(|| ApiError::Core(ForgeError::TemplateNotFound(id)))
}

/// Create a user template.
#[tracing::instrument(name = "create_template", skip(state, insert), fields(name = %insert.name))]
pub async fn create_template(
    State(state): State<AppState>,
    Json(insert): Json<InsertTemplate>,
) -> ApiResult<(StatusCode, Json<Template>)> {
    validation::validate_insert_template(&insert).map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(state.store.create_template(insert))))
}

// ── pages ───────────────────────────────────────────────────────

/// List a project's standalone pages.
pub async fn list_pages(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<Page>>> {
    if state.store.project(&project_id).is_none() {
        return Err(ApiError::Core(ForgeError::ProjectNotFound(project_id)));
    }
    Ok(Json(state.store.project_pages(&project_id)))
}

/// Create a page under a project. The path segment wins over any
/// `projectId` in the body.
#[tracing::instrument(name = "create_page", skip(state, insert), fields(name = %insert.name))]
pub async fn create_page(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(mut insert): Json<InsertPage>,
) -> ApiResult<(StatusCode, Json<Page>)> {
    insert.project_id = project_id;
    validation::validate_insert_page(&insert).map_err(ApiError::Validation)?;
    let page = state.store.create_page(insert)?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// Fetch one page.
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Page>> {
    state
        .store
        .page(&id)
        .map(Json)
        .ok_or_else(|| ApiError::Core(ForgeError::PageNotFound(id)))
}

/// Apply a partial update to a page.
#[tracing::instrument(name = "update_page", skip(state, updates))]
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<UpdatePage>,
) -> ApiResult<Json<Page>> {
    validation::validate_update_page(&updates).map_err(ApiError::Validation)?;
    Ok(Json(state.store.update_page(&id, updates)?))
}

/// Delete a page.
#[tracing::instrument(name = "delete_page", skip(state))]
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.store.delete_page(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::Core(ForgeError::PageNotFound(id)))
    }
}
