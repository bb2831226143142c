use crate::{
    AppState,
    auth::AuthUser,
    error::ApiError,
    models::{
        ApiResponse, CompletionReward, CreateProjectRequest, LikeResult, Project, ProjectCategory,
        ProjectDifficulty, UpdateProjectRequest,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

// --- Filter Structs ---

/// ProjectFilter
///
/// Defines the accepted query parameters for the public project listing endpoint (GET /api/projects).
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProjectFilter {
    /// Optional filter for a single hands-on domain.
    pub category: Option<ProjectCategory>,
    /// Optional filter for the effort rating.
    pub difficulty: Option<ProjectDifficulty>,
    /// Optional case-insensitive search string for project title/description matching.
    pub search: Option<String>,
}

// --- Handlers ---

/// list_projects
///
/// [Public Route] Lists published DIY projects with filtering and search capabilities.
/// Each record carries the derived `likes` and `completions` counters.
///
/// *Security*: The repository method applies the `published = true` filter **unconditionally**.
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectFilter),
    responses((status = 200, description = "List filtered projects", body = ApiResponse<Vec<Project>>))
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state
        .repo
        .list_projects(filter.category, filter.difficulty, filter.search)
        .await?;
    Ok(Json(ApiResponse::list(projects)))
}

/// get_project
///
/// [Public Route] Retrieves a single project's details by ID, published or not.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Found", body = ApiResponse<Project>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state
        .repo
        .get_project(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(ApiResponse::data(project)))
}

/// create_project
///
/// [Admin Route] Handles the submission of a new DIY project.
///
/// *RBAC*: Strict enforcement of the "admin" role before calling the repository.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<Project>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn create_project(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let project = state.repo.create_project(payload, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Project created successfully",
            project,
        )),
    ))
}

/// update_project
///
/// [Admin Route] Partially updates an existing project, COALESCE semantics as for modules.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<Project>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let project = state
        .repo
        .update_project(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(ApiResponse::with_message(
        "Project updated successfully",
        project,
    )))
}

/// delete_project
///
/// [Admin Route] Removes a project along with its likes and completion records.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    if state.repo.delete_project(id).await? {
        Ok(Json(ApiResponse::message("Project deleted successfully")))
    } else {
        Err(ApiError::NotFound("Project"))
    }
}

/// complete_project
///
/// [Authenticated Route] Marks a project as built by the requesting user and credits
/// its reward, mirroring `complete_module`. The project's public completion count is
/// derived from the same membership table, so no separate counter update is needed.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/complete",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Completed", body = ApiResponse<CompletionReward>),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Already completed")
    )
)]
pub async fn complete_project(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CompletionReward>>, ApiError> {
    let project = state
        .repo
        .get_project(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let reward = state
        .repo
        .complete_project(user_id, project.id, project.points, project.carbon_impact)
        .await?
        .ok_or_else(|| ApiError::Conflict("Project already completed".to_string()))?;

    Ok(Json(ApiResponse::with_message(
        "Project completed successfully!",
        reward,
    )))
}

/// like_project
///
/// [Authenticated Route] Records a like from the user for a project.
///
/// *Idempotency*: The repository uses the composite primary key on `project_likes`
/// to enforce the **one-like-per-user-per-project** rule, reporting a 409 Conflict
/// on a repeat. The response carries the project's like count after the insert.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/like",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Liked", body = ApiResponse<LikeResult>),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Already liked")
    )
)]
pub async fn like_project(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LikeResult>>, ApiError> {
    // Existence check keeps a like on a missing project reporting 404, not a
    // foreign key violation.
    state
        .repo
        .get_project(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let likes = state
        .repo
        .like_project(user_id, id)
        .await?
        .ok_or_else(|| ApiError::Conflict("Project already liked".to_string()))?;

    Ok(Json(ApiResponse::with_message(
        "Project liked!",
        LikeResult { likes },
    )))
}
