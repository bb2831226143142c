use crate::{
    AppState,
    auth::AuthUser,
    error::ApiError,
    models::{
        ApiResponse, CompletionReward, CreateModuleRequest, Difficulty, Module, ModuleCategory,
        UpdateModuleRequest,
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

/// ModuleFilter
///
/// Defines the accepted query parameters for the public module listing endpoint (GET /api/modules).
/// Used by Axum's Query extractor to safely bind HTTP query parameters for filtering and search.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ModuleFilter {
    /// Optional filter for a single sustainability topic.
    pub category: Option<ModuleCategory>,
    /// Optional filter for the learning-curve rating.
    pub difficulty: Option<Difficulty>,
    /// Optional case-insensitive search string for module title/description matching.
    pub search: Option<String>,
}

// --- Handlers ---

/// list_modules
///
/// [Public Route] Lists published modules with filtering and search capabilities.
///
/// *Security*: The repository method applies the `published = true` filter **unconditionally**
/// so drafts never leak into anonymous listings.
#[utoipa::path(
    get,
    path = "/api/modules",
    params(ModuleFilter),
    responses((status = 200, description = "List filtered modules", body = ApiResponse<Vec<Module>>))
)]
pub async fn list_modules(
    State(state): State<AppState>,
    Query(filter): Query<ModuleFilter>,
) -> Result<Json<ApiResponse<Vec<Module>>>, ApiError> {
    let modules = state
        .repo
        .list_modules(filter.category, filter.difficulty, filter.search)
        .await?;
    Ok(Json(ApiResponse::list(modules)))
}

/// get_module
///
/// [Public Route] Retrieves a single module's details by ID.
/// Deliberately skips the published check so a direct link to a draft still resolves.
#[utoipa::path(
    get,
    path = "/api/modules/{id}",
    params(("id" = Uuid, Path, description = "Module ID")),
    responses(
        (status = 200, description = "Found", body = ApiResponse<Module>),
        (status = 404, description = "Module not found")
    )
)]
pub async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Module>>, ApiError> {
    let module = state
        .repo
        .get_module(id)
        .await?
        .ok_or(ApiError::NotFound("Module"))?;
    Ok(Json(ApiResponse::data(module)))
}

/// create_module
///
/// [Admin Route] Handles the submission of a new learning module.
/// The author is taken from the authenticated session, never from the payload.
///
/// *RBAC*: Strict enforcement of the "admin" role before calling the repository.
#[utoipa::path(
    post,
    path = "/api/modules",
    request_body = CreateModuleRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<Module>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn create_module(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateModuleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Module>>), ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let module = state.repo.create_module(payload, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Module created successfully", module)),
    ))
}

/// update_module
///
/// [Admin Route] Partially updates an existing module.
/// Absent payload fields keep their stored values (COALESCE in the repository).
#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    params(("id" = Uuid, Path, description = "Module ID")),
    request_body = UpdateModuleRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<Module>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Module not found")
    )
)]
pub async fn update_module(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModuleRequest>,
) -> Result<Json<ApiResponse<Module>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let module = state
        .repo
        .update_module(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Module"))?;
    Ok(Json(ApiResponse::with_message(
        "Module updated successfully",
        module,
    )))
}

/// delete_module
///
/// [Admin Route] Removes a module. Completion records cascade away with it while
/// points already credited to learners are kept.
#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    params(("id" = Uuid, Path, description = "Module ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Module not found")
    )
)]
pub async fn delete_module(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    if state.repo.delete_module(id).await? {
        Ok(Json(ApiResponse::message("Module deleted successfully")))
    } else {
        Err(ApiError::NotFound("Module"))
    }
}

/// complete_module
///
/// [Authenticated Route] Marks a module as completed by the requesting user and
/// credits the module's reward to their progress totals.
///
/// *Idempotency*: The repository records the completion and credits the reward in a
/// **single atomic statement** keyed on the `module_completions` composite primary key.
/// A repeat completion changes nothing and reports a 409 Conflict.
#[utoipa::path(
    post,
    path = "/api/modules/{id}/complete",
    params(("id" = Uuid, Path, description = "Module ID")),
    responses(
        (status = 200, description = "Completed", body = ApiResponse<CompletionReward>),
        (status = 404, description = "Module not found"),
        (status = 409, description = "Already completed")
    )
)]
pub async fn complete_module(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CompletionReward>>, ApiError> {
    // Fetch first so a missing module reports 404 rather than a conflict.
    let module = state
        .repo
        .get_module(id)
        .await?
        .ok_or(ApiError::NotFound("Module"))?;

    let reward = state
        .repo
        .complete_module(user_id, module.id, module.points, module.carbon_impact)
        .await?
        .ok_or_else(|| ApiError::Conflict("Module already completed".to_string()))?;

    Ok(Json(ApiResponse::with_message(
        "Module completed successfully!",
        reward,
    )))
}
