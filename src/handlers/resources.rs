use crate::{
    AppState,
    auth::AuthUser,
    error::ApiError,
    models::{
        ApiResponse, CreateResourceRequest, Resource, ResourceCategory, ResourceType,
        UpdateResourceRequest,
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

/// ResourceFilter
///
/// Defines the accepted query parameters for the public resource listing endpoint (GET /api/resources).
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ResourceFilter {
    /// Optional filter for a single topic bucket.
    pub category: Option<ResourceCategory>,
    /// Optional filter for the media kind. The query parameter is named `type`.
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    /// Optional case-insensitive search string for resource title/description matching.
    pub search: Option<String>,
}

// --- Handlers ---

/// list_resources
///
/// [Public Route] Lists published library resources with filtering and search capabilities.
///
/// *Security*: The repository method applies the `published = true` filter **unconditionally**.
#[utoipa::path(
    get,
    path = "/api/resources",
    params(ResourceFilter),
    responses((status = 200, description = "List filtered resources", body = ApiResponse<Vec<Resource>>))
)]
pub async fn list_resources(
    State(state): State<AppState>,
    Query(filter): Query<ResourceFilter>,
) -> Result<Json<ApiResponse<Vec<Resource>>>, ApiError> {
    let resources = state
        .repo
        .list_resources(filter.category, filter.resource_type, filter.search)
        .await?;
    Ok(Json(ApiResponse::list(resources)))
}

/// get_resource
///
/// [Public Route] Retrieves a single resource by ID.
///
/// *Note*: Reading a resource counts as a view; the repository folds the `views`
/// increment into the retrieval statement, so the returned record already carries
/// the bumped counter.
#[utoipa::path(
    get,
    path = "/api/resources/{id}",
    params(("id" = Uuid, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Found", body = ApiResponse<Resource>),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Resource>>, ApiError> {
    let resource = state
        .repo
        .view_resource(id)
        .await?
        .ok_or(ApiError::NotFound("Resource"))?;
    Ok(Json(ApiResponse::data(resource)))
}

/// create_resource
///
/// [Admin Route] Adds a new resource to the library.
///
/// *RBAC*: Strict enforcement of the "admin" role before calling the repository.
#[utoipa::path(
    post,
    path = "/api/resources",
    request_body = CreateResourceRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<Resource>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn create_resource(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Resource>>), ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let resource = state.repo.create_resource(payload, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Resource created successfully",
            resource,
        )),
    ))
}

/// update_resource
///
/// [Admin Route] Partially updates a resource, COALESCE semantics as for modules.
#[utoipa::path(
    put,
    path = "/api/resources/{id}",
    params(("id" = Uuid, Path, description = "Resource ID")),
    request_body = UpdateResourceRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<Resource>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn update_resource(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateResourceRequest>,
) -> Result<Json<ApiResponse<Resource>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;

    let resource = state
        .repo
        .update_resource(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Resource"))?;
    Ok(Json(ApiResponse::with_message(
        "Resource updated successfully",
        resource,
    )))
}

/// delete_resource
///
/// [Admin Route] Removes a resource from the library.
#[utoipa::path(
    delete,
    path = "/api/resources/{id}",
    params(("id" = Uuid, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn delete_resource(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if role != "admin" {
        return Err(ApiError::Forbidden);
    }
    if state.repo.delete_resource(id).await? {
        Ok(Json(ApiResponse::message("Resource deleted successfully")))
    } else {
        Err(ApiError::NotFound("Resource"))
    }
}
