use crate::{
    AppState,
    auth::AuthUser,
    error::ApiError,
    models::{ApiResponse, RegisterUserRequest, User, UserProfile},
};
use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// ProviderSignupResponse
///
/// Minimal struct to deserialize the response from the external auth provider's
/// /auth/v1/signup endpoint, specifically capturing the newly created user's UUID.
#[derive(Deserialize)]
struct ProviderSignupResponse {
    id: Uuid,
}

// --- Handlers ---

/// welcome
///
/// [Public Route] Service banner served at the root path: a short greeting and a
/// map of the top-level API surfaces for anyone poking at the base URL.
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Sustainable Living Education Platform API",
        "version": "1.0.0",
        "endpoints": {
            "auth": "/api/auth",
            "modules": "/api/modules",
            "projects": "/api/projects",
            "resources": "/api/resources"
        }
    }))
}

/// health_check
///
/// [Public Route] Unauthenticated endpoint used for monitoring and load balancer checks.
/// Answers immediately without touching the database.
pub async fn health_check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("API is healthy"))
}

/// register_user
///
/// [Public Route] Handles initial user registration via the external auth provider.
///
/// *Flow*: Calls the provider's signup endpoint, retrieves the canonical user UUID, and then
/// uses that ID to create the corresponding record in the application's local `users` table.
/// This ensures primary key synchronization between the external auth system and our schema.
///
/// *Security*: Self-registered accounts always start with the 'user' role; admin accounts
/// are provisioned by the seed tooling, never through this endpoint. The password only
/// transits to the provider and is never persisted or logged here.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<User>),
        (status = 400, description = "Validation failed or provider rejection")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    payload.validate()?;

    // Step 1: Call the external auth provider.
    let client = reqwest::Client::new();
    let signup_url = format!("{}/auth/v1/signup", state.config.auth_provider_url);

    let response = client
        .post(signup_url)
        .header("apikey", &state.config.auth_provider_key)
        .header("Content-Type", "application/json")
        .json(&json!({ "email": payload.email, "password": payload.password }))
        .send()
        .await?;

    if !response.status().is_success() {
        // The provider rejects duplicate emails and weak passwords; relay as a client error.
        return Err(ApiError::Validation(
            "Registration rejected by the auth provider".to_string(),
        ));
    }

    // Step 2: Extract the canonical user ID from the external response.
    let provider_user = response.json::<ProviderSignupResponse>().await?;

    // Step 3: Mirror the identity in the local `users` table.
    let user = match state
        .repo
        .create_user(
            provider_user.id,
            payload.name,
            payload.email,
            "user".to_string(),
        )
        .await
    {
        Ok(user) => user,
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
            return Err(ApiError::Validation("Email already registered".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User registered successfully", user)),
    ))
}

/// get_me
///
/// [Authenticated Route] Provides the authenticated user's profile, including the
/// gamified progress block with the completed module/project ID sets.
///
/// *Note*: The user identity (`id`) is resolved securely via the `AuthUser` extractor.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile", body = ApiResponse<UserProfile>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state
        .repo
        .get_profile(id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(ApiResponse::data(profile)))
}
