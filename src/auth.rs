use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    error::ApiError,
    repository::RepositoryState,
};

/// Claims
///
/// Represents the standard payload structure expected inside a JSON Web Token (JWT).
/// These claims are signed by the identity provider's secret and validated upon every
/// authenticated request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): The UUID of the user. This is the primary key used to fetch
    /// the user's details and role from the `users` table.
    pub sub: Uuid,
    /// Expiration Time (exp): Timestamp after which the JWT must not be accepted.
    /// This is crucial for preventing replay attacks and maintaining session freshness.
    pub exp: usize,
    /// Issued At (iat): Timestamp when the JWT was issued.
    pub iat: usize,
}

/// AuthUser Extractor Result
///
/// This struct represents the resolved identity of an authenticated request.
/// It is the core output of the AuthUser extractor implementation.
/// Handlers use this struct to retrieve the user's ID and verify permissions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The unique identifier of the user, issued by the auth provider and
    /// mirrored into the local `users` table.
    pub id: Uuid,
    /// The user's role, 'user' or 'admin'. Used for Role-Based Access Control (RBAC).
    pub role: String,
}

/// AuthUser Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthUser usable as a function argument
/// in any authenticated handler. This cleanly separates authentication
/// (middleware/extractor) from business logic (the handler).
///
/// The entire process involves:
/// 1. Dependency Resolution: Accessing Repository and AppConfig from the application state.
/// 2. Local Bypass: Allowing development-time access using the 'x-user-id' header.
/// 3. Token Validation: Standard Bearer token extraction and JWT decoding.
/// 4. DB Lookup: Fetching the user's current role and existence from PostgreSQL.
///
/// Rejection: `ApiError::Unauthorized` (401, enveloped) on any identity failure;
/// a storage failure during the lookup surfaces as the usual 500 envelope.
impl<S> FromRequestParts<S> for AuthUser
where
    // S must allow sending across threads and sharing.
    S: Send + Sync,
    // Allows the extractor to pull the Repository State from the app state.
    RepositoryState: FromRef<S>,
    // Allows the extractor to pull the AppConfig (for JWT secret and Env check).
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Dependency Resolution
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        // 2. Local Development Bypass Check
        // If the application is running in Env::Local, we allow authentication by
        // providing a known, valid UUID in the 'x-user-id' header.
        // This accelerates development but is guarded by the Env check.
        if config.env == Env::Local {
            if let Some(user_id_header) = parts.headers.get("x-user-id") {
                if let Ok(id_str) = user_id_header.to_str() {
                    if let Ok(user_id) = Uuid::parse_str(id_str) {
                        // We verify that this UUID maps to an actual user row in the
                        // local development database so roles are correctly loaded.
                        if let Ok(Some(user)) = repo.find_user(user_id).await {
                            return Ok(AuthUser {
                                id: user.id,
                                role: user.role,
                            });
                        }
                    }
                }
            }
        }
        // If Env is Production, or if the bypass failed (e.g., header was bad or user
        // not found), execution falls through to the standard JWT validation flow.

        // 3. Token Extraction
        // Attempt to retrieve the Authorization header and ensure it is prefixed with "Bearer ".
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        // 4. JWT Decoding Setup
        let secret = &config.jwt_secret;
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::default();

        // Ensure expiration time validation is always active.
        validation.validate_exp = true;

        // 5. Decode and Validate the Token
        let token_data = match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                match e.kind() {
                    // Token expired: This is the most common failure for a valid-but-old token.
                    ErrorKind::ExpiredSignature => return Err(ApiError::Unauthorized),
                    // Catch all other failure types (bad signature, malformed token, etc.).
                    _ => return Err(ApiError::Unauthorized),
                }
            }
        };

        let user_id = token_data.claims.sub;

        // 6. Database Lookup (Final Verification)
        // Check the database for the user's existence and retrieve their current role.
        // This prevents access if the user was deleted after the token was issued.
        let user = repo
            .find_user(user_id)
            .await?
            // If the user is not found, the token is technically valid but the user is not active.
            .ok_or(ApiError::Unauthorized)?;

        // Success: Return the resolved identity.
        Ok(AuthUser {
            id: user.id,
            role: user.role,
        })
    }
}
