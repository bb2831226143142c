use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{Method, Request, Uri, header, request::Parts},
};
use eco_learn::{
    ApiError, AppState,
    auth::{AuthUser, Claims},
    config::{AppConfig, Env},
    models::{
        CompletionReward, CreateModuleRequest, CreateProjectRequest, CreateResourceRequest,
        Module, Project, Resource, UpdateModuleRequest, UpdateProjectRequest,
        UpdateResourceRequest, User, UserProfile,
    },
    repository::Repository,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use std::{sync::Arc, time::SystemTime};
use uuid::Uuid;

// --- Mock Repository for Auth Logic ---

// Only find_user matters to the extractor; everything else is a placeholder
// to satisfy the trait.
#[derive(Default)]
struct MockAuthRepo {
    user_to_return: Option<User>,
}

#[async_trait]
impl Repository for MockAuthRepo {
    async fn find_user(&self, _id: Uuid) -> sqlx::Result<Option<User>> {
        Ok(self.user_to_return.clone())
    }

    async fn list_modules(
        &self,
        _category: Option<eco_learn::models::ModuleCategory>,
        _difficulty: Option<eco_learn::models::Difficulty>,
        _search: Option<String>,
    ) -> sqlx::Result<Vec<Module>> {
        Ok(vec![])
    }
    async fn get_module(&self, _id: Uuid) -> sqlx::Result<Option<Module>> {
        Ok(None)
    }
    async fn create_module(
        &self,
        _req: CreateModuleRequest,
        _created_by: Uuid,
    ) -> sqlx::Result<Module> {
        Ok(Module::default())
    }
    async fn update_module(
        &self,
        _id: Uuid,
        _req: UpdateModuleRequest,
    ) -> sqlx::Result<Option<Module>> {
        Ok(None)
    }
    async fn delete_module(&self, _id: Uuid) -> sqlx::Result<bool> {
        Ok(false)
    }
    async fn complete_module(
        &self,
        _user_id: Uuid,
        _module_id: Uuid,
        _points: i32,
        _carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>> {
        Ok(None)
    }

    async fn list_projects(
        &self,
        _category: Option<eco_learn::models::ProjectCategory>,
        _difficulty: Option<eco_learn::models::ProjectDifficulty>,
        _search: Option<String>,
    ) -> sqlx::Result<Vec<Project>> {
        Ok(vec![])
    }
    async fn get_project(&self, _id: Uuid) -> sqlx::Result<Option<Project>> {
        Ok(None)
    }
    async fn create_project(
        &self,
        _req: CreateProjectRequest,
        _created_by: Uuid,
    ) -> sqlx::Result<Project> {
        Ok(Project::default())
    }
    async fn update_project(
        &self,
        _id: Uuid,
        _req: UpdateProjectRequest,
    ) -> sqlx::Result<Option<Project>> {
        Ok(None)
    }
    async fn delete_project(&self, _id: Uuid) -> sqlx::Result<bool> {
        Ok(false)
    }
    async fn complete_project(
        &self,
        _user_id: Uuid,
        _project_id: Uuid,
        _points: i32,
        _carbon_impact: f64,
    ) -> sqlx::Result<Option<CompletionReward>> {
        Ok(None)
    }
    async fn like_project(&self, _user_id: Uuid, _project_id: Uuid) -> sqlx::Result<Option<i64>> {
        Ok(None)
    }

    async fn list_resources(
        &self,
        _category: Option<eco_learn::models::ResourceCategory>,
        _resource_type: Option<eco_learn::models::ResourceType>,
        _search: Option<String>,
    ) -> sqlx::Result<Vec<Resource>> {
        Ok(vec![])
    }
    async fn view_resource(&self, _id: Uuid) -> sqlx::Result<Option<Resource>> {
        Ok(None)
    }
    async fn create_resource(
        &self,
        _req: CreateResourceRequest,
        _created_by: Uuid,
    ) -> sqlx::Result<Resource> {
        Ok(Resource::default())
    }
    async fn update_resource(
        &self,
        _id: Uuid,
        _req: UpdateResourceRequest,
    ) -> sqlx::Result<Option<Resource>> {
        Ok(None)
    }
    async fn delete_resource(&self, _id: Uuid) -> sqlx::Result<bool> {
        Ok(false)
    }

    async fn create_user(
        &self,
        _id: Uuid,
        _name: String,
        _email: String,
        _role: String,
    ) -> sqlx::Result<User> {
        Ok(User::default())
    }
    async fn get_profile(&self, _id: Uuid) -> sqlx::Result<Option<UserProfile>> {
        Ok(None)
    }
}

// --- Helper Functions ---

const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";
const TEST_USER_ID: Uuid = Uuid::from_u128(1);

// Signs a token expiring `exp_offset` seconds from now. Negative offsets
// produce already-expired tokens; stay beyond the validator's leeway window.
fn create_token_with_secret(user_id: Uuid, exp_offset: i64, secret: &str) -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + exp_offset) as usize,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

fn create_token(user_id: Uuid, exp_offset: i64) -> String {
    create_token_with_secret(user_id, exp_offset, TEST_JWT_SECRET)
}

fn create_app_state(env: Env, repo: MockAuthRepo, jwt_secret: String) -> AppState {
    let mut config = AppConfig::default();
    config.env = env;
    config.jwt_secret = jwt_secret;

    AppState {
        repo: Arc::new(repo),
        config,
    }
}

fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

fn test_user() -> User {
    User {
        id: TEST_USER_ID,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role: "user".to_string(),
        ..User::default()
    }
}

// --- Tests ---

#[tokio::test]
async fn test_auth_success_with_valid_jwt() {
    let token = create_token(TEST_USER_ID, 3600);

    let mock_repo = MockAuthRepo {
        user_to_return: Some(test_user()),
    };
    let app_state = create_app_state(Env::Production, mock_repo, TEST_JWT_SECRET.to_string());

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(auth_user.is_ok());
    let user = auth_user.unwrap();
    assert_eq!(user.id, TEST_USER_ID);
    assert_eq!(user.role, "user");
}

#[tokio::test]
async fn test_auth_failure_with_missing_header() {
    let app_state = create_app_state(
        Env::Production,
        MockAuthRepo::default(),
        TEST_JWT_SECRET.to_string(),
    );

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_auth_failure_with_expired_jwt() {
    // Two hours past expiry, well beyond the default validation leeway.
    let token = create_token(TEST_USER_ID, -7200);

    let mock_repo = MockAuthRepo {
        user_to_return: Some(test_user()),
    };
    let app_state = create_app_state(Env::Production, mock_repo, TEST_JWT_SECRET.to_string());

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_auth_failure_with_wrong_secret() {
    let token = create_token_with_secret(TEST_USER_ID, 3600, "some-other-secret");

    let mock_repo = MockAuthRepo {
        user_to_return: Some(test_user()),
    };
    let app_state = create_app_state(Env::Production, mock_repo, TEST_JWT_SECRET.to_string());

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_auth_failure_with_malformed_scheme() {
    let token = create_token(TEST_USER_ID, 3600);

    let app_state = create_app_state(
        Env::Production,
        MockAuthRepo {
            user_to_return: Some(test_user()),
        },
        TEST_JWT_SECRET.to_string(),
    );

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    // Valid token, wrong scheme prefix.
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Token {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_auth_failure_when_user_deleted() {
    // The token verifies, but the subject no longer exists in the users table.
    let token = create_token(TEST_USER_ID, 3600);

    let app_state = create_app_state(
        Env::Production,
        MockAuthRepo {
            user_to_return: None,
        },
        TEST_JWT_SECRET.to_string(),
    );

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_local_bypass_success() {
    let mock_user_id = Uuid::new_v4();
    let mock_repo = MockAuthRepo {
        user_to_return: Some(User {
            id: mock_user_id,
            name: "Local Dev".to_string(),
            email: "local@dev.com".to_string(),
            role: "admin".to_string(),
            ..User::default()
        }),
    };
    let app_state = create_app_state(Env::Local, mock_repo, TEST_JWT_SECRET.to_string());

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&mock_user_id.to_string()).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(auth_user.is_ok());
    let user = auth_user.unwrap();
    assert_eq!(user.id, mock_user_id);
    assert_eq!(user.role, "admin");
}

#[tokio::test]
async fn test_local_bypass_disabled_in_prod() {
    let mock_user_id = Uuid::new_v4();
    let app_state = create_app_state(
        Env::Production,
        MockAuthRepo {
            user_to_return: Some(test_user()),
        },
        TEST_JWT_SECRET.to_string(),
    );

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    // Provide ONLY the local bypass header.
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&mock_user_id.to_string()).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_local_bypass_unknown_user_falls_through() {
    // Header present in Local mode but the UUID maps to no user row, so the
    // extractor falls through to the (absent) Bearer flow and rejects.
    let app_state = create_app_state(
        Env::Local,
        MockAuthRepo {
            user_to_return: None,
        },
        TEST_JWT_SECRET.to_string(),
    );

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
    );

    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(matches!(auth_user, Err(ApiError::Unauthorized)));
}
