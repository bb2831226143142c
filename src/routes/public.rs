use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client
/// (anonymous or logged-in). These routes cover read-only access to published
/// content and core gateway functions like registration.
///
/// Security Mandate:
/// All listing handlers in this module must enforce `published = true` at the
/// Repository level so draft content never reaches anonymous clients. Reads by
/// ID deliberately skip that filter, keeping direct links to drafts usable.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Service banner: greeting, version, and a map of the top-level API surfaces.
        .route("/", get(handlers::account::welcome))
        // GET /api/health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        .route("/api/health", get(handlers::account::health_check))
        // POST /api/auth/register
        // Endpoint for new user creation and initial profile setup. The credential part
        // of the identity flow is delegated to the external auth provider.
        .route("/api/auth/register", post(handlers::account::register_user))
        // GET /api/modules?category=...&difficulty=...&search=...
        // Lists published learning modules, supporting topic/difficulty filtering and search.
        .route("/api/modules", get(handlers::modules::list_modules))
        // GET /api/modules/{id}
        // Retrieves the detailed view of a single module, including its resources and quiz.
        .route("/api/modules/{id}", get(handlers::modules::get_module))
        // GET /api/projects?category=...&difficulty=...&search=...
        // Lists published DIY projects with their derived like/completion counters.
        .route("/api/projects", get(handlers::projects::list_projects))
        // GET /api/projects/{id}
        // Retrieves the detailed view of a single project, materials and steps included.
        .route("/api/projects/{id}", get(handlers::projects::get_project))
        // GET /api/resources?category=...&type=...&search=...
        // Lists published library resources, filterable by topic and media kind.
        .route("/api/resources", get(handlers::resources::list_resources))
        // GET /api/resources/{id}
        // Retrieves a single resource and records the view in the same statement.
        .route("/api/resources/{id}", get(handlers::resources::get_resource))
}
