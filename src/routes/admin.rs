use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{post, put},
};

/// Admin Router Module
///
/// Defines the content-authoring routes exclusively accessible to users with the
/// 'admin' role: creating, updating, and deleting modules, projects, and resources.
///
/// Access Control:
/// Each handler authenticates via the `AuthUser` extractor and then explicitly
/// checks for `role='admin'` before touching the repository. The mutating verbs
/// share paths with the public read endpoints; merging the routers combines the
/// method tables so the access rules stay verb-scoped.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // POST /api/modules
        // Publishes a new learning module authored by the requesting admin.
        .route("/api/modules", post(handlers::modules::create_module))
        // PUT/DELETE /api/modules/{id}
        // Edits or removes an existing module. Deleting cascades the completion
        // records while leaving already-credited user points untouched.
        .route(
            "/api/modules/{id}",
            put(handlers::modules::update_module).delete(handlers::modules::delete_module),
        )
        // POST /api/projects
        // Publishes a new DIY project.
        .route("/api/projects", post(handlers::projects::create_project))
        // PUT/DELETE /api/projects/{id}
        // Edits or removes an existing project along with its likes and completions.
        .route(
            "/api/projects/{id}",
            put(handlers::projects::update_project).delete(handlers::projects::delete_project),
        )
        // POST /api/resources
        // Adds a new resource to the library.
        .route("/api/resources", post(handlers::resources::create_resource))
        // PUT/DELETE /api/resources/{id}
        // Edits or removes an existing library resource.
        .route(
            "/api/resources/{id}",
            put(handlers::resources::update_resource).delete(handlers::resources::delete_resource),
        )
}
