use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated Router Module
///
/// Defines the routes accessible to any user who has successfully passed the
/// authentication layer. This module implements the core gamification features
/// for a standard user: completing modules and projects, and liking projects.
///
/// Access Control Strategy:
/// Every handler in this module relies on the `AuthUser` extractor middleware being present
/// on the router layer above this module. This guarantees that all handlers receive a
/// validated `AuthUser` struct containing the user's ID and role, which keys all the
/// per-user membership writes (completions and likes).
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /api/auth/me
        // Retrieves the currently authenticated user's profile, including the progress
        // block with points, carbon total, badges, and completed-item ID sets.
        .route("/api/auth/me", get(handlers::account::get_me))
        // POST /api/modules/{id}/complete
        // Marks the module as completed by this user and credits its reward.
        // The write is atomic and keyed on (user_id, module_id), so repeats report 409.
        .route(
            "/api/modules/{id}/complete",
            post(handlers::modules::complete_module),
        )
        // POST /api/projects/{id}/complete
        // Same completion flow for DIY projects, keyed on (user_id, project_id).
        .route(
            "/api/projects/{id}/complete",
            post(handlers::projects::complete_project),
        )
        // POST /api/projects/{id}/like
        // Registers a like for a specific project. The handler enforces **one like per
        // user per project** via the composite primary key on `project_likes`.
        .route(
            "/api/projects/{id}/like",
            post(handlers::projects::like_project),
        )
}
