/// Handler Module Index
///
/// Groups the HTTP handlers by the API surface they serve. Every handler speaks
/// the uniform `ApiResponse` envelope and fails through `ApiError`, keeping
/// status codes and body shapes consistent across the whole API.

/// Account lifecycle: registration via the external auth provider, the
/// authenticated profile endpoint, and the service banner/health endpoints.
pub mod account;

/// CRUD and the completion flow for guided learning modules.
pub mod modules;

/// CRUD, the completion flow, and likes for DIY projects.
pub mod projects;

/// CRUD and view tracking for the resource library.
pub mod resources;
